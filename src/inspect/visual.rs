//! Visual property extraction for a single node

use crate::scene::{Effect, Paint, SceneLookup, SceneNode};

use super::style::{resolve, ResolvedStyle, StyleAttribute};

/// Collect the style attributes of a node in display order:
/// fills, stroke colors, stroke weight, corner radius, effects, opacity.
pub fn style_attributes(node: &SceneNode) -> Vec<StyleAttribute<'_>> {
    let Some(style) = &node.style else {
        return vec![];
    };

    let mut attributes = vec![];

    attributes.extend(style.fills.iter().filter_map(|paint| match paint {
        Paint::Solid(solid) => Some(StyleAttribute::SolidFill(solid)),
        Paint::Other => None,
    }));

    attributes.extend(style.strokes.iter().filter_map(|paint| match paint {
        Paint::Solid(solid) => Some(StyleAttribute::StrokeColor(solid)),
        Paint::Other => None,
    }));

    if let Some(weight) = style.stroke_weight {
        attributes.push(StyleAttribute::StrokeWeight {
            weight,
            binding: style.bound_variables.stroke_weight.as_ref(),
        });
    }

    if let Some(radius) = style.corner_radius {
        attributes.push(StyleAttribute::CornerRadius {
            radius,
            binding: style.bound_variables.top_left_radius.as_ref(),
        });
    }

    attributes.extend(style.effects.iter().filter_map(|effect| match effect {
        Effect::DropShadow(shadow) => Some(StyleAttribute::DropShadow(shadow)),
        Effect::InnerShadow(shadow) => Some(StyleAttribute::InnerShadow(shadow)),
        Effect::LayerBlur(blur) => Some(StyleAttribute::LayerBlur(blur)),
        Effect::BackgroundBlur(blur) => Some(StyleAttribute::BackgroundBlur(blur)),
        Effect::Other => None,
    }));

    if let Some(opacity) = style.opacity {
        attributes.push(StyleAttribute::Opacity {
            opacity,
            binding: style.bound_variables.opacity.as_ref(),
        });
    }

    attributes
}

/// Resolve every visible style attribute of a node into label/value pairs
pub fn extract_visual_properties(node: &SceneNode, scene: &dyn SceneLookup) -> Vec<ResolvedStyle> {
    style_attributes(node)
        .iter()
        .filter_map(|attribute| resolve(attribute, scene))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeId, NodeStyle, NodeType, VariableAlias, VariableId};
    use pretty_assertions::assert_eq;

    struct Tokens;

    impl SceneLookup for Tokens {
        fn node(&self, _id: &NodeId) -> Option<&SceneNode> {
            None
        }

        fn variable_name(&self, id: &VariableId) -> Option<&str> {
            match id.as_str() {
                "VariableID:radius" => Some("radius/md"),
                _ => None,
            }
        }
    }

    fn styled(json: &str) -> SceneNode {
        let style: NodeStyle = serde_json::from_str(json).unwrap();
        let mut node = SceneNode::new("1:1", "Variant", NodeType::Component);
        node.style = Some(style);
        node
    }

    fn pairs(props: &[ResolvedStyle]) -> Vec<(&str, &str)> {
        props.iter().map(|p| (p.label, p.value.as_str())).collect()
    }

    #[test]
    fn test_node_without_style_is_empty() {
        let node = SceneNode::new("1:1", "Group", NodeType::Group);
        assert!(extract_visual_properties(&node, &Tokens).is_empty());
    }

    #[test]
    fn test_category_order() {
        // Declared out of order on purpose: output order is fixed by category
        let node = styled(
            r#"{
                "opacity": 0.5,
                "effects": [
                    {"type": "LAYER_BLUR", "radius": 2},
                    {"type": "DROP_SHADOW", "color": {"r": 0, "g": 0, "b": 0, "a": 0.1}, "offset": {"x": 0, "y": 1}, "radius": 3}
                ],
                "cornerRadius": 6,
                "strokeWeight": 1,
                "strokes": [{"type": "SOLID", "color": {"r": 0.816, "g": 0.816, "b": 0.816}}],
                "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}]
            }"#,
        );
        let props = extract_visual_properties(&node, &Tokens);
        assert_eq!(
            pairs(&props),
            vec![
                ("Background", "#FFFFFF"),
                ("Border color", "#D0D0D0"),
                ("Border width", "1px"),
                ("Corner radius", "6px"),
                ("Layer blur", "2px"),
                ("Drop shadow", "0px 1px 3px #000000 (10%)"),
                ("Opacity", "50%"),
            ]
        );
    }

    #[test]
    fn test_token_bound_radius_uses_token_name() {
        let mut node = styled(r#"{"cornerRadius": 4}"#);
        if let Some(style) = node.style.as_mut() {
            style.bound_variables.top_left_radius = Some(VariableAlias::new("VariableID:radius"));
        }
        let props = extract_visual_properties(&node, &Tokens);
        assert_eq!(pairs(&props), vec![("Corner radius", "radius/md")]);
    }

    #[test]
    fn test_gradients_and_hidden_effects_skipped() {
        let node = styled(
            r#"{
                "fills": [{"type": "GRADIENT_RADIAL"}],
                "effects": [{"type": "BACKGROUND_BLUR", "radius": 10, "visible": false}],
                "strokeWeight": 0,
                "opacity": 1
            }"#,
        );
        assert!(extract_visual_properties(&node, &Tokens).is_empty());
    }

    #[test]
    fn test_unknown_effect_kind_left_out() {
        let node = styled(
            r#"{
                "effects": [
                    {"type": "NOISE", "noiseSize": 0.3},
                    {"type": "LAYER_BLUR", "radius": 4}
                ]
            }"#,
        );
        let props = extract_visual_properties(&node, &Tokens);
        assert_eq!(pairs(&props), vec![("Layer blur", "4px")]);
    }
}
