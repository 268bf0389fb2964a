//! Cross-referencing properties to the nodes they control
//!
//! A property's target is found in the component template, then matched to
//! the equivalent node inside a fresh instance so it can be highlighted.
//! Instances carry new ids, so matching is structural, never by identity.

use tracing::{debug, warn};

use crate::layout::BoundingBox;
use crate::scene::{Instance, PropertyDefinition, PropertyValue, SceneNode};

use super::property::PropertyKey;

/// How a template node is matched inside an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// First node in depth-first order with the same name.
    ///
    /// Sibling or cousin nodes sharing a name resolve to the first one.
    #[default]
    Name,
    /// Same child-index path from the root, if the name agrees there;
    /// otherwise the name match.
    Path,
}

/// Find the first node (root included, depth-first) whose property
/// references name `key` as visibility, text, or swap target
pub fn find_referencing_node<'a>(root: &'a SceneNode, key: &PropertyKey) -> Option<&'a SceneNode> {
    root.walk()
        .into_iter()
        .find(|node| node.component_property_references.references(key.raw()))
}

/// First node in depth-first order named `name`
pub fn find_by_name<'a>(root: &'a SceneNode, name: &str) -> Option<&'a SceneNode> {
    root.walk().into_iter().find(|node| node.name == name)
}

/// Child-index path from `root` to `target` (which must live inside `root`)
pub fn path_to(root: &SceneNode, target: &SceneNode) -> Option<Vec<usize>> {
    if std::ptr::eq(root, target) {
        return Some(vec![]);
    }
    root.children.iter().enumerate().find_map(|(i, child)| {
        path_to(child, target).map(|mut rest| {
            rest.insert(0, i);
            rest
        })
    })
}

pub fn node_at_path<'a>(root: &'a SceneNode, path: &[usize]) -> Option<&'a SceneNode> {
    path.iter()
        .try_fold(root, |node, &i| node.children.get(i))
}

/// Make the property's target visible on the instance.
///
/// A boolean property defaulting to false is switched on, and so is any
/// other property that hides the target node. Both are best effort: a
/// stale reference is logged and otherwise ignored.
pub fn reveal(
    instance: &mut Instance,
    key: &PropertyKey,
    def: &PropertyDefinition,
    target: &SceneNode,
) {
    if matches!(
        def,
        PropertyDefinition::Boolean {
            default_value: false
        }
    ) {
        if let Err(e) = instance.set_property(key.raw(), PropertyValue::Bool(true)) {
            warn!(property = key.raw(), error = %e, "could not switch property on");
        }
    }

    if let Some(visibility) = &target.component_property_references.visible {
        if visibility != key.raw() {
            if let Err(e) = instance.set_property(visibility, PropertyValue::Bool(true)) {
                warn!(property = visibility.as_str(), error = %e, "could not switch visibility property on");
            }
        }
    }
}

/// Locate the instance node equivalent to `target` from `template`
pub fn locate_in_instance<'a>(
    instance: &'a Instance,
    template: &SceneNode,
    target: &SceneNode,
    strategy: MatchStrategy,
) -> Option<&'a SceneNode> {
    if strategy == MatchStrategy::Path {
        let by_path = path_to(template, target)
            .and_then(|path| node_at_path(&instance.root, &path))
            .filter(|node| node.name == target.name);
        if by_path.is_some() {
            return by_path;
        }
        debug!(node = target.name.as_str(), "path match failed, matching by name");
    }
    find_by_name(&instance.root, &target.name)
}

/// Bounds of `node` relative to the instance origin
pub fn highlight_bounds(instance: &Instance, node: &SceneNode) -> Option<BoundingBox> {
    let origin = instance.absolute_bounds()?;
    let bounds = node.absolute_bounding_box?;
    Some(BoundingBox::new(
        bounds.x - origin.x,
        bounds.y - origin.y,
        bounds.width,
        bounds.height,
    ))
}

/// Run the full cross-reference for one property.
///
/// Mutates the instance so the controlled element is shown, and returns the
/// highlight rectangle relative to the instance, if every lookup succeeded.
pub fn cross_reference(
    template: &SceneNode,
    instance: &mut Instance,
    key: &PropertyKey,
    def: &PropertyDefinition,
    strategy: MatchStrategy,
) -> Option<BoundingBox> {
    let Some(target) = find_referencing_node(template, key) else {
        debug!(property = key.raw(), "no node references property");
        return None;
    };

    reveal(instance, key, def, target);

    let Some(node) = locate_in_instance(instance, template, target, strategy) else {
        debug!(
            property = key.raw(),
            node = target.name.as_str(),
            "referenced node not found in instance"
        );
        return None;
    };
    highlight_bounds(instance, node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeType, PropertyDefinitions, PropertyReferences};

    fn refs_visible(key: &str) -> PropertyReferences {
        PropertyReferences {
            visible: Some(key.to_string()),
            ..Default::default()
        }
    }

    /// Button with a hidden icon inside a hidden slot:
    /// `Slot` is toggled by `Has slot`, `Icon` by `Icon#1:0`
    fn template() -> (SceneNode, PropertyDefinitions) {
        let mut icon = SceneNode::new("1:4", "Icon", NodeType::Vector)
            .with_bounds(BoundingBox::new(112.0, 212.0, 16.0, 16.0));
        icon.visible = false;
        icon.component_property_references = refs_visible("Icon#1:0");

        let mut slot = SceneNode::new("1:3", "Slot", NodeType::Frame)
            .with_bounds(BoundingBox::new(108.0, 208.0, 24.0, 24.0))
            .with_children(vec![icon]);
        slot.visible = false;
        slot.component_property_references = refs_visible("Has slot#5:0");

        let mut label = SceneNode::new("1:5", "Label", NodeType::Text)
            .with_bounds(BoundingBox::new(140.0, 212.0, 60.0, 16.0));
        label.component_property_references = PropertyReferences {
            characters: Some("Label#2:0".to_string()),
            ..Default::default()
        };

        let component = SceneNode::new("1:2", "State=Default", NodeType::Component)
            .with_bounds(BoundingBox::new(100.0, 200.0, 120.0, 40.0))
            .with_children(vec![slot, label]);

        let mut defs = PropertyDefinitions::new();
        defs.insert(
            "Icon#1:0".to_string(),
            PropertyDefinition::Boolean {
                default_value: false,
            },
        );
        defs.insert(
            "Has slot#5:0".to_string(),
            PropertyDefinition::Boolean {
                default_value: false,
            },
        );
        defs.insert(
            "Label#2:0".to_string(),
            PropertyDefinition::Text {
                default_value: "Button".to_string(),
            },
        );
        (component, defs)
    }

    #[test]
    fn test_find_referencing_node_any_kind() {
        let (component, _) = template();
        let icon = find_referencing_node(&component, &PropertyKey::new("Icon#1:0")).unwrap();
        assert_eq!(icon.name, "Icon");
        let label = find_referencing_node(&component, &PropertyKey::new("Label#2:0")).unwrap();
        assert_eq!(label.name, "Label");
        // Display names are not lookup keys
        assert!(find_referencing_node(&component, &PropertyKey::new("Icon")).is_none());
    }

    #[test]
    fn test_cross_reference_reveals_and_highlights() {
        let (component, defs) = template();
        let key = PropertyKey::new("Icon#1:0");
        let def = defs[key.raw()].clone();
        let mut instance = Instance::from_component(&component, defs, 1);

        let highlight =
            cross_reference(&component, &mut instance, &key, &def, MatchStrategy::Name);

        assert_eq!(highlight, Some(BoundingBox::new(12.0, 12.0, 16.0, 16.0)));
        let icon = find_by_name(&instance.root, "Icon").unwrap();
        assert!(icon.visible);
    }

    #[test]
    fn test_reveal_switches_on_parent_visibility_property() {
        let (component, defs) = template();
        let key = PropertyKey::new("Has slot#5:0");
        let def = defs[key.raw()].clone();
        let mut instance = Instance::from_component(&component, defs, 1);

        cross_reference(&component, &mut instance, &key, &def, MatchStrategy::Name);
        assert!(find_by_name(&instance.root, "Slot").unwrap().visible);
        // The nested icon keeps its own default
        assert!(!find_by_name(&instance.root, "Icon").unwrap().visible);
    }

    #[test]
    fn test_true_default_boolean_is_not_switched() {
        let (mut component, mut defs) = template();
        component.children[1].component_property_references.visible = Some("Badge#3:0".to_string());
        defs.insert(
            "Badge#3:0".to_string(),
            PropertyDefinition::Boolean {
                default_value: true,
            },
        );
        let key = PropertyKey::new("Badge#3:0");
        let def = defs[key.raw()].clone();
        let mut instance = Instance::from_component(&component, defs, 1);
        instance.set_property(key.raw(), PropertyValue::Bool(false)).unwrap();

        let highlight =
            cross_reference(&component, &mut instance, &key, &def, MatchStrategy::Name);

        assert_eq!(instance.property(key.raw()), Some(&PropertyValue::Bool(false)));
        assert!(!find_by_name(&instance.root, "Label").unwrap().visible);
        assert_eq!(highlight, Some(BoundingBox::new(40.0, 12.0, 60.0, 16.0)));
    }

    #[test]
    fn test_stale_visibility_reference_is_not_fatal() {
        let (mut component, mut defs) = template();
        defs.shift_remove("Has slot#5:0");
        component.children[0].component_property_references = refs_visible("Gone#9:9");
        component.children[0].children[0].component_property_references =
            refs_visible("Icon#1:0");
        let key = PropertyKey::new("Icon#1:0");
        let def = defs[key.raw()].clone();
        let mut instance = Instance::from_component(&component, defs, 1);

        let highlight =
            cross_reference(&component, &mut instance, &key, &def, MatchStrategy::Name);
        assert!(highlight.is_some());
    }

    #[test]
    fn test_no_highlight_without_geometry() {
        let (mut component, defs) = template();
        component.absolute_bounding_box = None;
        let key = PropertyKey::new("Label#2:0");
        let def = defs[key.raw()].clone();
        let mut instance = Instance::from_component(&component, defs, 1);
        assert_eq!(
            cross_reference(&component, &mut instance, &key, &def, MatchStrategy::Name),
            None
        );
    }

    #[test]
    fn test_unreferenced_property_has_no_highlight() {
        let (component, defs) = template();
        let key = PropertyKey::new("Orphan#7:0");
        let def = PropertyDefinition::Boolean {
            default_value: true,
        };
        let mut instance = Instance::from_component(&component, defs, 1);
        assert_eq!(
            cross_reference(&component, &mut instance, &key, &def, MatchStrategy::Name),
            None
        );
    }

    #[test]
    fn test_duplicate_names_name_vs_path() {
        // Two children named "Dot"; the property controls the second one
        let first = SceneNode::new("2:2", "Dot", NodeType::Ellipse)
            .with_bounds(BoundingBox::new(0.0, 0.0, 8.0, 8.0));
        let mut second = SceneNode::new("2:3", "Dot", NodeType::Ellipse)
            .with_bounds(BoundingBox::new(20.0, 0.0, 8.0, 8.0));
        second.component_property_references = refs_visible("Badge#3:0");
        let component = SceneNode::new("2:1", "Indicator", NodeType::Component)
            .with_bounds(BoundingBox::new(0.0, 0.0, 40.0, 8.0))
            .with_children(vec![first, second]);
        let mut defs = PropertyDefinitions::new();
        defs.insert(
            "Badge#3:0".to_string(),
            PropertyDefinition::Boolean {
                default_value: true,
            },
        );
        let key = PropertyKey::new("Badge#3:0");
        let def = defs[key.raw()].clone();

        let mut instance = Instance::from_component(&component, defs.clone(), 1);
        let by_name =
            cross_reference(&component, &mut instance, &key, &def, MatchStrategy::Name);
        assert_eq!(by_name, Some(BoundingBox::new(0.0, 0.0, 8.0, 8.0)));

        let mut instance = Instance::from_component(&component, defs, 2);
        let by_path =
            cross_reference(&component, &mut instance, &key, &def, MatchStrategy::Path);
        assert_eq!(by_path, Some(BoundingBox::new(20.0, 0.0, 8.0, 8.0)));
    }

    #[test]
    fn test_path_helpers() {
        let (component, _) = template();
        let icon = &component.children[0].children[0];
        assert_eq!(path_to(&component, icon), Some(vec![0, 0]));
        assert_eq!(
            node_at_path(&component, &[1]).map(|n| n.name.as_str()),
            Some("Label")
        );
        assert!(node_at_path(&component, &[4]).is_none());
    }
}
