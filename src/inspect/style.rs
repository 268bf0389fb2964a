//! Style attribute resolution
//!
//! Turns a single style attribute into a `(label, value)` pair. A bound
//! design token always wins over the literal value; literals are formatted
//! in the units designers read (`#RRGGBB`, `px`, `%`).

use tracing::debug;

use crate::scene::{Blur, Rgb, SceneLookup, Shadow, SolidPaint, VariableAlias};

/// One style-bearing attribute of a node
#[derive(Debug, Clone, PartialEq)]
pub enum StyleAttribute<'a> {
    SolidFill(&'a SolidPaint),
    StrokeColor(&'a SolidPaint),
    StrokeWeight {
        weight: f64,
        binding: Option<&'a VariableAlias>,
    },
    CornerRadius {
        radius: f64,
        binding: Option<&'a VariableAlias>,
    },
    DropShadow(&'a Shadow),
    InnerShadow(&'a Shadow),
    LayerBlur(&'a Blur),
    BackgroundBlur(&'a Blur),
    Opacity {
        opacity: f64,
        binding: Option<&'a VariableAlias>,
    },
}

/// A human-readable style attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub label: &'static str,
    pub value: String,
}

impl ResolvedStyle {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl StyleAttribute<'_> {
    /// Display label of the attribute category
    pub fn label(&self) -> &'static str {
        match self {
            StyleAttribute::SolidFill(_) => "Background",
            StyleAttribute::StrokeColor(_) => "Border color",
            StyleAttribute::StrokeWeight { .. } => "Border width",
            StyleAttribute::CornerRadius { .. } => "Corner radius",
            StyleAttribute::DropShadow(_) => "Drop shadow",
            StyleAttribute::InnerShadow(_) => "Inner shadow",
            StyleAttribute::LayerBlur(_) => "Layer blur",
            StyleAttribute::BackgroundBlur(_) => "Background blur",
            StyleAttribute::Opacity { .. } => "Opacity",
        }
    }

    /// The token binding that replaces the literal value, if any
    pub fn binding(&self) -> Option<&VariableAlias> {
        match self {
            StyleAttribute::SolidFill(paint) | StyleAttribute::StrokeColor(paint) => {
                paint.bound_variables.color.as_ref()
            }
            StyleAttribute::DropShadow(shadow) | StyleAttribute::InnerShadow(shadow) => {
                shadow.bound_variables.color.as_ref()
            }
            StyleAttribute::LayerBlur(blur) | StyleAttribute::BackgroundBlur(blur) => {
                blur.bound_variables.radius.as_ref()
            }
            StyleAttribute::StrokeWeight { binding, .. }
            | StyleAttribute::CornerRadius { binding, .. }
            | StyleAttribute::Opacity { binding, .. } => *binding,
        }
    }

    /// Whether the attribute contributes anything visible.
    ///
    /// Hidden paints and effects are skipped, as are no-op numeric values.
    pub fn is_visible(&self) -> bool {
        match self {
            StyleAttribute::SolidFill(paint) | StyleAttribute::StrokeColor(paint) => paint.visible,
            StyleAttribute::DropShadow(shadow) | StyleAttribute::InnerShadow(shadow) => {
                shadow.visible
            }
            StyleAttribute::LayerBlur(blur) | StyleAttribute::BackgroundBlur(blur) => blur.visible,
            StyleAttribute::StrokeWeight { weight, .. } => *weight > 0.0,
            StyleAttribute::CornerRadius { radius, .. } => *radius > 0.0,
            StyleAttribute::Opacity { opacity, .. } => *opacity < 1.0,
        }
    }

    /// Literal rendering, ignoring any token binding
    pub fn literal(&self) -> String {
        match self {
            StyleAttribute::SolidFill(paint) => {
                let hex = rgb_to_hex(paint.color);
                match paint.opacity {
                    Some(opacity) if opacity < 1.0 => format!("{} ({})", hex, percent(opacity)),
                    _ => hex,
                }
            }
            StyleAttribute::StrokeColor(paint) => rgb_to_hex(paint.color),
            StyleAttribute::StrokeWeight { weight, .. } => px(*weight),
            StyleAttribute::CornerRadius { radius, .. } => px(*radius),
            StyleAttribute::DropShadow(shadow) | StyleAttribute::InnerShadow(shadow) => format!(
                "{} {} {} {} ({})",
                px(shadow.offset.x),
                px(shadow.offset.y),
                px(shadow.radius),
                rgb_to_hex(shadow.color.rgb()),
                percent(shadow.color.a)
            ),
            StyleAttribute::LayerBlur(blur) | StyleAttribute::BackgroundBlur(blur) => {
                px(blur.radius)
            }
            StyleAttribute::Opacity { opacity, .. } => percent(*opacity),
        }
    }
}

/// Resolve one attribute, or `None` if it is hidden or a no-op
pub fn resolve(attribute: &StyleAttribute<'_>, scene: &dyn SceneLookup) -> Option<ResolvedStyle> {
    if !attribute.is_visible() {
        return None;
    }

    if let Some(alias) = attribute.binding() {
        match scene.variable_name(&alias.id) {
            Some(name) => return Some(ResolvedStyle::new(attribute.label(), name)),
            None => debug!(
                token = alias.id.as_str(),
                attribute = attribute.label(),
                "bound token not found, using literal value"
            ),
        }
    }

    Some(ResolvedStyle::new(attribute.label(), attribute.literal()))
}

/// Format a color as `#RRGGBB`.
///
/// Channels are clamped to `[0, 1]`, so the result is always 7 characters.
pub fn rgb_to_hex(color: Rgb) -> String {
    fn channel(c: f64) -> u8 {
        (c.clamp(0.0, 1.0) * 255.0).round() as u8
    }
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

fn percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeId, Offset, PaintBindings, Rgba, SceneNode, VariableId};

    struct Tokens(Vec<(&'static str, &'static str)>);

    impl SceneLookup for Tokens {
        fn node(&self, _id: &NodeId) -> Option<&SceneNode> {
            None
        }

        fn variable_name(&self, id: &VariableId) -> Option<&str> {
            self.0
                .iter()
                .find(|(k, _)| *k == id.as_str())
                .map(|(_, v)| *v)
        }
    }

    fn no_tokens() -> Tokens {
        Tokens(vec![])
    }

    #[test]
    fn test_rgb_to_hex_known_value() {
        assert_eq!(rgb_to_hex(Rgb::new(0.267, 0.506, 0.192)), "#448131");
        assert_eq!(rgb_to_hex(Rgb::new(0.812, 0.090, 0.090)), "#CF1717");
    }

    #[test]
    fn test_rgb_to_hex_is_total() {
        let samples = [0.0, 0.001, 0.25, 0.5, 0.999, 1.0, -0.5, 1.5];
        for r in samples {
            for g in samples {
                for b in samples {
                    let hex = rgb_to_hex(Rgb::new(r, g, b));
                    assert_eq!(hex.len(), 7, "bad hex {} for {} {} {}", hex, r, g, b);
                    assert!(hex.starts_with('#'));
                    assert!(hex[1..]
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
                }
            }
        }
    }

    #[test]
    fn test_fill_with_opacity() {
        let mut paint = SolidPaint::new(Rgb::new(1.0, 1.0, 1.0));
        paint.opacity = Some(0.4);
        let resolved = resolve(&StyleAttribute::SolidFill(&paint), &no_tokens()).unwrap();
        assert_eq!(resolved, ResolvedStyle::new("Background", "#FFFFFF (40%)"));
    }

    #[test]
    fn test_hidden_fill_is_skipped() {
        let mut paint = SolidPaint::new(Rgb::new(1.0, 1.0, 1.0));
        paint.visible = false;
        assert_eq!(resolve(&StyleAttribute::SolidFill(&paint), &no_tokens()), None);
    }

    #[test]
    fn test_bound_token_wins() {
        let mut paint = SolidPaint::new(Rgb::new(1.0, 0.0, 0.0));
        paint.opacity = Some(0.5);
        paint.bound_variables = PaintBindings {
            color: Some(VariableAlias::new("VariableID:1")),
            radius: None,
        };
        let tokens = Tokens(vec![("VariableID:1", "color/danger")]);
        let resolved = resolve(&StyleAttribute::SolidFill(&paint), &tokens).unwrap();
        assert_eq!(resolved.value, "color/danger");

        let stroke = resolve(&StyleAttribute::StrokeColor(&paint), &tokens).unwrap();
        assert_eq!(stroke, ResolvedStyle::new("Border color", "color/danger"));
    }

    #[test]
    fn test_dangling_token_falls_back_to_literal() {
        let alias = VariableAlias::new("VariableID:gone");
        let attr = StyleAttribute::CornerRadius {
            radius: 8.0,
            binding: Some(&alias),
        };
        let resolved = resolve(&attr, &no_tokens()).unwrap();
        assert_eq!(resolved, ResolvedStyle::new("Corner radius", "8px"));
    }

    #[test]
    fn test_noop_numeric_values_are_skipped() {
        let zero_radius = StyleAttribute::CornerRadius {
            radius: 0.0,
            binding: None,
        };
        let zero_stroke = StyleAttribute::StrokeWeight {
            weight: 0.0,
            binding: None,
        };
        let full_opacity = StyleAttribute::Opacity {
            opacity: 1.0,
            binding: None,
        };
        assert_eq!(resolve(&zero_radius, &no_tokens()), None);
        assert_eq!(resolve(&zero_stroke, &no_tokens()), None);
        assert_eq!(resolve(&full_opacity, &no_tokens()), None);
    }

    #[test]
    fn test_shadow_literal() {
        let shadow = Shadow {
            color: Rgba {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.25,
            },
            offset: Offset { x: 0.0, y: 2.0 },
            radius: 4.5,
            visible: true,
            bound_variables: PaintBindings::default(),
        };
        let resolved = resolve(&StyleAttribute::DropShadow(&shadow), &no_tokens()).unwrap();
        assert_eq!(resolved.value, "0px 2px 4.5px #000000 (25%)");
        let inner = resolve(&StyleAttribute::InnerShadow(&shadow), &no_tokens()).unwrap();
        assert_eq!(inner.label, "Inner shadow");
    }

    #[test]
    fn test_blur_and_opacity_literals() {
        let blur = Blur {
            radius: 12.0,
            visible: true,
            bound_variables: PaintBindings::default(),
        };
        assert_eq!(
            resolve(&StyleAttribute::BackgroundBlur(&blur), &no_tokens()),
            Some(ResolvedStyle::new("Background blur", "12px"))
        );
        let opacity = StyleAttribute::Opacity {
            opacity: 0.6,
            binding: None,
        };
        assert_eq!(
            resolve(&opacity, &no_tokens()),
            Some(ResolvedStyle::new("Opacity", "60%"))
        );
    }
}
