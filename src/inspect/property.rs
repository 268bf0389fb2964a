//! Component property definitions rendered for documentation

use crate::scene::{NodeId, PropertyDefinition, PropertyDefinitions, SceneLookup, SceneNode};

/// Delimiter between a property's display name and its host-internal suffix
pub const KEY_SUFFIX_DELIMITER: char = '#';

/// A property key as declared by the host.
///
/// The raw key (`"Show Icon#1234:5678"`) is what every lookup uses; the
/// display name (`"Show Icon"`) is only for labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyKey(String);

impl PropertyKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn display(&self) -> String {
        clean_property_name(&self.0)
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip the host-internal suffix from a property name (idempotent)
pub fn clean_property_name(name: &str) -> String {
    match name.find(KEY_SUFFIX_DELIMITER) {
        Some(idx) => name[..idx].trim().to_string(),
        None => name.trim().to_string(),
    }
}

/// Display metadata for one property definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub type_label: &'static str,
    pub allowed_values: String,
    pub default_value: String,
}

/// Fixed type label of a property kind
pub fn type_label(def: &PropertyDefinition) -> &'static str {
    match def {
        PropertyDefinition::Boolean { .. } => "Boolean",
        PropertyDefinition::Text { .. } => "Text",
        PropertyDefinition::InstanceSwap { .. } => "Instance swap",
        PropertyDefinition::Variant { .. } => "Variant",
    }
}

/// Describe a property definition: type label, allowed values and default
pub fn describe(def: &PropertyDefinition, scene: &dyn SceneLookup) -> PropertyInfo {
    let (allowed_values, default_value) = match def {
        PropertyDefinition::Boolean { default_value } => {
            ("true, false".to_string(), default_value.to_string())
        }
        PropertyDefinition::Text { default_value } => {
            let default = if default_value.is_empty() {
                "(empty)".to_string()
            } else {
                default_value.clone()
            };
            ("Any text".to_string(), default)
        }
        PropertyDefinition::InstanceSwap {
            default_value,
            preferred_values,
        } => {
            let names: Vec<String> = preferred_values
                .iter()
                .map(|pv| {
                    scene
                        .node(&NodeId::new(pv.key.as_str()))
                        .map(|n| n.name.clone())
                        .unwrap_or_else(|| pv.key.clone())
                })
                .filter(|name| !name.is_empty())
                .collect();
            let allowed = if names.is_empty() {
                "Any instance".to_string()
            } else {
                names.join(", ")
            };
            let default = match default_value.as_deref() {
                Some(target) if !target.is_empty() => "Set",
                _ => "None",
            };
            (allowed, default.to_string())
        }
        PropertyDefinition::Variant {
            default_value,
            variant_options,
        } => (variant_options.join(", "), default_value.clone()),
    };

    PropertyInfo {
        type_label: type_label(def),
        allowed_values,
        default_value,
    }
}

/// Non-variant properties in declaration order
pub fn non_variant_properties(
    definitions: &PropertyDefinitions,
) -> Vec<(PropertyKey, &PropertyDefinition)> {
    definitions
        .iter()
        .filter(|(_, def)| !def.is_variant())
        .map(|(key, def)| (PropertyKey::new(key.as_str()), def))
        .collect()
}

/// Pick the variant used to illustrate non-variant properties.
///
/// The first variant whose name mentions "default" wins, otherwise the
/// first declared variant.
pub fn default_variant(component_set: &SceneNode) -> Option<&SceneNode> {
    let first = component_set.variants().next()?;
    Some(
        component_set
            .variants()
            .find(|v| v.name.to_lowercase().contains("default"))
            .unwrap_or(first),
    )
}

/// Turn a variant name like `State=Hover, Size=Large` into `State: Hover, Size: Large`
pub fn format_variant_heading(variant_name: &str) -> String {
    variant_name.replace('=', ": ")
}
