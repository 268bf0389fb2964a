//! Live instances of component templates
//!
//! An instance is a structural copy of a component with fresh ids, placed at
//! its own origin. Setting a property updates every node that references it.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::layout::BoundingBox;

use super::types::{NodeId, NodeType, PropertyDefinition, PropertyDefinitions, SceneNode};

/// Errors raised when applying property values to an instance
#[derive(Debug, Error, PartialEq)]
pub enum InstanceError {
    #[error("instance of '{component}' has no property '{key}'")]
    UnknownProperty { component: String, key: String },

    #[error("property '{key}' expects a {expected} value")]
    TypeMismatch { key: String, expected: &'static str },
}

/// A value assigned to a component property on an instance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Text(String),
}

/// A live copy of a component template
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub main_component: NodeId,
    pub root: SceneNode,
    #[serde(skip)]
    definitions: PropertyDefinitions,
    pub property_values: IndexMap<String, PropertyValue>,
}

impl Instance {
    /// Copy a component subtree into a new instance.
    ///
    /// `definitions` is the schema the instance accepts; for a variant that is
    /// the schema of its component set. `seq` distinguishes the ids of
    /// multiple instances of the same component.
    pub fn from_component(component: &SceneNode, definitions: PropertyDefinitions, seq: u32) -> Self {
        let origin = component.absolute_bounding_box.map(|b| (b.x, b.y));
        let mut root = copy_subtree(component, seq, origin);
        root.node_type = NodeType::Instance;
        root.x = 0.0;
        root.y = 0.0;

        let property_values = definitions
            .iter()
            .filter_map(|(key, def)| {
                let value = match def {
                    PropertyDefinition::Boolean { default_value } => {
                        PropertyValue::Bool(*default_value)
                    }
                    PropertyDefinition::Text { default_value } => {
                        PropertyValue::Text(default_value.clone())
                    }
                    PropertyDefinition::InstanceSwap { .. } | PropertyDefinition::Variant { .. } => {
                        return None
                    }
                };
                Some((key.clone(), value))
            })
            .collect();

        Self {
            main_component: component.id.clone(),
            root,
            definitions,
            property_values,
        }
    }

    pub fn name(&self) -> &str {
        &self.root.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.root.name = name.into();
    }

    pub fn width(&self) -> f64 {
        self.root.width
    }

    pub fn height(&self) -> f64 {
        self.root.height
    }

    /// Absolute bounds of the instance root, if the template had geometry
    pub fn absolute_bounds(&self) -> Option<BoundingBox> {
        self.root.absolute_bounding_box
    }

    /// Current value of a property, by raw key
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.property_values.get(key)
    }

    /// Assign a property value and propagate it into the subtree
    pub fn set_property(&mut self, key: &str, value: PropertyValue) -> Result<(), InstanceError> {
        let def = self
            .definitions
            .get(key)
            .ok_or_else(|| InstanceError::UnknownProperty {
                component: self.root.name.clone(),
                key: key.to_string(),
            })?;

        let accepted = matches!(
            (def, &value),
            (PropertyDefinition::Boolean { .. }, PropertyValue::Bool(_))
                | (PropertyDefinition::Text { .. }, PropertyValue::Text(_))
        );
        if !accepted {
            let expected = match def {
                PropertyDefinition::Boolean { .. } => "boolean",
                PropertyDefinition::Text { .. } => "text",
                PropertyDefinition::InstanceSwap { .. } => "instance",
                PropertyDefinition::Variant { .. } => "variant",
            };
            return Err(InstanceError::TypeMismatch {
                key: key.to_string(),
                expected,
            });
        }

        apply_property(&mut self.root, key, &value);
        self.property_values.insert(key.to_string(), value);
        Ok(())
    }
}

fn copy_subtree(node: &SceneNode, seq: u32, origin: Option<(f64, f64)>) -> SceneNode {
    let mut copy = node.clone();
    copy.id = NodeId::new(format!("I{};{}", seq, node.id));
    copy.component_property_definitions = IndexMap::new();
    copy.absolute_bounding_box = match (node.absolute_bounding_box, origin) {
        (Some(b), Some((ox, oy))) => Some(BoundingBox::new(b.x - ox, b.y - oy, b.width, b.height)),
        _ => None,
    };
    copy.children = node
        .children
        .iter()
        .map(|c| copy_subtree(c, seq, origin))
        .collect();
    copy
}

fn apply_property(node: &mut SceneNode, key: &str, value: &PropertyValue) {
    let refs = &node.component_property_references;
    match value {
        PropertyValue::Bool(shown) if refs.visible.as_deref() == Some(key) => {
            node.visible = *shown;
        }
        PropertyValue::Text(text) if refs.characters.as_deref() == Some(key) => {
            node.characters = Some(text.clone());
        }
        _ => {}
    }
    for child in &mut node.children {
        apply_property(child, key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::types::PropertyReferences;

    fn button() -> (SceneNode, PropertyDefinitions) {
        let mut icon = SceneNode::new("1:3", "Icon", NodeType::Vector)
            .with_bounds(BoundingBox::new(110.0, 210.0, 16.0, 16.0));
        icon.visible = false;
        icon.component_property_references = PropertyReferences {
            visible: Some("Icon#1:0".to_string()),
            ..Default::default()
        };
        let mut label = SceneNode::new("1:4", "Label", NodeType::Text)
            .with_bounds(BoundingBox::new(130.0, 210.0, 40.0, 16.0));
        label.characters = Some("Button".to_string());
        label.component_property_references = PropertyReferences {
            characters: Some("Label#2:0".to_string()),
            ..Default::default()
        };
        let component = SceneNode::new("1:2", "State=Default", NodeType::Component)
            .with_bounds(BoundingBox::new(100.0, 200.0, 120.0, 40.0))
            .with_children(vec![icon, label]);

        let mut defs = PropertyDefinitions::new();
        defs.insert(
            "Icon#1:0".to_string(),
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
    fn test_instance_is_placed_at_origin() {
        let (component, defs) = button();
        let instance = Instance::from_component(&component, defs, 1);
        assert_eq!(
            instance.absolute_bounds(),
            Some(BoundingBox::new(0.0, 0.0, 120.0, 40.0))
        );
        assert_eq!(
            instance.root.children[0].absolute_bounding_box,
            Some(BoundingBox::new(10.0, 10.0, 16.0, 16.0))
        );
        assert_eq!(instance.root.id.as_str(), "I1;1:2");
        assert_eq!(instance.root.node_type, NodeType::Instance);
    }

    #[test]
    fn test_set_boolean_property_shows_node() {
        let (component, defs) = button();
        let mut instance = Instance::from_component(&component, defs, 1);
        assert!(!instance.root.children[0].visible);

        instance
            .set_property("Icon#1:0", PropertyValue::Bool(true))
            .unwrap();
        assert!(instance.root.children[0].visible);
        assert_eq!(
            instance.property("Icon#1:0"),
            Some(&PropertyValue::Bool(true))
        );
    }

    #[test]
    fn test_set_text_property() {
        let (component, defs) = button();
        let mut instance = Instance::from_component(&component, defs, 1);
        instance
            .set_property("Label#2:0", PropertyValue::Text("Save".to_string()))
            .unwrap();
        assert_eq!(instance.root.children[1].characters.as_deref(), Some("Save"));
    }

    #[test]
    fn test_unknown_property_fails() {
        let (component, defs) = button();
        let mut instance = Instance::from_component(&component, defs, 1);
        let err = instance
            .set_property("Icon", PropertyValue::Bool(true))
            .unwrap_err();
        assert!(matches!(err, InstanceError::UnknownProperty { .. }));
    }

    #[test]
    fn test_type_mismatch_fails() {
        let (component, defs) = button();
        let mut instance = Instance::from_component(&component, defs, 1);
        let err = instance
            .set_property("Label#2:0", PropertyValue::Bool(true))
            .unwrap_err();
        assert_eq!(
            err,
            InstanceError::TypeMismatch {
                key: "Label#2:0".to_string(),
                expected: "text"
            }
        );
    }
}
