//! Scene graph types mirrored from the design host
//!
//! Everything here deserializes from the host's JSON snapshot format
//! (camelCase keys, SCREAMING_SNAKE_CASE type tags).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::layout::BoundingBox;

/// Host-assigned node identifier (e.g. `"12:34"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-assigned design token (variable) identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableId(pub String);

impl VariableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reference from a style value to a design token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    pub id: VariableId,
}

impl VariableAlias {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: VariableId::new(id),
        }
    }
}

/// A design token known to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub id: VariableId,
    pub name: String,
}

/// RGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// RGBA color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "one")]
    pub a: f64,
}

impl Rgba {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

fn one() -> f64 {
    1.0
}

fn shown() -> bool {
    true
}

/// Token bindings carried by a single paint or effect
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintBindings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<VariableAlias>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<VariableAlias>,
}

/// A solid color paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidPaint {
    pub color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default = "shown")]
    pub visible: bool,
    #[serde(default)]
    pub bound_variables: PaintBindings,
}

impl SolidPaint {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            opacity: None,
            visible: true,
            bound_variables: PaintBindings::default(),
        }
    }
}

/// Fill or stroke paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid(SolidPaint),
    /// Gradients, images and video paints carry nothing we describe
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Drop or inner shadow parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Rgba,
    #[serde(default)]
    pub offset: Offset,
    #[serde(default)]
    pub radius: f64,
    #[serde(default = "shown")]
    pub visible: bool,
    #[serde(default)]
    pub bound_variables: PaintBindings,
}

/// Layer or background blur parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blur {
    pub radius: f64,
    #[serde(default = "shown")]
    pub visible: bool,
    #[serde(default)]
    pub bound_variables: PaintBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    LayerBlur(Blur),
    BackgroundBlur(Blur),
    /// Effect kinds with no attribute row, such as noise or texture
    #[serde(other)]
    Other,
}

/// Token bindings on node-level numeric style fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBindings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<VariableAlias>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left_radius: Option<VariableAlias>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<VariableAlias>,
}

/// Style block of a style-bearing node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    /// `None` when corners are mixed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub bound_variables: NodeBindings,
}

/// Which property drives a node's visibility, text, or swapped component
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyReferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component: Option<String>,
}

impl PropertyReferences {
    /// Check whether any reference kind names the given raw property key
    pub fn references(&self, key: &str) -> bool {
        [&self.visible, &self.characters, &self.main_component]
            .into_iter()
            .any(|r| r.as_deref() == Some(key))
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.characters.is_none() && self.main_component.is_none()
    }
}

/// Kind of a preferred instance-swap target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferredKind {
    Component,
    ComponentSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredValue {
    #[serde(rename = "type")]
    pub kind: PreferredKind,
    pub key: String,
}

/// A declared component property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum PropertyDefinition {
    Boolean {
        default_value: bool,
    },
    Text {
        #[serde(default)]
        default_value: String,
    },
    InstanceSwap {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
        #[serde(default)]
        preferred_values: Vec<PreferredValue>,
    },
    Variant {
        default_value: String,
        #[serde(default)]
        variant_options: Vec<String>,
    },
}

impl PropertyDefinition {
    pub fn is_variant(&self) -> bool {
        matches!(self, PropertyDefinition::Variant { .. })
    }
}

/// Property schema of a component, in declaration order
pub type PropertyDefinitions = IndexMap<String, PropertyDefinition>;

/// Node type as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Component,
    ComponentSet,
    Instance,
    #[default]
    Frame,
    Group,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    #[serde(other)]
    Other,
}

impl NodeType {
    pub fn is_component_like(&self) -> bool {
        matches!(self, NodeType::Component | NodeType::ComponentSet)
    }

    /// Upper-case host name, used in user-facing messages
    pub fn host_name(&self) -> &'static str {
        match self {
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Instance => "INSTANCE",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Text => "TEXT",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::Vector => "VECTOR",
            NodeType::Other => "OTHER",
        }
    }
}

/// A node of the host scene graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default = "shown")]
    pub visible: bool,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<BoundingBox>,
    /// `None` for nodes that cannot carry fills, strokes or effects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,
    #[serde(default, skip_serializing_if = "PropertyReferences::is_empty")]
    pub component_property_references: PropertyReferences,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub component_property_definitions: PropertyDefinitions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create a bare frame node; mostly useful in tests
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.into(),
            node_type,
            description: String::new(),
            visible: true,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            absolute_bounding_box: None,
            style: None,
            component_property_references: PropertyReferences::default(),
            component_property_definitions: IndexMap::new(),
            characters: None,
            children: vec![],
        }
    }

    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
        self.absolute_bounding_box = Some(bounds);
        self
    }

    /// Variants of a component set, in declaration order
    pub fn variants(&self) -> impl Iterator<Item = &SceneNode> {
        self.children
            .iter()
            .filter(|c| c.node_type == NodeType::Component)
    }

    /// Depth-first pre-order walk starting at this node
    pub fn walk(&self) -> Vec<&SceneNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }

    /// Relative geometry, used when no absolute bounds are known
    pub fn relative_bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

/// A font family + style pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}
