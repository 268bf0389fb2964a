//! Core types for the document tree and its geometry

use serde::{Deserialize, Serialize};

use crate::scene::{FontName, Instance};

/// A bounding box representing the spatial extent of an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// Direction of an auto-layout frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// How a node's size is determined along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    /// Shrink to content
    Hug,
    /// Stretch to the space the parent offers
    Fill,
    /// Exact size
    Fixed(f64),
}

impl std::fmt::Display for SizingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingMode::Hug => write!(f, "hug"),
            SizingMode::Fill => write!(f, "fill"),
            SizingMode::Fixed(size) => write!(f, "{}", size),
        }
    }
}

/// Sizing of an attached node on both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sizing {
    pub horizontal: SizingMode,
    pub vertical: SizingMode,
}

impl Sizing {
    pub fn along(&self, axis: Axis) -> SizingMode {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// Axes along which a child stretches when appended with [`DocumentNode::append_filling`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillAxes {
    Width,
    Height,
    Both,
}

/// Alignment of children along an axis of their frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Align {
    #[default]
    Min,
    Center,
}

/// Inner spacing of a frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Self::symmetric(value, value)
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Padding on both ends of an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom,
        }
    }

    /// Padding at the start of an axis
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }
}

/// An outline around a frame or rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub color: String,
    pub weight: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dash: Vec<f64>,
}

impl Stroke {
    pub fn solid(color: impl Into<String>, weight: f64) -> Self {
        Self {
            color: color.into(),
            weight,
            dash: vec![],
        }
    }

    pub fn dashed(color: impl Into<String>, weight: f64, dash: Vec<f64>) -> Self {
        Self {
            dash,
            ..Self::solid(color, weight)
        }
    }
}

/// Visual and layout attributes of a frame
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameProps {
    /// Auto-layout direction; `None` keeps children at their explicit positions
    pub layout: Option<Axis>,
    pub padding: Padding,
    pub spacing: f64,
    pub primary_align: Align,
    pub counter_align: Align,
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
    pub radius: f64,
}

impl FrameProps {
    pub fn column() -> Self {
        Self {
            layout: Some(Axis::Vertical),
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            layout: Some(Axis::Horizontal),
            ..Default::default()
        }
    }

    /// Frame without auto layout
    pub fn free() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(color.into());
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn centered(mut self) -> Self {
        self.primary_align = Align::Center;
        self.counter_align = Align::Center;
        self
    }

    pub fn with_counter_align(mut self, align: Align) -> Self {
        self.counter_align = align;
        self
    }
}

/// Leading characters of a text drawn in a different font style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emphasis {
    pub chars: usize,
    pub font: FontName,
}

/// Content and typography of a text leaf
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextProps {
    pub content: String,
    pub font: FontName,
    pub size: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

impl TextProps {
    pub fn new(content: impl Into<String>, font: FontName, size: f64, color: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font,
            size,
            color: color.into(),
            emphasis: None,
        }
    }

    /// Draw the first `chars` characters with `font`
    pub fn with_emphasis(mut self, chars: usize, font: FontName) -> Self {
        self.emphasis = Some(Emphasis { chars, font });
        self
    }
}

/// A plain rectangle, used for overlays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RectProps {
    pub fill: Option<String>,
    pub fill_opacity: f64,
    pub stroke: Option<Stroke>,
}

/// What a document node draws
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame(FrameProps),
    Text(TextProps),
    Rectangle(RectProps),
    Instance(Box<Instance>),
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Frame(_) => "Frame",
            NodeKind::Text(_) => "Text",
            NodeKind::Rectangle(_) => "Rectangle",
            NodeKind::Instance(_) => "Instance",
        }
    }
}

/// A node of the generated documentation tree.
///
/// Nodes are built detached and then appended to a parent. Hug and fixed
/// sizes can be set at any time, but fill sizing is only available through
/// the parent's [`append_filling`](Self::append_filling), and a node's sizing
/// is only observable once it is attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentNode {
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,
    /// Position relative to the parent and size, filled in by the geometry pass
    pub bounds: BoundingBox,
    #[serde(skip)]
    pub(in crate::layout) horizontal: SizingMode,
    #[serde(skip)]
    pub(in crate::layout) vertical: SizingMode,
    #[serde(skip)]
    attached: bool,
}

impl DocumentNode {
    fn new(name: impl Into<String>, kind: NodeKind, horizontal: SizingMode, vertical: SizingMode) -> Self {
        Self {
            name: name.into(),
            kind,
            children: vec![],
            bounds: BoundingBox::zero(),
            horizontal,
            vertical,
            attached: false,
        }
    }

    /// A frame that hugs its content on both axes
    pub fn frame(name: impl Into<String>, props: FrameProps) -> Self {
        Self::new(name, NodeKind::Frame(props), SizingMode::Hug, SizingMode::Hug)
    }

    pub fn text(name: impl Into<String>, props: TextProps) -> Self {
        Self::new(name, NodeKind::Text(props), SizingMode::Hug, SizingMode::Hug)
    }

    pub fn rectangle(name: impl Into<String>, width: f64, height: f64, props: RectProps) -> Self {
        Self::new(
            name,
            NodeKind::Rectangle(props),
            SizingMode::Fixed(width),
            SizingMode::Fixed(height),
        )
    }

    /// Embed an instance at its authored size
    pub fn instance(instance: Instance) -> Self {
        let (width, height) = (instance.width(), instance.height());
        let name = instance.name().to_string();
        Self::new(
            name,
            NodeKind::Instance(Box::new(instance)),
            SizingMode::Fixed(width),
            SizingMode::Fixed(height),
        )
    }

    pub fn with_fixed_size(mut self, width: f64, height: f64) -> Self {
        self.horizontal = SizingMode::Fixed(width);
        self.vertical = SizingMode::Fixed(height);
        self
    }

    pub fn with_fixed_width(mut self, width: f64) -> Self {
        self.horizontal = SizingMode::Fixed(width);
        self
    }

    /// Explicit position inside a parent without auto layout
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.bounds.x = x;
        self.bounds.y = y;
        self
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    /// Attach a child keeping its hug or fixed sizing
    pub fn append(&mut self, mut child: DocumentNode) {
        child.attached = true;
        self.children.push(child);
    }

    /// Attach a child and stretch it along `axes`
    pub fn append_filling(&mut self, mut child: DocumentNode, axes: FillAxes) {
        if matches!(axes, FillAxes::Width | FillAxes::Both) {
            child.horizontal = SizingMode::Fill;
        }
        if matches!(axes, FillAxes::Height | FillAxes::Both) {
            child.vertical = SizingMode::Fill;
        }
        self.append(child);
    }

    /// Mark a root as placed on the host canvas
    pub fn mark_attached(&mut self) {
        self.attached = true;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Sizing on both axes, or `None` while the node is detached
    pub fn sizing(&self) -> Option<Sizing> {
        self.attached.then_some(Sizing {
            horizontal: self.horizontal,
            vertical: self.vertical,
        })
    }

    pub fn frame_props(&self) -> Option<&FrameProps> {
        match &self.kind {
            NodeKind::Frame(props) => Some(props),
            _ => None,
        }
    }

    pub fn text_props(&self) -> Option<&TextProps> {
        match &self.kind {
            NodeKind::Text(props) => Some(props),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match &self.kind {
            NodeKind::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Direct child by name
    pub fn child(&self, name: &str) -> Option<&DocumentNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First descendant (self included, depth-first) with the given name
    pub fn find(&self, name: &str) -> Option<&DocumentNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// All descendants (self included) whose name starts with `prefix`
    pub fn find_all<'a>(&'a self, prefix: &str) -> Vec<&'a DocumentNode> {
        let mut found = vec![];
        self.collect_prefixed(prefix, &mut found);
        found
    }

    fn collect_prefixed<'a>(&'a self, prefix: &str, found: &mut Vec<&'a DocumentNode>) {
        if self.name.starts_with(prefix) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_prefixed(prefix, found);
        }
    }

    /// Indented structural outline: one line per node with its kind and sizing
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(0, &mut out);
        out
    }

    fn write_outline(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        out.push_str(&format!(
            "{}{} \"{}\" [{} x {}]",
            indent,
            self.kind.label(),
            self.name,
            self.horizontal,
            self.vertical
        ));
        if let NodeKind::Text(text) = &self.kind {
            out.push_str(&format!(": {}", text.content));
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(depth + 1, out);
        }
    }
}
