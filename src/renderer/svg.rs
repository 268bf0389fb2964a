//! SVG generation from a laid-out document tree

use crate::inspect::rgb_to_hex;
use crate::layout::{BoundingBox, DocumentNode, FrameProps, NodeKind, RectProps, Stroke, TextProps};
use crate::scene::{FontName, NodeType, Paint, SceneNode};
use crate::stylesheet::{ColorToken, Stylesheet};

use super::{InstanceRendering, SvgConfig};

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
    outline_color: String,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
            outline_color: ColorToken::Border.default_hex().to_string(),
        }
    }

    /// Add the stylesheet palette as CSS custom properties
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        self.outline_color = stylesheet.color(ColorToken::Border).to_string();
        if !self.config.palette_variables {
            return;
        }
        let mut css = String::from(":root {\n");
        for token in ColorToken::ALL {
            css.push_str(&format!("      --{}: {};\n", token.key(), stylesheet.color(token)));
        }
        css.push_str("    }");
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.indent {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.indent {
            "\n"
        } else {
            ""
        }
    }

    fn name_attr(&self, name: &str) -> String {
        if self.config.debug {
            format!(r#" data-name="{}""#, escape_xml(name))
        } else {
            String::new()
        }
    }

    /// Open a group translated to `(x, y)` in its parent's coordinates
    pub fn start_group(&mut self, name: &str, class: &str, x: f64, y: f64) {
        let prefix = self.prefix();
        let transform = if x == 0.0 && y == 0.0 {
            String::new()
        } else {
            format!(r#" transform="translate({} {})""#, x, y)
        };
        self.elements.push(format!(
            r#"{}<g class="{}{}"{}{}>"#,
            self.indent_str(),
            prefix,
            class,
            self.name_attr(name),
            transform
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Add a rectangle at the origin of the current group
    pub fn add_rect(&mut self, name: &str, class: &str, width: f64, height: f64, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}{}"{} x="0" y="0" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            prefix,
            class,
            self.name_attr(name),
            width,
            height,
            styles
        ));
    }

    /// Add a text block whose top-left corner is at `(x, y)`
    pub fn add_text(&mut self, name: &str, text: &TextProps, bounds: &BoundingBox) {
        let prefix = self.prefix();
        let lines: Vec<&str> = text.content.split('\n').collect();
        let advance = bounds.height / lines.len().max(1) as f64;

        let mut body = String::new();
        let mut remaining_emphasis = text.emphasis.as_ref().map(|e| e.chars).unwrap_or(0);
        for (i, line) in lines.iter().enumerate() {
            let baseline = bounds.y + text.size + advance * i as f64;
            body.push_str(&format!(r#"<tspan x="{}" y="{}">"#, bounds.x, baseline));

            let split = line
                .char_indices()
                .nth(remaining_emphasis)
                .map(|(at, _)| at)
                .unwrap_or(line.len());
            let (strong, rest) = line.split_at(split);
            remaining_emphasis = remaining_emphasis.saturating_sub(line.chars().count() + 1);

            if let (false, Some(emphasis)) = (strong.is_empty(), &text.emphasis) {
                body.push_str(&format!(
                    "<tspan{}>{}</tspan>",
                    font_attrs(&emphasis.font),
                    escape_xml(strong)
                ));
                body.push_str(&escape_xml(rest));
            } else {
                body.push_str(&escape_xml(line));
            }
            body.push_str("</tspan>");
        }

        self.elements.push(format!(
            r#"{}<text class="{}text"{}{} font-size="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            self.name_attr(name),
            font_attrs(&text.font),
            text.size,
            text.color,
            body
        ));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.margin;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.xml_declaration {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a laid-out document to an SVG string
pub fn render_svg(root: &DocumentNode, config: &SvgConfig, stylesheet: &Stylesheet) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);
    render_node(root, &mut builder);
    builder.build(root.bounds)
}

fn render_node(node: &DocumentNode, builder: &mut SvgBuilder) {
    let b = node.bounds;
    match &node.kind {
        NodeKind::Frame(frame) => {
            builder.start_group(&node.name, "frame", b.x, b.y);
            let styles = frame_styles(frame, &builder.config);
            if !styles.is_empty() {
                builder.add_rect(&node.name, "background", b.width, b.height, &styles);
            } else if builder.config.debug {
                builder.add_rect(
                    &node.name,
                    "debug-bounds",
                    b.width,
                    b.height,
                    r##" fill="none" stroke="#FF00FF" stroke-width="0.5" stroke-dasharray="2 2""##,
                );
            }
            for child in &node.children {
                render_node(child, builder);
            }
            builder.end_group();
        }
        NodeKind::Text(text) => builder.add_text(&node.name, text, &b),
        NodeKind::Rectangle(rect) => {
            builder.start_group(&node.name, "shape", b.x, b.y);
            let styles = rect_styles(rect, &builder.config);
            builder.add_rect(&node.name, "rect", b.width, b.height, &styles);
            builder.end_group();
        }
        NodeKind::Instance(instance) => {
            builder.start_group(&node.name, "instance", b.x, b.y);
            match builder.config.instances {
                InstanceRendering::Layers => render_scene_node(&instance.root, builder, true),
                InstanceRendering::Outline => {
                    let styles = format!(
                        r#" fill="none" stroke="{}" stroke-width="1""#,
                        builder.outline_color
                    );
                    builder.add_rect(&node.name, "instance-outline", b.width, b.height, &styles);
                }
            }
            builder.end_group();
        }
    }
}

/// Draw an instance subtree with its own geometry; hidden layers are skipped
fn render_scene_node(node: &SceneNode, builder: &mut SvgBuilder, is_root: bool) {
    if !node.visible {
        return;
    }
    let (x, y) = if is_root { (0.0, 0.0) } else { (node.x, node.y) };

    if let (NodeType::Text, Some(characters)) = (node.node_type, &node.characters) {
        let size = (node.height * 0.75).max(1.0);
        let text = TextProps::new(
            characters.as_str(),
            FontName::new(builder.config.instance_text_family.as_str(), "Regular"),
            size,
            solid_fill(node).unwrap_or_else(|| "#000000".to_string()),
        );
        builder.add_text(
            &node.name,
            &text,
            &BoundingBox::new(x, y, node.width, node.height),
        );
        return;
    }

    builder.start_group(&node.name, "layer", x, y);
    let styles = layer_styles(node);
    if !styles.is_empty() {
        builder.add_rect(&node.name, "layer-shape", node.width, node.height, &styles);
    }
    for child in &node.children {
        render_scene_node(child, builder, false);
    }
    builder.end_group();
}

fn solid_fill(node: &SceneNode) -> Option<String> {
    node.style.as_ref()?.fills.iter().find_map(|paint| match paint {
        Paint::Solid(solid) if solid.visible => Some(rgb_to_hex(solid.color)),
        _ => None,
    })
}

fn layer_styles(node: &SceneNode) -> String {
    let Some(style) = &node.style else {
        return String::new();
    };
    let mut parts = vec![];
    if let Some(fill) = solid_fill(node) {
        parts.push(format!(r#" fill="{}""#, fill));
    } else {
        parts.push(r#" fill="none""#.to_string());
    }
    let stroke = style.strokes.iter().find_map(|paint| match paint {
        Paint::Solid(solid) if solid.visible => Some(rgb_to_hex(solid.color)),
        _ => None,
    });
    if let Some(stroke) = stroke {
        parts.push(format!(r#" stroke="{}""#, stroke));
        parts.push(format!(
            r#" stroke-width="{}""#,
            style.stroke_weight.unwrap_or(1.0)
        ));
    }
    if let Some(radius) = style.corner_radius.filter(|r| *r > 0.0) {
        parts.push(format!(r#" rx="{}""#, radius));
    }
    if let Some(opacity) = style.opacity.filter(|o| *o < 1.0) {
        parts.push(format!(r#" opacity="{}""#, opacity));
    }
    // A style block with nothing drawable renders no shape
    if parts.len() == 1 && parts[0] == r#" fill="none""# {
        return String::new();
    }
    parts.join("")
}

fn frame_styles(frame: &FrameProps, config: &SvgConfig) -> String {
    if frame.fill.is_none() && frame.stroke.is_none() {
        return String::new();
    }
    let mut parts = vec![format!(
        r#" fill="{}""#,
        frame.fill.as_deref().unwrap_or("none")
    )];
    if let Some(stroke) = &frame.stroke {
        parts.push(stroke_styles(stroke, config));
    }
    if frame.radius > 0.0 {
        parts.push(format!(r#" rx="{}""#, frame.radius));
    }
    parts.join("")
}

fn rect_styles(rect: &RectProps, config: &SvgConfig) -> String {
    let mut parts = vec![format!(
        r#" fill="{}""#,
        rect.fill.as_deref().unwrap_or("none")
    )];
    if rect.fill.is_some() && rect.fill_opacity < 1.0 {
        parts.push(format!(r#" fill-opacity="{}""#, rect.fill_opacity));
    }
    if let Some(stroke) = &rect.stroke {
        parts.push(stroke_styles(stroke, config));
    }
    parts.join("")
}

fn stroke_styles(stroke: &Stroke, config: &SvgConfig) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color, stroke.weight
    );
    if config.dashed_strokes && !stroke.dash.is_empty() {
        let dash: Vec<String> = stroke.dash.iter().map(|d| d.to_string()).collect();
        attrs.push_str(&format!(r#" stroke-dasharray="{}""#, dash.join(" ")));
    }
    attrs
}

fn font_attrs(font: &FontName) -> String {
    format!(
        r#" font-family="{}" font-weight="{}""#,
        escape_xml(&font.family),
        font_weight(&font.style)
    )
}

/// CSS weight for a font style name such as "Semi Bold" or "Medium"
fn font_weight(style: &str) -> u16 {
    let style = style.to_ascii_lowercase().replace(' ', "");
    if style.contains("extrabold") || style.contains("black") {
        800
    } else if style.contains("semibold") {
        600
    } else if style.contains("bold") {
        700
    } else if style.contains("medium") {
        500
    } else if style.contains("light") {
        300
    } else {
        400
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
