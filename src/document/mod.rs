//! Documentation tree builders
//!
//! [`DocBuilder`] turns a component template into a detached
//! [`DocumentNode`] tree. Rows are in [`rows`], the document frame and its
//! sections in [`sections`]. Every node is appended to its parent before any
//! fill sizing is applied, and nothing reaches the host until the tree is
//! complete.

pub mod fonts;
pub mod rows;
pub mod sections;

pub use fonts::{load_font_set, FontSet};

use crate::layout::{Align, DocumentNode, FrameProps, Padding, Stroke, TextProps};
use crate::scene::{FontName, Host};
use crate::stylesheet::ColorToken;
use crate::DocConfig;

/// Builds documentation nodes with one font set and configuration
pub struct DocBuilder<'a, H: Host> {
    host: &'a H,
    fonts: &'a FontSet,
    config: &'a DocConfig,
}

impl<'a, H: Host> DocBuilder<'a, H> {
    pub fn new(host: &'a H, fonts: &'a FontSet, config: &'a DocConfig) -> Self {
        Self {
            host,
            fonts,
            config,
        }
    }

    fn color(&self, token: ColorToken) -> String {
        self.config.stylesheet.color(token).to_string()
    }

    fn text(&self, content: &str, font: &FontName, size: f64, color: ColorToken) -> DocumentNode {
        DocumentNode::text(
            content,
            TextProps::new(content, font.clone(), size, self.color(color)),
        )
    }

    /// 40px document title
    fn title(&self, content: &str) -> DocumentNode {
        self.text(content, &self.fonts.title, 40.0, ColorToken::Text)
    }

    /// 32px section heading
    fn heading(&self, content: &str) -> DocumentNode {
        self.text(content, &self.fonts.heading, 32.0, ColorToken::Text)
    }

    /// 24px subsection heading
    fn subheading(&self, content: &str) -> DocumentNode {
        self.text(content, &self.fonts.subheading, 24.0, ColorToken::Text)
    }

    /// 20px variant or property title
    fn item_title(&self, content: &str) -> DocumentNode {
        self.text(content, &self.fonts.subheading, 20.0, ColorToken::Text)
    }

    fn body(&self, content: &str, placeholder: bool) -> DocumentNode {
        let color = if placeholder {
            ColorToken::Placeholder
        } else {
            ColorToken::SubtleText
        };
        self.text(content, &self.fonts.body, 20.0, color)
    }

    fn label(&self, content: &str) -> DocumentNode {
        self.text(content, &self.fonts.bold, 16.0, ColorToken::Text)
    }

    fn value(&self, content: &str) -> DocumentNode {
        self.text(content, &self.fonts.body, 16.0, ColorToken::Text)
    }

    /// 14px hint inside placeholders
    fn hint(&self, content: &str) -> DocumentNode {
        self.text(content, &self.fonts.medium, 14.0, ColorToken::Placeholder)
    }

    /// "`lead` `rest`" with the lead in bold
    fn prompt(&self, lead: &str, rest: &str) -> DocumentNode {
        let content = format!("{} {}", lead, rest);
        DocumentNode::text(
            content.as_str(),
            TextProps::new(
                content.as_str(),
                self.fonts.body.clone(),
                14.0,
                self.color(ColorToken::Text),
            )
            .with_emphasis(lead.chars().count(), self.fonts.bold.clone()),
        )
    }

    fn column(&self, name: &str, spacing: f64) -> DocumentNode {
        DocumentNode::frame(name, FrameProps::column().with_spacing(spacing))
    }

    fn row(&self, name: &str, spacing: f64) -> DocumentNode {
        DocumentNode::frame(name, FrameProps::row().with_spacing(spacing))
    }

    /// Cream section panel
    fn section(&self, name: &str) -> DocumentNode {
        let layout = &self.config.layout;
        DocumentNode::frame(
            name,
            FrameProps::column()
                .with_padding(Padding::uniform(layout.section_padding))
                .with_spacing(layout.section_spacing)
                .with_fill(self.color(ColorToken::Section))
                .with_radius(12.0),
        )
    }

    /// White bordered row card used for variants and properties
    fn card(&self, name: &str) -> DocumentNode {
        DocumentNode::frame(
            name,
            FrameProps::row()
                .with_padding(Padding::uniform(24.0))
                .with_spacing(24.0)
                .with_fill(self.color(ColorToken::Background))
                .with_stroke(Stroke::solid(self.color(ColorToken::Border), 1.0))
                .with_radius(12.0)
                .with_counter_align(Align::Min),
        )
    }
}
