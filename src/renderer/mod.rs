//! Renderers for a laid-out documentation tree
//!
//! SVG output draws frames, text, highlight rectangles and instance layers;
//! JSON output serializes the tree with its computed geometry.

pub mod config;
pub mod svg;

pub use config::{InstanceRendering, SvgConfig};
pub use svg::render_svg;

use crate::layout::DocumentNode;

/// Serialize a laid-out document as pretty-printed JSON
pub fn render_json(root: &DocumentNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(root)
}
