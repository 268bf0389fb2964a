//! Component Doc - documentation scaffolds for design-system components
//!
//! This library inspects a component or component set in a host scene graph
//! and builds a documentation frame next to it: a description section, a
//! variant gallery with extracted visual properties, a property table with
//! highlighted previews, and Do/Don't exemplars.
//!
//! # Example
//!
//! ```rust
//! use component_doc::render;
//!
//! let svg = render(r#"{
//!     "nodes": [{"id": "1:1", "name": "Chip", "type": "COMPONENT", "width": 80, "height": 24}],
//!     "selection": ["1:1"]
//! }"#).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Chip - Documentation"));
//! ```

pub mod document;
pub mod error;
pub mod inspect;
pub mod layout;
pub mod renderer;
pub mod run;
pub mod scene;
pub mod stylesheet;
pub mod tracing_config;

pub use error::DocError;
pub use inspect::MatchStrategy;
pub use layout::{DocumentNode, LayoutConfig};
pub use renderer::{render_json, render_svg, InstanceRendering, SvgConfig};
pub use run::{run, Documented, Run, RunState};
pub use scene::{Host, HostError, MemoryHost, SceneError};

use futures::executor::block_on;
use thiserror::Error;
use tracing::debug;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur in the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The scene snapshot could not be loaded
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// The documentation run aborted
    #[error("{}", .0.notice_message())]
    Document(#[from] DocError),

    /// The laid-out document could not be serialized
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output produced by [`render_with_config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

/// Configuration for a documentation run and its rendering
#[derive(Debug, Clone)]
pub struct DocConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for colors and font families
    pub stylesheet: Stylesheet,
    /// Number of Do/Don't rows in the last section
    pub do_dont_rows: usize,
    /// How property highlights find their layer inside a preview instance
    pub match_strategy: MatchStrategy,
    /// Widths of the property table columns
    pub table_columns: [f64; 5],
    /// Output format of [`render_with_config`]
    pub output: OutputFormat,
    /// Debug mode: print the laid-out tree and outline frames
    pub debug: bool,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
            do_dont_rows: 1,
            match_strategy: MatchStrategy::default(),
            table_columns: [180.0, 140.0, 260.0, 140.0, 300.0],
            output: OutputFormat::default(),
            debug: false,
        }
    }
}

impl DocConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for colors and fonts
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn with_do_dont_rows(mut self, rows: usize) -> Self {
        self.do_dont_rows = rows;
        self
    }

    pub fn with_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    pub fn with_table_columns(mut self, widths: [f64; 5]) -> Self {
        self.table_columns = widths;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Run documentation generation on `host` to completion
pub fn document<H: Host>(host: &mut H, config: &DocConfig) -> Run {
    block_on(run(host, config))
}

/// Document the selected component of a JSON scene snapshot and render it to SVG
pub fn render(scene: &str) -> Result<String, RenderError> {
    render_with_config(scene, &DocConfig::default())
}

/// Document the selected component of a JSON scene snapshot with custom configuration
///
/// # Example
///
/// ```rust
/// use component_doc::{render_with_config, DocConfig, OutputFormat};
///
/// let config = DocConfig::new()
///     .with_do_dont_rows(2)
///     .with_output(OutputFormat::Json);
///
/// let json = render_with_config(r#"{
///     "nodes": [{"id": "1:1", "name": "Chip", "type": "COMPONENT"}],
///     "selection": ["1:1"]
/// }"#, &config).unwrap();
/// assert!(json.contains("Do/Don't Row 2"));
/// ```
pub fn render_with_config(scene: &str, config: &DocConfig) -> Result<String, RenderError> {
    let mut host = MemoryHost::from_json(scene)?;
    render_host(&mut host, config)
}

/// Document the current selection of `host` and render the attached document
pub fn render_host(host: &mut MemoryHost, config: &DocConfig) -> Result<String, RenderError> {
    let documented = document(host, config).into_outcome()?;

    let root = host
        .canvas()
        .iter()
        .find(|(id, _)| *id == documented.id)
        .map(|(_, root)| root)
        .ok_or_else(|| DocError::Host(HostError::NodeNotFound(documented.id.clone())))?;

    if config.debug {
        eprintln!("=== Layout Debug ===");
        eprint!("{}", layout::debug_tree(root));
        eprintln!("====================");
    }
    debug!(component = documented.component.as_str(), format = ?config.output, "rendering");

    match config.output {
        OutputFormat::Svg => {
            let svg = config.svg.clone().with_debug(config.debug || config.svg.debug);
            Ok(render_svg(root, &svg, &config.stylesheet))
        }
        OutputFormat::Json => Ok(render_json(root)?),
    }
}
