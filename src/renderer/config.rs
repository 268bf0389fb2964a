//! Options for drawing a documentation frame as SVG

/// How embedded component instances are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceRendering {
    /// Draw the instance's visible layers with their own fills and strokes
    #[default]
    Layers,
    /// Draw only the instance bounds as a thin border-colored outline
    Outline,
}

/// SVG output options for a rendered documentation frame
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Space kept around the documentation frame inside the viewBox
    pub margin: f64,

    /// Emit the `<?xml ...?>` declaration
    pub xml_declaration: bool,

    /// Put one element per line, indented by nesting depth
    pub indent: bool,

    /// Prefix for element classes ("cd-" gives "cd-frame", "cd-instance")
    pub class_prefix: Option<String>,

    pub instances: InstanceRendering,

    /// Keep dash patterns on strokes such as the "Drop component here" placeholders.
    /// When off, dashed borders are drawn solid.
    pub dashed_strokes: bool,

    /// Emit the stylesheet palette as `:root` custom properties
    pub palette_variables: bool,

    /// Font family for text layers inside instances, which carry no font of their own
    pub instance_text_family: String,

    /// Outline unfilled frames and tag elements with `data-name`
    pub debug: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            margin: 40.0,
            xml_declaration: true,
            indent: true,
            class_prefix: Some("cd-".to_string()),
            instances: InstanceRendering::default(),
            dashed_strokes: true,
            palette_variables: true,
            instance_text_family: "sans-serif".to_string(),
            debug: false,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Choose how preview and gallery instances are drawn
    pub fn with_instances(mut self, instances: InstanceRendering) -> Self {
        self.instances = instances;
        self
    }

    pub fn with_dashed_strokes(mut self, dashed: bool) -> Self {
        self.dashed_strokes = dashed;
        self
    }

    pub fn with_palette_variables(mut self, emit: bool) -> Self {
        self.palette_variables = emit;
        self
    }

    pub fn with_instance_text_family(mut self, family: impl Into<String>) -> Self {
        self.instance_text_family = family.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_draw_full_document() {
        let config = SvgConfig::default();
        assert_eq!(config.instances, InstanceRendering::Layers);
        assert!(config.dashed_strokes);
        assert!(config.palette_variables);
        assert_eq!(config.instance_text_family, "sans-serif");
        assert_eq!(config.class_prefix.as_deref(), Some("cd-"));
    }

    #[test]
    fn test_outline_preview_config() {
        let config = SvgConfig::new()
            .with_instances(InstanceRendering::Outline)
            .with_dashed_strokes(false)
            .with_palette_variables(false)
            .without_class_prefix();

        assert_eq!(config.instances, InstanceRendering::Outline);
        assert!(!config.dashed_strokes);
        assert!(!config.palette_variables);
        assert_eq!(config.class_prefix, None);
    }
}
