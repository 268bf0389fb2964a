//! Configuration for document layout

/// Spacing, sizes and text metrics used when building and measuring the document
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Padding of the documentation frame and the component container
    pub frame_padding: f64,

    /// Padding inside each section
    pub section_padding: f64,

    /// Spacing between sections, and between the children of a section
    pub section_spacing: f64,

    /// Spacing inside galleries and lists
    pub item_spacing: f64,

    /// Padding inside property table cells
    pub table_cell_padding: f64,

    /// Horizontal gap between the selected component and its documentation
    pub placement_gap: f64,

    /// Average glyph advance as a fraction of the font size
    pub char_width_ratio: f64,

    /// Line height as a multiple of the font size
    pub line_height_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            frame_padding: 64.0,
            section_padding: 32.0,
            section_spacing: 32.0,
            item_spacing: 16.0,
            table_cell_padding: 12.0,
            placement_gap: 100.0,
            char_width_ratio: 0.55,
            line_height_ratio: 1.4,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_padding(mut self, padding: f64) -> Self {
        self.frame_padding = padding;
        self
    }

    pub fn with_section_padding(mut self, padding: f64) -> Self {
        self.section_padding = padding;
        self
    }

    pub fn with_section_spacing(mut self, spacing: f64) -> Self {
        self.section_spacing = spacing;
        self
    }

    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    pub fn with_placement_gap(mut self, gap: f64) -> Self {
        self.placement_gap = gap;
        self
    }

    /// Set the text metrics used to estimate text extents
    pub fn with_text_metrics(mut self, char_width_ratio: f64, line_height_ratio: f64) -> Self {
        self.char_width_ratio = char_width_ratio;
        self.line_height_ratio = line_height_ratio;
        self
    }

    /// Estimated width of a single line of text
    pub fn text_width(&self, line: &str, size: f64) -> f64 {
        line.chars().count() as f64 * size * self.char_width_ratio
    }

    pub fn line_height(&self, size: f64) -> f64 {
        size * self.line_height_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.frame_padding, 64.0);
        assert_eq!(config.section_padding, 32.0);
        assert_eq!(config.section_spacing, 32.0);
        assert_eq!(config.item_spacing, 16.0);
        assert_eq!(config.table_cell_padding, 12.0);
        assert_eq!(config.placement_gap, 100.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_frame_padding(40.0)
            .with_placement_gap(50.0)
            .with_text_metrics(0.5, 1.5);

        assert_eq!(config.frame_padding, 40.0);
        assert_eq!(config.placement_gap, 50.0);
        assert_eq!(config.text_width("abcd", 10.0), 20.0);
        assert_eq!(config.line_height(10.0), 15.0);
    }
}
