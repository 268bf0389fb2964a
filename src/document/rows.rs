//! Row cards: variant showcase, property preview, Do/Don't pair, property table

use crate::error::DocError;
use crate::inspect::{
    cross_reference, describe, extract_visual_properties, format_variant_heading, PropertyKey,
};
use crate::layout::{Align, DocumentNode, FillAxes, FrameProps, Padding, RectProps, Stroke};
use crate::scene::{Host, PropertyDefinition, PropertyDefinitions, SceneNode};
use crate::stylesheet::ColorToken;

use super::DocBuilder;

/// Columns of the property table
pub const TABLE_HEADERS: [&str; 5] = ["Property", "Type", "Allowed values", "Default", "Description"];

const TABLE_DESCRIPTION_PLACEHOLDER: &str = "Explain what this property changes...";

/// Which half of a Do/Don't pair a cell is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Do,
    Dont,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Do => "DO",
            Verdict::Dont => "DON'T",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Verdict::Do => "Do: Short title",
            Verdict::Dont => "Don't: Short title",
        }
    }

    fn colors(self) -> (ColorToken, ColorToken) {
        match self {
            Verdict::Do => (ColorToken::DoBackground, ColorToken::DoText),
            Verdict::Dont => (ColorToken::DontBackground, ColorToken::DontText),
        }
    }
}

impl<H: Host> DocBuilder<'_, H> {
    /// An instance of the variant next to its resolved visual properties
    pub fn variant_row(&self, variant: &SceneNode) -> Result<DocumentNode, DocError> {
        let mut row = self.card(&format!("Variant: {}", variant.name));

        let mut display = DocumentNode::frame(
            "Variant Display",
            FrameProps::column()
                .with_spacing(12.0)
                .with_counter_align(Align::Center),
        );
        let mut instance = self.host.create_instance(variant)?;
        instance.set_name(format!("{} Preview", variant.name));
        display.append(DocumentNode::instance(instance));
        row.append(display);

        let mut list = self.column("Properties List", 8.0);
        list.append(self.item_title(&format_variant_heading(&variant.name)));

        let visuals = extract_visual_properties(variant, self.host);
        if visuals.is_empty() {
            list.append(self.body("No visual properties defined", true));
        }
        for visual in visuals {
            let mut line = self.row("Property Row", 8.0);
            line.append(self.label(&format!("{}:", visual.label)));
            line.append(self.value(&visual.value));
            list.append(line);
        }
        row.append(list);

        Ok(row)
    }

    /// An instance of `template` with the element `key` controls revealed and
    /// outlined, next to the property's metadata
    pub fn property_row(
        &self,
        key: &PropertyKey,
        def: &PropertyDefinition,
        template: &SceneNode,
    ) -> Result<DocumentNode, DocError> {
        let mut row = self.card(&format!("Property: {}", key.raw()));

        let mut instance = self.host.create_instance(template)?;
        instance.set_name(format!("{} Preview", key.raw()));
        let highlight = cross_reference(
            template,
            &mut instance,
            key,
            def,
            self.config.match_strategy,
        );

        let mut container = DocumentNode::frame("Visual Container", FrameProps::free())
            .with_fixed_size(instance.width(), instance.height());
        container.append(DocumentNode::instance(instance));
        if let Some(bounds) = highlight {
            let highlight_color = self.color(ColorToken::Highlight);
            let overlay = DocumentNode::rectangle(
                "Property Highlight",
                bounds.width,
                bounds.height,
                RectProps {
                    fill: Some(highlight_color.clone()),
                    fill_opacity: 0.1,
                    stroke: Some(Stroke::solid(highlight_color, 1.0)),
                },
            )
            .with_position(bounds.x, bounds.y);
            container.append(overlay);
        }

        let mut visual = self.column("Property Visual", 8.0);
        visual.append(container);
        row.append(visual);

        let info = describe(def, self.host);
        let mut details = self.column("Details", 8.0);
        details.append(self.detail_row("Type Row", "Type:", info.type_label));
        details.append(self.detail_row("Allowed Row", "Allowed values:", &info.allowed_values));
        details.append(self.detail_row("Default Row", "Default:", &info.default_value));

        let mut description = self.column("Description Row", 4.0);
        description.append(self.label("Description:"));
        description.append(self.body("Describe what this property controls...", true));
        details.append(description);

        let mut side = self.column("Property Info", 12.0);
        side.append(self.item_title(&key.display()));
        side.append(details);
        row.append(side);

        Ok(row)
    }

    fn detail_row(&self, name: &str, label: &str, value: &str) -> DocumentNode {
        let mut row = self.row(name, 8.0);
        row.append(self.label(label));
        row.append(self.value(value));
        row
    }

    /// Numbered pair of Do and Don't cells; `index` counts from zero
    pub fn do_dont_row(&self, index: usize) -> DocumentNode {
        let mut row = self.row(&format!("Do/Don't Row {}", index + 1), 16.0);
        row.append_filling(self.do_dont_cell(Verdict::Do), FillAxes::Width);
        row.append_filling(self.do_dont_cell(Verdict::Dont), FillAxes::Width);
        row
    }

    fn do_dont_cell(&self, verdict: Verdict) -> DocumentNode {
        let (background, accent) = verdict.colors();
        let mut cell = DocumentNode::frame(
            format!("{} Cell", verdict.label()),
            FrameProps::column()
                .with_padding(Padding::uniform(24.0))
                .with_spacing(12.0)
                .with_fill(self.color(background))
                .with_radius(12.0),
        );

        cell.append(self.text(verdict.label(), &self.fonts.heading, 20.0, accent));
        cell.append_filling(
            self.text(verdict.title(), &self.fonts.heading, 16.0, ColorToken::Text),
            FillAxes::Width,
        );
        cell.append_filling(
            self.body("Describe why this is a good/bad practice...", true),
            FillAxes::Width,
        );
        cell.append_filling(self.screenshot_placeholder(), FillAxes::Width);
        cell
    }

    fn screenshot_placeholder(&self) -> DocumentNode {
        let mut frame = DocumentNode::frame(
            "Screenshot Placeholder",
            FrameProps::column()
                .with_padding(Padding::uniform(16.0))
                .with_spacing(8.0)
                .with_fill(self.color(ColorToken::Background))
                .with_radius(4.0)
                .centered(),
        )
        .with_fixed_size(300.0, 150.0);
        frame.append(self.hint("Drop screenshot here"));
        frame
    }

    /// Table of every declared property, variants included
    pub fn property_table(&self, definitions: &PropertyDefinitions) -> DocumentNode {
        let mut table = self.column("Property Table", 0.0);

        let header = TABLE_HEADERS.map(|h| h.to_string());
        table.append(self.table_row("Header Row", &header, true));

        for (raw, def) in definitions {
            let key = PropertyKey::new(raw.as_str());
            let info = describe(def, self.host);
            let cells = [
                key.display(),
                info.type_label.to_string(),
                info.allowed_values,
                info.default_value,
                TABLE_DESCRIPTION_PLACEHOLDER.to_string(),
            ];
            table.append(self.table_row(&format!("Row: {}", key.raw()), &cells, false));
        }
        table
    }

    fn table_row(&self, name: &str, cells: &[String; 5], header: bool) -> DocumentNode {
        let mut row = self.row(name, 0.0);
        let widths = self.config.table_columns;
        for (i, (content, width)) in cells.iter().zip(widths).enumerate() {
            let placeholder = !header && i == cells.len() - 1;
            row.append(self.table_cell(content, header, placeholder, width));
        }
        row
    }

    fn table_cell(&self, content: &str, header: bool, placeholder: bool, width: f64) -> DocumentNode {
        let background = if header {
            ColorToken::TableHeader
        } else {
            ColorToken::Background
        };
        let mut cell = DocumentNode::frame(
            "Cell",
            FrameProps::column()
                .with_padding(Padding::uniform(self.config.layout.table_cell_padding))
                .with_fill(self.color(background))
                .with_stroke(Stroke::solid(self.color(ColorToken::Border), 1.0)),
        )
        .with_fixed_width(width);

        let text = if header {
            self.label(content)
        } else {
            self.body(content, placeholder)
        };
        cell.append_filling(text, FillAxes::Width);
        cell
    }
}
