//! The documentation frame and its sections

use tracing::debug;

use crate::error::DocError;
use crate::inspect::{default_variant, non_variant_properties};
use crate::layout::{DocumentNode, FillAxes, FrameProps, Padding, Stroke};
use crate::scene::{Host, NodeType, SceneNode};
use crate::stylesheet::ColorToken;

use super::DocBuilder;

const PROMPTS: [(&str, &str); 3] = [
    ("What is this component?", "(1-2 sentence definition)"),
    ("When should it be used?", "(bulleted use cases)"),
    (
        "Key behavior rules / constraints",
        "(the opinionated rules you want enforced)",
    ),
];

impl<H: Host> DocBuilder<'_, H> {
    /// Build the complete, detached documentation tree for a component or
    /// component set
    pub fn documentation(&self, component: &SceneNode) -> Result<DocumentNode, DocError> {
        let layout = &self.config.layout;
        let mut doc = DocumentNode::frame(
            format!("Documentation: {}", component.name),
            FrameProps::column()
                .with_padding(Padding::uniform(layout.frame_padding))
                .with_spacing(layout.section_spacing)
                .with_fill(self.color(ColorToken::Background))
                .with_stroke(Stroke::solid(self.color(ColorToken::Border), 1.0))
                .with_radius(32.0),
        );

        doc.append(self.title(&format!("{} - Documentation", component.name)));
        doc.append_filling(self.component_container(), FillAxes::Width);
        doc.append_filling(self.description_section(component), FillAxes::Width);
        doc.append(self.definition_section(component)?);
        doc.append_filling(self.dos_donts_section(), FillAxes::Width);

        Ok(doc)
    }

    /// Dashed drop zone for a hand-placed example of the component
    pub fn component_container(&self) -> DocumentNode {
        let mut container = DocumentNode::frame(
            "Component container",
            FrameProps::column()
                .with_padding(Padding::uniform(self.config.layout.frame_padding))
                .with_radius(12.0)
                .centered(),
        );

        let mut placeholder = DocumentNode::frame(
            "Component Placeholder",
            FrameProps::column()
                .with_padding(Padding::uniform(16.0))
                .with_fill(self.color(ColorToken::Background))
                .with_stroke(Stroke::dashed(
                    self.color(ColorToken::Border),
                    1.0,
                    vec![4.0, 4.0],
                ))
                .with_radius(4.0)
                .centered(),
        )
        .with_fixed_size(500.0, 150.0);
        placeholder.append(self.hint("Drop component here"));

        container.append_filling(placeholder, FillAxes::Width);
        container
    }

    /// Section 1: description and writing prompts
    pub fn description_section(&self, component: &SceneNode) -> DocumentNode {
        let mut section = self.section("Description + behaviour");
        section.append(self.heading("Description + behaviour"));

        let mut description = self.column("Description", 8.0);
        description.append(self.label("Description:"));
        let text = component.description.trim();
        let value = if text.is_empty() {
            self.body("Write 1-2 sentence definition here", true)
        } else {
            self.body(&component.description, false)
        };
        description.append_filling(value, FillAxes::Width);
        section.append_filling(description, FillAxes::Width);

        let mut prompts = self.row("Prompts", 16.0);
        for (lead, rest) in PROMPTS {
            let mut item = self.column("Prompt Item", 4.0);
            item.append_filling(self.prompt(lead, rest), FillAxes::Width);
            item.append_filling(self.body("Your answer here...", true), FillAxes::Width);
            prompts.append_filling(item, FillAxes::Width);
        }
        section.append_filling(prompts, FillAxes::Width);

        section
    }

    /// Section 2: variant gallery, property table and property previews
    pub fn definition_section(&self, component: &SceneNode) -> Result<DocumentNode, DocError> {
        let spacing = self.config.layout.item_spacing;
        let mut section = self.section("Component definition");
        section.append(self.heading("Component definition"));

        let definitions = self.host.property_definitions(component);

        if component.node_type == NodeType::ComponentSet {
            let mut variants = self.column("Variants", spacing);
            variants.append(self.subheading("Variants"));

            let mut gallery = self.column("Variants Container", spacing);
            for variant in component.variants() {
                gallery.append(self.variant_row(variant)?);
            }
            if gallery.children.is_empty() {
                variants.append(self.body("No variants found in this component set", true));
            } else {
                variants.append(gallery);
            }
            section.append(variants);
        } else {
            let mut single = self.column("Component", spacing);
            single.append(self.subheading("Component"));
            single.append(self.variant_row(component)?);
            section.append(single);
        }

        if !definitions.is_empty() {
            let mut table = self.column("Properties", spacing);
            table.append(self.subheading("Properties"));
            table.append(self.property_table(&definitions));
            section.append(table);
        }

        let properties = non_variant_properties(&definitions);
        if !properties.is_empty() {
            let mut others = self.column("Other Properties", spacing);
            others.append(self.subheading("Other properties"));

            let template = match component.node_type {
                NodeType::ComponentSet => default_variant(component),
                _ => Some(component),
            };
            match template {
                Some(template) => {
                    let mut rows = self.column("Properties Container", spacing);
                    for (key, def) in &properties {
                        rows.append(self.property_row(key, def, template)?);
                    }
                    others.append(rows);
                }
                None => debug!(
                    component = component.name.as_str(),
                    "no variant to preview properties on"
                ),
            }
            section.append(others);
        }

        Ok(section)
    }

    /// Section 3: Do/Don't exemplars
    pub fn dos_donts_section(&self) -> DocumentNode {
        let mut section = self.section("Dos / Don'ts");

        let mut header = self.column("Header", self.config.layout.item_spacing);
        header.append(self.heading("Dos / Don'ts"));
        header.append_filling(
            self.body(
                "Fill in examples of correct and incorrect usage patterns for this component.",
                true,
            ),
            FillAxes::Width,
        );
        section.append_filling(header, FillAxes::Width);

        for index in 0..self.config.do_dont_rows {
            section.append_filling(self.do_dont_row(index), FillAxes::Width);
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{button_host, fonts};
    use super::*;
    use crate::layout::SizingMode;
    use crate::scene::{NodeId, SceneLookup};
    use crate::DocConfig;
    use pretty_assertions::assert_eq;

    fn child_names(node: &DocumentNode) -> Vec<&str> {
        node.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_documentation_structure() {
        let host = button_host();
        let fonts = fonts();
        let config = DocConfig::default();
        let builder = DocBuilder::new(&host, &fonts, &config);
        let set = host.node(&NodeId::new("1:1")).unwrap();

        let doc = builder.documentation(set).unwrap();

        assert_eq!(doc.name, "Documentation: Button");
        assert_eq!(
            child_names(&doc),
            vec![
                "Button - Documentation",
                "Component container",
                "Description + behaviour",
                "Component definition",
                "Dos / Don'ts",
            ]
        );
        assert!(doc.sizing().is_none());
        assert_eq!(
            doc.children[1].sizing().map(|s| s.horizontal),
            Some(SizingMode::Fill)
        );
        assert_eq!(
            doc.children[3].sizing().map(|s| s.horizontal),
            Some(SizingMode::Hug)
        );
    }

    #[test]
    fn test_definition_section_for_set() {
        let host = button_host();
        let fonts = fonts();
        let config = DocConfig::default();
        let builder = DocBuilder::new(&host, &fonts, &config);
        let set = host.node(&NodeId::new("1:1")).unwrap();

        let section = builder.definition_section(set).unwrap();

        assert_eq!(
            child_names(&section),
            vec!["Component definition", "Variants", "Properties", "Other Properties"]
        );
        assert_eq!(section.find_all("Variant: ").len(), 2);
        let rows: Vec<&str> = section
            .find_all("Property: ")
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(rows, vec!["Property: Icon#1:0", "Property: Label#2:0"]);
    }

    #[test]
    fn test_definition_section_for_single_component() {
        let host = button_host();
        let fonts = fonts();
        let config = DocConfig::default();
        let builder = DocBuilder::new(&host, &fonts, &config);
        let card = host.node(&NodeId::new("2:1")).unwrap();

        let section = builder.definition_section(card).unwrap();

        assert_eq!(child_names(&section), vec!["Component definition", "Component"]);
        assert!(section.find("Variant: Card").is_some());
    }

    #[test]
    fn test_empty_set_placeholder() {
        let host = crate::scene::MemoryHost::from_json(
            r#"{"nodes": [{"id": "1:1", "name": "Empty", "type": "COMPONENT_SET"}]}"#,
        )
        .unwrap();
        let fonts = fonts();
        let config = DocConfig::default();
        let builder = DocBuilder::new(&host, &fonts, &config);
        let set = host.node(&NodeId::new("1:1")).unwrap();

        let section = builder.definition_section(set).unwrap();
        let variants = section.child("Variants").unwrap();
        assert_eq!(
            variants.children[1]
                .text_props()
                .map(|t| t.content.as_str()),
            Some("No variants found in this component set")
        );
    }

    #[test]
    fn test_description_placeholder_and_prompts() {
        let host = button_host();
        let fonts = fonts();
        let config = DocConfig::default();
        let builder = DocBuilder::new(&host, &fonts, &config);
        let card = host.node(&NodeId::new("2:1")).unwrap();

        let section = builder.description_section(card);

        let description = section.child("Description").unwrap();
        assert_eq!(
            description.children[1].text_props().map(|t| t.content.as_str()),
            Some("Write 1-2 sentence definition here")
        );
        let prompts = section.child("Prompts").unwrap();
        assert_eq!(prompts.children.len(), 3);
        let first = prompts.children[0].children[0].text_props().unwrap();
        assert_eq!(
            first.content,
            "What is this component? (1-2 sentence definition)"
        );
        assert_eq!(first.emphasis.as_ref().map(|e| e.chars), Some(23));
    }

    #[test]
    fn test_do_dont_row_count() {
        let host = button_host();
        let fonts = fonts();
        let config = DocConfig::default().with_do_dont_rows(3);
        let builder = DocBuilder::new(&host, &fonts, &config);

        let section = builder.dos_donts_section();
        assert_eq!(
            child_names(&section),
            vec!["Header", "Do/Don't Row 1", "Do/Don't Row 2", "Do/Don't Row 3"]
        );
    }
}
