//! Document tree and layout
//!
//! Builders produce a [`DocumentNode`] tree whose sizing is declared per axis
//! (hug, fill, fixed). [`compute`] resolves that into concrete bounds the way
//! a host's auto layout would.

pub mod config;
pub mod engine;
pub mod types;

pub use config::LayoutConfig;
pub use engine::compute;
pub use types::*;

/// Print a laid out tree with positions relative to each parent
pub fn debug_tree(node: &DocumentNode) -> String {
    fn walk(node: &DocumentNode, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        out.push_str(&format!(
            "{}[{}] x={:.1} y={:.1} w={:.1} h={:.1}\n",
            indent, node.name, node.bounds.x, node.bounds.y, node.bounds.width, node.bounds.height
        ));
        for child in &node.children {
            walk(child, depth + 1, out);
        }
    }

    let mut out = String::new();
    walk(node, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_tree() {
        let mut root = DocumentNode::frame("Root", FrameProps::column().with_spacing(4.0));
        root.append(DocumentNode::frame("A", FrameProps::free()).with_fixed_size(10.0, 5.0));
        root.append(DocumentNode::frame("B", FrameProps::free()).with_fixed_size(20.0, 5.0));
        compute(&mut root, &LayoutConfig::default());

        assert_eq!(
            debug_tree(&root),
            "[Root] x=0.0 y=0.0 w=20.0 h=14.0\n  [A] x=0.0 y=0.0 w=10.0 h=5.0\n  [B] x=0.0 y=9.0 w=20.0 h=5.0\n"
        );
    }
}
