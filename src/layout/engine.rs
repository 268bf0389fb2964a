//! Geometry pass over a document tree
//!
//! Stands in for the host's auto layout so a finished document can be
//! previewed. The pass runs in three steps:
//!
//! 1. **Widths**: intrinsic widths are measured bottom-up and assigned
//!    top-down. Fill children share the leftover primary space, or take the
//!    whole inner width on the counter axis.
//! 2. **Heights**: measured the same way once widths are known, so text that
//!    fills its parent's width wraps.
//! 3. **Positions**: children of auto-layout frames are placed by padding,
//!    spacing and alignment. Frames without layout keep explicit positions.
//!
//! Text extents are estimated from character counts (see [`LayoutConfig`]).

use super::config::LayoutConfig;
use super::types::*;

/// Size and position every node of `root`.
///
/// The root keeps its own position; every other node is positioned relative
/// to its parent.
pub fn compute(root: &mut DocumentNode, config: &LayoutConfig) {
    let width = intrinsic(root, Axis::Horizontal, config);
    assign(root, Axis::Horizontal, width, config);

    let height = intrinsic(root, Axis::Vertical, config);
    assign(root, Axis::Vertical, height, config);

    arrange(root);
}

fn mode(node: &DocumentNode, axis: Axis) -> SizingMode {
    match axis {
        Axis::Horizontal => node.horizontal,
        Axis::Vertical => node.vertical,
    }
}

fn size(node: &DocumentNode, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => node.bounds.width,
        Axis::Vertical => node.bounds.height,
    }
}

fn set_size(node: &mut DocumentNode, axis: Axis, value: f64) {
    match axis {
        Axis::Horizontal => node.bounds.width = value,
        Axis::Vertical => node.bounds.height = value,
    }
}

fn offset(node: &DocumentNode, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => node.bounds.x,
        Axis::Vertical => node.bounds.y,
    }
}

fn set_offset(node: &mut DocumentNode, axis: Axis, value: f64) {
    match axis {
        Axis::Horizontal => node.bounds.x = value,
        Axis::Vertical => node.bounds.y = value,
    }
}

/// Size a node would take if its parent let it choose
fn intrinsic(node: &DocumentNode, axis: Axis, config: &LayoutConfig) -> f64 {
    match mode(node, axis) {
        SizingMode::Fixed(value) => value,
        SizingMode::Hug | SizingMode::Fill => content_size(node, axis, config),
    }
}

fn content_size(node: &DocumentNode, axis: Axis, config: &LayoutConfig) -> f64 {
    match &node.kind {
        NodeKind::Text(text) => match axis {
            Axis::Horizontal => text
                .content
                .lines()
                .map(|line| config.text_width(line, text.size))
                .fold(0.0, f64::max),
            Axis::Vertical => text_height(text, node.bounds.width, config),
        },
        NodeKind::Instance(instance) => match axis {
            Axis::Horizontal => instance.width(),
            Axis::Vertical => instance.height(),
        },
        NodeKind::Rectangle(_) => 0.0,
        NodeKind::Frame(props) => {
            let sizes = node.children.iter().map(|c| intrinsic(c, axis, config));
            match props.layout {
                Some(direction) if direction == axis => {
                    let count = node.children.len();
                    let gaps = props.spacing * count.saturating_sub(1) as f64;
                    props.padding.along(axis) + sizes.sum::<f64>() + gaps
                }
                Some(_) => props.padding.along(axis) + sizes.fold(0.0, f64::max),
                None => node
                    .children
                    .iter()
                    .map(|c| offset(c, axis) + intrinsic(c, axis, config))
                    .fold(0.0, f64::max),
            }
        }
    }
}

/// Height of a text block wrapped at `width`
fn text_height(text: &TextProps, width: f64, config: &LayoutConfig) -> f64 {
    let lines: f64 = text
        .content
        .split('\n')
        .map(|line| {
            let line_width = config.text_width(line, text.size);
            if width > 0.0 && line_width > width {
                (line_width / width).ceil()
            } else {
                1.0
            }
        })
        .sum();
    lines * config.line_height(text.size)
}

/// Give `node` its final size along `axis`, then size its children
fn assign(node: &mut DocumentNode, axis: Axis, value: f64, config: &LayoutConfig) {
    set_size(node, axis, value);

    let (layout, padding, spacing) = match &node.kind {
        NodeKind::Frame(props) => (props.layout, props.padding, props.spacing),
        _ => return,
    };
    let inner = (value - padding.along(axis)).max(0.0);

    let sizes: Vec<f64> = match layout {
        Some(direction) if direction == axis => {
            let count = node.children.len();
            let gaps = spacing * count.saturating_sub(1) as f64;
            let fills = node
                .children
                .iter()
                .filter(|c| mode(c, axis) == SizingMode::Fill)
                .count();
            let taken: f64 = node
                .children
                .iter()
                .filter(|c| mode(c, axis) != SizingMode::Fill)
                .map(|c| intrinsic(c, axis, config))
                .sum();
            let share = if fills > 0 {
                ((inner - taken - gaps) / fills as f64).max(0.0)
            } else {
                0.0
            };
            node.children
                .iter()
                .map(|c| match mode(c, axis) {
                    SizingMode::Fill => share,
                    _ => intrinsic(c, axis, config),
                })
                .collect()
        }
        Some(_) => node
            .children
            .iter()
            .map(|c| match mode(c, axis) {
                SizingMode::Fill => inner,
                _ => intrinsic(c, axis, config),
            })
            .collect(),
        None => node
            .children
            .iter()
            .map(|c| intrinsic(c, axis, config))
            .collect(),
    };

    for (child, size) in node.children.iter_mut().zip(sizes) {
        assign(child, axis, size, config);
    }
}

/// Position children of auto-layout frames
fn arrange(node: &mut DocumentNode) {
    if let NodeKind::Frame(props) = &node.kind {
        if let Some(direction) = props.layout {
            let counter = direction.cross();
            let padding = props.padding;
            let spacing = props.spacing;
            let (primary_align, counter_align) = (props.primary_align, props.counter_align);

            let inner_primary = size(node, direction) - padding.along(direction);
            let inner_counter = size(node, counter) - padding.along(counter);
            let content: f64 = node.children.iter().map(|c| size(c, direction)).sum::<f64>()
                + spacing * node.children.len().saturating_sub(1) as f64;

            let mut cursor = padding.start(direction);
            if primary_align == Align::Center {
                cursor += ((inner_primary - content) / 2.0).max(0.0);
            }

            for child in &mut node.children {
                set_offset(child, direction, cursor);
                cursor += size(child, direction) + spacing;

                let mut cross = padding.start(counter);
                if counter_align == Align::Center {
                    cross += ((inner_counter - size(child, counter)) / 2.0).max(0.0);
                }
                set_offset(child, counter, cross);
            }
        }
    }

    for child in &mut node.children {
        arrange(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::FontName;

    fn fixed(name: &str, width: f64, height: f64) -> DocumentNode {
        DocumentNode::frame(name, FrameProps::free()).with_fixed_size(width, height)
    }

    fn text(content: &str, size: f64) -> DocumentNode {
        DocumentNode::text(
            content,
            TextProps::new(content, FontName::new("Inter", "Regular"), size, "#1A1A1A"),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_column_hugs_children() {
        let mut column = DocumentNode::frame(
            "Column",
            FrameProps::column()
                .with_padding(Padding::uniform(10.0))
                .with_spacing(5.0),
        );
        column.append(fixed("A", 100.0, 20.0));
        column.append(fixed("B", 50.0, 30.0));

        compute(&mut column, &LayoutConfig::default());

        assert_eq!(column.bounds, BoundingBox::new(0.0, 0.0, 120.0, 75.0));
        assert_eq!(column.children[0].bounds, BoundingBox::new(10.0, 10.0, 100.0, 20.0));
        assert_eq!(column.children[1].bounds, BoundingBox::new(10.0, 35.0, 50.0, 30.0));
    }

    #[test]
    fn test_fill_width_takes_inner_width() {
        let mut column = DocumentNode::frame(
            "Column",
            FrameProps::column().with_padding(Padding::uniform(20.0)),
        );
        column.append(fixed("Wide", 300.0, 10.0));
        column.append_filling(fixed("Stretch", 40.0, 10.0), FillAxes::Width);

        compute(&mut column, &LayoutConfig::default());

        assert_eq!(column.bounds.width, 340.0);
        assert_eq!(column.children[1].bounds.width, 300.0);
    }

    #[test]
    fn test_fill_children_share_primary_space() {
        let mut row = DocumentNode::frame("Row", FrameProps::row().with_spacing(16.0))
            .with_fixed_width(300.0);
        row.append_filling(fixed("Do", 10.0, 40.0), FillAxes::Width);
        row.append_filling(fixed("Don't", 10.0, 60.0), FillAxes::Width);

        compute(&mut row, &LayoutConfig::default());

        assert_eq!(row.children[0].bounds.width, 142.0);
        assert_eq!(row.children[1].bounds.width, 142.0);
        assert_eq!(row.children[1].bounds.x, 158.0);
        // Counter axis hugs the tallest child
        assert_eq!(row.bounds.height, 60.0);
    }

    #[test]
    fn test_fill_width_text_wraps() {
        let config = LayoutConfig::default();
        let mut column = DocumentNode::frame("Column", FrameProps::column()).with_fixed_width(100.0);
        // 10 chars at 20px is 110px wide
        column.append_filling(text("aaaaaaaaaa", 20.0), FillAxes::Width);

        compute(&mut column, &config);

        let wrapped = &column.children[0];
        assert_eq!(wrapped.bounds.width, 100.0);
        assert_close(wrapped.bounds.height, 2.0 * config.line_height(20.0));
    }

    #[test]
    fn test_hug_text_stays_on_one_line() {
        let config = LayoutConfig::default();
        let mut label = text("Border width:", 16.0);
        compute(&mut label, &config);
        assert_close(label.bounds.width, config.text_width("Border width:", 16.0));
        assert_close(label.bounds.height, config.line_height(16.0));
    }

    #[test]
    fn test_centered_alignment() {
        let mut container = DocumentNode::frame("Container", FrameProps::column().centered())
            .with_fixed_size(200.0, 100.0);
        container.append(fixed("Child", 50.0, 20.0));

        compute(&mut container, &LayoutConfig::default());

        assert_eq!(container.children[0].bounds, BoundingBox::new(75.0, 40.0, 50.0, 20.0));
    }

    #[test]
    fn test_free_frame_keeps_positions() {
        let mut free = DocumentNode::frame("Visual Container", FrameProps::free());
        free.append(fixed("Base", 120.0, 40.0));
        free.append(fixed("Overlay", 16.0, 16.0).with_position(12.0, 12.0));

        compute(&mut free, &LayoutConfig::default());

        assert_eq!(free.bounds.width, 120.0);
        assert_eq!(free.bounds.height, 40.0);
        assert_eq!(free.children[1].bounds, BoundingBox::new(12.0, 12.0, 16.0, 16.0));
    }

    #[test]
    fn test_root_position_preserved() {
        let mut root = DocumentNode::frame("Root", FrameProps::column()).with_position(420.0, 80.0);
        root.append(fixed("A", 10.0, 10.0));
        compute(&mut root, &LayoutConfig::default());
        assert_eq!(root.bounds, BoundingBox::new(420.0, 80.0, 10.0, 10.0));
    }
}
