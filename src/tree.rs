//! Recursive layout of trees.

use anyhow::Result;
use tracing::{debug, trace};

use crate::access::TreeAccess;
use crate::config::{Orientation, RenderConfig};
use crate::layout::{self, TextBox, render_value};

/// Lays out the tree under `root` as one box.
///
/// Children are laid out before their parent, depth first. Nothing here
/// detects cycles: the tree has to be finite, or `max_depth` has to be set.
pub fn layout_tree<N, A>(root: &N, access: &A, config: &RenderConfig) -> Result<TextBox>
where
    N: ?Sized,
    A: TreeAccess<N> + ?Sized,
{
    let layout = TreeLayout { access, config };
    let text_box = layout.layout_node(root, 0)?;
    debug!(
        width = text_box.width(),
        height = text_box.height(),
        "laid out tree"
    );
    Ok(text_box)
}

struct TreeLayout<'a, A: ?Sized> {
    access: &'a A,
    config: &'a RenderConfig,
}

impl<A: ?Sized> TreeLayout<'_, A> {
    fn layout_node<N: ?Sized>(&self, node: &N, depth: usize) -> Result<TextBox>
    where
        A: TreeAccess<N>,
    {
        let label = self.access.label(node)?;
        let children = self.access.children(node)?;
        let value = self.access.value(node)?;
        let own = render_value(&value, self.config);
        trace!(depth, children = children.len(), "layout_node");

        let orientation = self.config.orientation;
        let mut text_box = own;
        if !children.is_empty() && self.config.expands(depth) {
            let child_boxes = children
                .into_iter()
                .map(|child| self.layout_node(child, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            let joined = layout::join_children(child_boxes, orientation, branch_glyph(orientation));
            text_box = layout::add_parent(text_box, joined, orientation);
        }

        match label {
            Some(label) if !label.is_empty() => Ok(self.add_label(&label, text_box)),
            _ => Ok(text_box),
        }
    }

    /// Hangs `label` before the subtree, joined by a one-glyph separator.
    fn add_label(&self, label: &str, subtree: TextBox) -> TextBox {
        let orientation = self.config.orientation;
        let mut label_box = TextBox::from_text(label);
        if let Some(style) = &self.config.label_style {
            label_box = label_box.with_background(style, true);
        }
        let separator = TextBox::from_text(match orientation {
            Orientation::Vertical => "|",
            Orientation::Horizontal => "─",
        });
        let subtree = layout::add_parent(separator, subtree, orientation);
        layout::add_parent(label_box, subtree, orientation)
    }
}

fn branch_glyph(orientation: Orientation) -> char {
    match orientation {
        Orientation::Vertical => '│',
        Orientation::Horizontal => '─',
    }
}
