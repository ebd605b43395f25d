//! Box geometry: rendering single values and composing boxes into diagrams.

pub mod horizontal;
pub(crate) mod text_box;
pub mod value;
pub mod vertical;

pub use text_box::TextBox;
pub use value::render_value;

use crate::config::Orientation;

/// Lays children out for `orientation`, a lone child getting `glyph` as its
/// connector.
pub(crate) fn join_children(
    mut children: Vec<TextBox>,
    orientation: Orientation,
    glyph: char,
) -> TextBox {
    if children.len() == 1 {
        if let Some(child) = children.pop() {
            return connect_single(child, orientation, glyph);
        }
    }
    match orientation {
        Orientation::Vertical => vertical::join_horizontally(children),
        Orientation::Horizontal => horizontal::join_vertically(children),
    }
}

pub(crate) fn connect_single(child: TextBox, orientation: Orientation, glyph: char) -> TextBox {
    match orientation {
        Orientation::Vertical => vertical::connect_single(child, glyph),
        Orientation::Horizontal => horizontal::connect_single(child, glyph),
    }
}

/// Attaches `parent` before `children` along the orientation's axis.
pub(crate) fn add_parent(parent: TextBox, children: TextBox, orientation: Orientation) -> TextBox {
    match orientation {
        Orientation::Vertical => vertical::add_parent(parent, children),
        Orientation::Horizontal => horizontal::add_parent(parent, children),
    }
}
