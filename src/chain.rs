//! Layout of linked chains: a tree where every node has at most one child.

use anyhow::Result;
use tracing::{debug, trace};

use crate::access::ChainAccess;
use crate::config::{Orientation, RenderConfig};
use crate::layout::{self, TextBox, render_value};

/// Lays out the chain starting at `head` as one box.
///
/// Arrows between neighbours show which links exist. Links are compared by
/// address, so two nodes holding equal values are still told apart. A
/// circular chain needs `max_depth` to terminate.
pub fn layout_chain<N, A>(head: &N, access: &A, config: &RenderConfig) -> Result<TextBox>
where
    N: ?Sized,
    A: ChainAccess<N> + ?Sized,
{
    let text_box = layout_link(head, access, config, 0)?;
    debug!(
        width = text_box.width(),
        height = text_box.height(),
        "laid out chain"
    );
    Ok(text_box)
}

fn layout_link<N, A>(node: &N, access: &A, config: &RenderConfig, depth: usize) -> Result<TextBox>
where
    N: ?Sized,
    A: ChainAccess<N> + ?Sized,
{
    let next = access.next(node)?;
    let own = render_value(&access.value(node)?, config);
    trace!(depth, has_next = next.is_some(), "layout_link");

    let Some(next) = next else {
        return Ok(own);
    };
    if !config.expands(depth) {
        return Ok(own);
    }

    let glyph = link_glyph(node, next, access, config.orientation)?;
    let rest = layout_link(next, access, config, depth + 1)?;
    let rest = layout::connect_single(rest, config.orientation, glyph);
    Ok(layout::add_parent(own, rest, config.orientation))
}

/// Picks the arrow drawn between `from` and `to`, which `access.next(from)`
/// already returned; only the back link is left to look up.
fn link_glyph<N, A>(from: &N, to: &N, access: &A, orientation: Orientation) -> Result<char>
where
    N: ?Sized,
    A: ChainAccess<N> + ?Sized,
{
    let backward = access.prev(to)?.is_some_and(|prev| std::ptr::eq(prev, from));
    Ok(arrow(true, backward, orientation))
}

fn arrow(forward: bool, backward: bool, orientation: Orientation) -> char {
    match (orientation, forward, backward) {
        (Orientation::Vertical, true, true) => '↕',
        (Orientation::Vertical, true, false) => '↓',
        (Orientation::Vertical, false, true) => '↑',
        (Orientation::Horizontal, true, true) => '↔',
        (Orientation::Horizontal, true, false) => '→',
        (Orientation::Horizontal, false, true) => '←',
        (_, false, false) => ' ',
    }
}
