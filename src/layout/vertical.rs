//! Top-down composition: siblings side by side, parent above.

use crate::layout::TextBox;
use crate::layout::text_box::centre;
use crate::text::pad_right;

/// Lays `boxes` out left to right under a connector frieze.
///
/// Siblings are separated by one blank column. The frieze runs from the first
/// child's anchor (`┌`) through every interior anchor (`┬`) to the last
/// (`┐`); its own centre is turned into a junction and becomes the joined
/// box's `middle_width`.
pub fn join_horizontally(boxes: Vec<TextBox>) -> TextBox {
    let height = boxes.iter().map(|b| b.height).max().unwrap_or(0);
    let width = boxes.iter().map(|b| b.width).sum::<usize>() + boxes.len().saturating_sub(1);

    let mut lines = Vec::with_capacity(height + 1);
    lines.push(String::new());
    for row in 0..height {
        let cells: Vec<String> = boxes
            .iter()
            .map(|b| pad_right(b.lines.get(row).map_or("", String::as_str), b.width))
            .collect();
        lines.push(cells.join(" "));
    }

    let (frieze, middle) = frieze(&boxes);
    lines[0] = frieze;

    let mut joined = TextBox::new(lines, width);
    joined.middle_width = Some(middle);
    joined
}

/// Builds the connector row and returns it with its junction column.
fn frieze(boxes: &[TextBox]) -> (String, usize) {
    let indent = boxes.first().map_or(0, TextBox::middle_width);

    let mut pipes = vec!['┌'];
    for pair in boxes.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let run = prev.width - prev.middle_width() + next.middle_width();
        pipes.extend(std::iter::repeat_n('─', run));
        pipes.push('┬');
    }
    if let Some(last) = pipes.last_mut() {
        *last = '┐';
    }

    let middle = centre(pipes.len());
    pipes[middle] = match pipes[middle] {
        '─' => '┴',
        '┬' => '┼',
        '┌' => '├',
        '┐' => '┤',
        other => other,
    };

    let mut frieze = " ".repeat(indent);
    frieze.extend(pipes);
    (frieze, indent + middle)
}

/// Puts a one-row connector above a lone child, `glyph` under its anchor.
pub fn connect_single(mut child: TextBox, glyph: char) -> TextBox {
    let mut connector = " ".repeat(child.middle_width());
    connector.push(glyph);
    child.lines.insert(0, connector);
    child.height += 1;
    child
}

/// Stacks `parent` above `children` with their anchors on the same column.
///
/// Whichever side has its anchor further left is shifted right.
pub fn add_parent(parent: TextBox, children: TextBox) -> TextBox {
    let parent_middle = parent.middle_width();
    let children_middle = children.middle_width();
    let parent_shift = children_middle.saturating_sub(parent_middle);
    let children_shift = parent_middle.saturating_sub(children_middle);

    let width = (parent.width + parent_shift).max(children.width + children_shift);
    let height = parent.height + children.height;
    let lines = shift_right(parent.lines, parent_shift)
        .chain(shift_right(children.lines, children_shift))
        .collect();

    let mut joined = TextBox::new(lines, width);
    debug_assert_eq!(joined.height, height);
    joined.middle_width = Some(parent_middle.max(children_middle));
    joined
}

fn shift_right(lines: Vec<String>, by: usize) -> impl Iterator<Item = String> {
    let padding = " ".repeat(by);
    lines.into_iter().map(move |line| {
        if padding.is_empty() {
            line
        } else {
            format!("{padding}{line}")
        }
    })
}
