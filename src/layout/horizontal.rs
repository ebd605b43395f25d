//! Left-right composition: siblings stacked, parent to the left.

use crate::layout::TextBox;
use crate::layout::text_box::centre;
use crate::text::pad_right;

/// Stacks `boxes` top to bottom behind a connector column.
///
/// Siblings are separated by one blank row. The column runs from the first
/// child's anchor row (`┌`) through every interior anchor (`├`) to the last
/// (`└`); its own centre is turned into a junction and becomes the joined
/// box's `middle_height`.
pub fn join_vertically(boxes: Vec<TextBox>) -> TextBox {
    let width = boxes.iter().map(|b| b.width).max().unwrap_or(0) + 1;

    let mut rows = Vec::new();
    let mut anchors = Vec::with_capacity(boxes.len());
    for (i, b) in boxes.into_iter().enumerate() {
        if i > 0 {
            rows.push(String::new());
        }
        anchors.push(rows.len() + b.middle_height());
        rows.extend(b.lines);
    }

    let (column, middle) = pipe_column(rows.len(), &anchors);
    let lines = column
        .into_iter()
        .zip(rows)
        .map(|(pipe, row)| {
            let mut line = String::with_capacity(row.len() + pipe.len_utf8());
            line.push(pipe);
            line.push_str(&row);
            line
        })
        .collect();

    let mut joined = TextBox::new(lines, width);
    joined.middle_height = Some(middle);
    joined
}

/// One connector glyph per row, plus the junction row.
fn pipe_column(height: usize, anchors: &[usize]) -> (Vec<char>, usize) {
    let mut column = vec![' '; height];
    let (Some(&start), Some(&end)) = (anchors.first(), anchors.last()) else {
        return (column, 0);
    };

    for pipe in &mut column[start..=end] {
        *pipe = '│';
    }
    for &anchor in anchors.iter().skip(1).take(anchors.len().saturating_sub(2)) {
        column[anchor] = '├';
    }
    column[start] = '┌';
    column[end] = '└';

    let middle = start + centre(end - start + 1);
    column[middle] = match column[middle] {
        '┌' => '┬',
        '└' => '┴',
        '│' => '┤',
        '├' => '┼',
        other => other,
    };
    (column, middle)
}

/// Puts a one-column connector left of a lone child, `glyph` on its anchor.
pub fn connect_single(child: TextBox, glyph: char) -> TextBox {
    let middle = child.middle_height();
    let lines = child
        .lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let pipe = if i == middle { glyph } else { ' ' };
            format!("{pipe}{line}")
        })
        .collect();
    TextBox::new(lines, child.width + 1)
}

/// Places `parent` left of `children` with their anchors on the same row.
///
/// Whichever side has its anchor higher up is pushed down with blank rows.
pub fn add_parent(parent: TextBox, children: TextBox) -> TextBox {
    let parent_middle = parent.middle_height();
    let children_middle = children.middle_height();
    let parent_shift = children_middle.saturating_sub(parent_middle);
    let children_shift = parent_middle.saturating_sub(children_middle);

    let blank = " ".repeat(parent.width);
    let parent_rows: Vec<String> = std::iter::repeat_n(blank.clone(), parent_shift)
        .chain(parent.lines.iter().map(|line| pad_right(line, parent.width)))
        .collect();
    let children_rows: Vec<String> = std::iter::repeat_n(String::new(), children_shift)
        .chain(children.lines)
        .collect();

    let height = parent_rows.len().max(children_rows.len());
    let lines = (0..height)
        .map(|i| {
            let left = parent_rows.get(i).unwrap_or(&blank);
            let right = children_rows.get(i).map_or("", String::as_str);
            format!("{left}{right}")
        })
        .collect();

    let mut joined = TextBox::new(lines, parent.width + children.width);
    joined.middle_height = Some(parent_middle.max(children_middle));
    joined
}
