use crate::config::RenderConfig;
use crate::layout::TextBox;
use crate::text::{pad_right, truncate};

/// Builds the box for one node's value.
///
/// Single-row values are bracketed (`[value]`); multi-row values get `│`
/// sides. With `border` both get a full frame instead. A background style
/// wraps every row, padded by a blank column each side when there is no frame.
pub fn render_value(value: &str, config: &RenderConfig) -> TextBox {
    let mut text = if config.escape_newlines {
        value.replace('\n', &config.newline_marker)
    } else {
        value.to_string()
    };
    if let Some(length) = config.trim_length {
        text = truncate(&text, length, &config.trim_marker);
    }

    let content = TextBox::from_text(&text);
    let framed = if content.height == 1 && !config.border {
        bracket(content)
    } else {
        frame(content, config.border)
    };

    match &config.background_style {
        Some(style) => framed.with_background(style, !config.border),
        None => framed,
    }
}

fn bracket(content: TextBox) -> TextBox {
    let width = content.width + 2;
    let lines = content
        .lines
        .iter()
        .map(|line| format!("[{}]", pad_right(line, content.width)))
        .collect();
    TextBox::new(lines, width)
}

fn frame(content: TextBox, border: bool) -> TextBox {
    let inner = content.width;
    let mut lines = Vec::with_capacity(content.height + 2);
    if border {
        lines.push(format!("┌{}┐", "─".repeat(inner)));
    }
    lines.extend(
        content
            .lines
            .iter()
            .map(|line| format!("│{}│", pad_right(line, inner))),
    );
    if border {
        lines.push(format!("└{}┘", "─".repeat(inner)));
    }
    TextBox::new(lines, inner + 2)
}
