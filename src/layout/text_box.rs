use crate::style::Style;
use crate::text::{display_width, pad_right};

/// A rectangular block of terminal rows.
///
/// `width` is the widest row in display columns; narrower rows are read as if
/// padded with blanks. The anchors mark where this block connects to its
/// neighbours when it is composed: `middle_width` is a column, `middle_height`
/// a row. Unset anchors fall back to the centre, rounding towards the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    pub(crate) lines: Vec<String>,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) middle_width: Option<usize>,
    pub(crate) middle_height: Option<usize>,
}

impl TextBox {
    pub(crate) fn new(lines: Vec<String>, width: usize) -> Self {
        let height = lines.len();
        Self {
            lines,
            width,
            height,
            middle_width: None,
            middle_height: None,
        }
    }

    /// One row per line of `text`, measured by display width.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(String::from).collect();
        let width = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);
        Self::new(lines, width)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn middle_width(&self) -> usize {
        self.middle_width.unwrap_or_else(|| centre(self.width))
    }

    pub fn middle_height(&self) -> usize {
        self.middle_height.unwrap_or_else(|| centre(self.height))
    }

    /// Wraps every row in `style`, optionally with one blank column each side.
    pub(crate) fn with_background(mut self, style: &Style, pad: bool) -> Self {
        let width = self.width;
        for line in &mut self.lines {
            let row = pad_right(line, width);
            *line = if pad {
                style.paint(&format!(" {row} "))
            } else {
                style.paint(&row)
            };
        }
        if pad {
            self.width += 2;
        }
        self
    }

    /// Rows as they would be printed, each padded to the full width.
    pub fn padded_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| pad_right(line, self.width))
    }
}

/// `ceil(n / 2) - 1`, clamped at zero.
pub(crate) fn centre(n: usize) -> usize {
    n.div_ceil(2).saturating_sub(1)
}
