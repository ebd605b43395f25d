use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};

/// An opening escape code paired with the code that undoes it.
///
/// The layout engine never looks inside either string, it only puts them
/// around row text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    open: String,
    reset: String,
}

impl Style {
    pub fn new(open: impl Into<String>, reset: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            reset: reset.into(),
        }
    }

    pub fn background(color: Color) -> Self {
        Self::new(SetBackgroundColor(color).to_string(), ResetColor.to_string())
    }

    pub fn foreground(color: Color) -> Self {
        Self::new(SetForegroundColor(color).to_string(), ResetColor.to_string())
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn reset(&self) -> &str {
        &self.reset
    }

    /// `open + text + reset`
    pub fn paint(&self, text: &str) -> String {
        let mut painted = String::with_capacity(self.open.len() + text.len() + self.reset.len());
        painted.push_str(&self.open);
        painted.push_str(text);
        painted.push_str(&self.reset);
        painted
    }
}
