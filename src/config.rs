use crate::style::Style;

/// Which way a diagram grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Root on top, children below.
    #[default]
    Vertical,
    /// Root on the left, children to the right.
    Horizontal,
}

/// Everything that shapes one rendering, resolved once up front.
///
/// Build it from [`RenderConfig::default`] and the `with_*` setters, then
/// pass it by reference into the layout drivers. It is never mutated while a
/// diagram is being laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of levels to show, counting the root as one. `None` shows all.
    pub max_depth: Option<usize>,
    /// Values wider than this many columns are cut. `None` disables cutting.
    pub trim_length: Option<usize>,
    pub trim_marker: String,
    /// Show line breaks as `newline_marker` instead of splitting rows.
    pub escape_newlines: bool,
    pub newline_marker: String,
    /// Draw a full frame around every node.
    pub border: bool,
    pub background_style: Option<Style>,
    pub label_style: Option<Style>,
    /// Applied to content cells by the final colouring pass.
    pub content_style: Option<Style>,
    pub orientation: Orientation,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            trim_length: None,
            trim_marker: String::from("..."),
            escape_newlines: false,
            newline_marker: String::from("\\n"),
            border: false,
            background_style: None,
            label_style: None,
            content_style: None,
            orientation: Orientation::Vertical,
        }
    }
}

impl RenderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_trim(mut self, length: usize, marker: impl Into<String>) -> Self {
        self.trim_length = Some(length);
        self.trim_marker = marker.into();
        self
    }

    pub fn with_escaped_newlines(mut self, marker: impl Into<String>) -> Self {
        self.escape_newlines = true;
        self.newline_marker = marker.into();
        self
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn with_background(mut self, style: Style) -> Self {
        self.background_style = Some(style);
        self
    }

    pub fn with_label_style(mut self, style: Style) -> Self {
        self.label_style = Some(style);
        self
    }

    pub fn with_content_style(mut self, style: Style) -> Self {
        self.content_style = Some(style);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Whether a node at `depth` (root = 0) gets its children drawn.
    pub fn expands(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth + 1 < max)
    }
}
