use crossterm::style::Color;
use supports_color::Stream;

use crate::style::Style;

/// How many colours stdout can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorLevel {
    None,
    Basic,
    Color256,
    TrueColor,
}

pub fn color_level() -> ColorLevel {
    match supports_color::on(Stream::Stdout) {
        None => ColorLevel::None,
        Some(level) if level.has_16m => ColorLevel::TrueColor,
        Some(level) if level.has_256 => ColorLevel::Color256,
        Some(_) => ColorLevel::Basic,
    }
}

pub fn supports_colors() -> bool {
    color_level() > ColorLevel::None
}

/// The node background used when printing to a terminal, if it has colours.
pub fn default_background(level: ColorLevel) -> Option<Style> {
    match level {
        ColorLevel::None => None,
        // DarkGrey is the bright-black slot of the basic palette
        _ => Some(Style::background(Color::DarkGrey)),
    }
}
