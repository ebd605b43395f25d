//! Display-width aware string helpers.
//!
//! Everything here measures terminal columns, not bytes or chars: escape
//! sequences are zero width and wide glyphs count two columns.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ESC: u8 = 0x1B;

/// Number of terminal columns `text` occupies.
///
/// Escape sequences are skipped. An unterminated sequence swallows the rest of
/// the string, so malformed input measures short instead of failing.
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() && !text.as_bytes().contains(&ESC) {
        return text.bytes().filter(|&b| b >= 0x20 && b != 0x7F).count();
    }
    strip_ansi(text).graphemes(true).map(grapheme_width).sum()
}

fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().all(char::is_control) {
        return 0;
    }
    grapheme.width()
}

/// Right-pads `text` with spaces until it is `width` columns wide.
pub fn pad_right(text: &str, width: usize) -> String {
    let current = display_width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(current));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(current)));
    padded
}

/// Cuts `text` down to roughly `length` columns and appends `marker`.
///
/// Text that already fits is returned unchanged. Otherwise the result is the
/// shortest prefix at least `length` columns wide, so a wide glyph on the
/// boundary is kept whole rather than split. Line breaks count as one column.
pub fn truncate(text: &str, length: usize, marker: &str) -> String {
    if measured_width(text) <= length {
        return text.to_string();
    }

    let mut prefix = String::with_capacity(text.len());
    let mut width = 0;
    for segment in Segments::new(text) {
        if width >= length {
            break;
        }
        prefix.push_str(segment.text);
        width += segment.width;
    }
    prefix.push_str(marker);
    prefix
}

/// Width used for truncation, where a line break is an ordinary column.
fn measured_width(text: &str) -> usize {
    Segments::new(text).map(|segment| segment.width).sum()
}

/// Removes escape sequences from `text`.
///
/// Borrows when there is nothing to strip.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.as_bytes().contains(&ESC) {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == ESC {
            i = skip_escape(bytes, i);
        } else {
            // ESC is ASCII, so slicing at its positions stays on char boundaries
            let start = i;
            while i < bytes.len() && bytes[i] != ESC {
                i += 1;
            }
            stripped.push_str(&text[start..i]);
        }
    }
    Cow::Owned(stripped)
}

/// Returns the byte index just past the escape sequence starting at `pos`.
pub(crate) fn skip_escape(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    match bytes.get(next) {
        None => bytes.len(),
        Some(b'[') => skip_csi(bytes, next + 1),
        Some(b']' | b'P' | b'^' | b'_') => skip_string_terminated(bytes, next + 1),
        Some(&b) if b.is_ascii() => next + 1,
        // never step into the middle of a multi-byte char
        Some(_) => next,
    }
}

fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

struct Segment<'a> {
    text: &'a str,
    width: usize,
}

/// Splits text into escape sequences and grapheme clusters, in order.
struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let rest = &text[self.pos..];
        if rest.is_empty() {
            return None;
        }
        if rest.as_bytes()[0] == ESC {
            let end = skip_escape(rest.as_bytes(), 0).max(1);
            self.pos += end;
            return Some(Segment {
                text: &rest[..end],
                width: 0,
            });
        }
        let grapheme = rest.graphemes(true).next()?;
        self.pos += grapheme.len();
        let width = if grapheme.starts_with('\n') || grapheme.starts_with('\r') {
            1
        } else {
            grapheme_width(grapheme)
        };
        Some(Segment {
            text: grapheme,
            width,
        })
    }
}
