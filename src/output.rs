//! Turning laid-out boxes into text and writing it to the terminal.

use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::ExecutableCommand;
use crossterm::style::Print;
use tracing::debug;

use crate::access::{ChainAccess, TreeAccess};
use crate::chain::layout_chain;
use crate::config::RenderConfig;
use crate::layout::TextBox;
use crate::style::Style;
use crate::text::skip_escape;
use crate::tree::layout_tree;

/// The box's rows with trailing blanks removed, ready to print.
pub fn to_lines(text_box: &TextBox) -> Vec<String> {
    let mut lines: Vec<String> = text_box
        .lines()
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Paints the content cells of `line`, leaving connector glyphs alone.
///
/// Content and structure are told apart by glyph only: box-drawing
/// characters, arrows, `|` and blanks are structure, everything else is
/// content. Blanks between two content cells stay inside the painted run.
///
/// The style's reset also ends any colour already open on the line, such as
/// a node background, so whatever was open before a run is reopened after it.
pub fn highlight_content(line: &str, style: &Style) -> String {
    let mut out = String::with_capacity(line.len() + style.open().len() + style.reset().len());
    let mut run = String::new();
    let mut gap = String::new();
    let mut active = String::new();
    let bytes = line.as_bytes();
    let mut pos = 0;

    while pos < line.len() {
        if bytes[pos] == 0x1B {
            let end = skip_escape(bytes, pos).max(pos + 1);
            let escape = &line[pos..end];
            if run.is_empty() {
                out.push_str(escape);
                track_escapes(&mut active, escape);
            } else {
                gap.push_str(escape);
            }
            pos = end;
            continue;
        }
        let Some(ch) = line[pos..].chars().next() else {
            break;
        };
        pos += ch.len_utf8();

        if ch == ' ' {
            if run.is_empty() {
                out.push(ch);
            } else {
                gap.push(ch);
            }
        } else if is_structural(ch) {
            flush_run(&mut out, &mut run, style, &active);
            track_escapes(&mut active, &gap);
            out.push_str(&gap);
            gap.clear();
            out.push(ch);
        } else {
            track_escapes(&mut active, &gap);
            run.push_str(&gap);
            gap.clear();
            run.push(ch);
        }
    }
    flush_run(&mut out, &mut run, style, &active);
    out.push_str(&gap);
    out
}

fn flush_run(out: &mut String, run: &mut String, style: &Style, active: &str) {
    if !run.is_empty() {
        out.push_str(&style.paint(run));
        out.push_str(active);
        run.clear();
    }
}

/// Records the escapes in `text` that are still in effect after it.
fn track_escapes(active: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('\x1b') {
        let start = pos + offset;
        let end = skip_escape(bytes, start).max(start + 1);
        match &text[start..end] {
            "\x1b[0m" | "\x1b[m" => active.clear(),
            escape => active.push_str(escape),
        }
        pos = end;
    }
}

fn is_structural(ch: char) -> bool {
    matches!(ch, '\u{2500}'..='\u{257F}' | '\u{2190}'..='\u{21FF}' | '|') || ch.is_whitespace()
}

/// Lays out a tree and returns it as printable text.
pub fn format_tree<N, A>(root: &N, access: &A, config: &RenderConfig) -> Result<String>
where
    N: ?Sized,
    A: TreeAccess<N> + ?Sized,
{
    let text_box = layout_tree(root, access, config)?;
    let start = access.start_message(root)?;
    Ok(finish(&text_box, start, config))
}

/// Lays out a chain and returns it as printable text.
pub fn format_chain<N, A>(head: &N, access: &A, config: &RenderConfig) -> Result<String>
where
    N: ?Sized,
    A: ChainAccess<N> + ?Sized,
{
    let text_box = layout_chain(head, access, config)?;
    let start = access.start_message(head)?;
    Ok(finish(&text_box, start, config))
}

fn finish(text_box: &TextBox, start_message: Option<String>, config: &RenderConfig) -> String {
    let mut lines = to_lines(text_box);
    if let Some(style) = &config.content_style {
        lines = lines
            .iter()
            .map(|line| highlight_content(line, style))
            .collect();
    }
    if let Some(message) = start_message {
        lines.insert(0, message);
    }
    lines.join("\n")
}

/// Prints a tree to stdout.
pub fn print_tree<N, A>(root: &N, access: &A, config: &RenderConfig) -> Result<()>
where
    N: ?Sized,
    A: TreeAccess<N> + ?Sized,
{
    write_out(format_tree(root, access, config)?)
}

/// Prints a chain to stdout.
pub fn print_chain<N, A>(head: &N, access: &A, config: &RenderConfig) -> Result<()>
where
    N: ?Sized,
    A: ChainAccess<N> + ?Sized,
{
    write_out(format_chain(head, access, config)?)
}

fn write_out(text: String) -> Result<()> {
    debug!(bytes = text.len(), "writing diagram");
    let mut stdout = stdout();
    stdout.execute(Print(text))?.execute(Print('\n'))?;
    stdout.flush()?;
    Ok(())
}
