//! Block classifiers: pure predicates over the line stream.

use crate::source::LineStream;
use crate::text::normalize_glyphs;
use regex::Regex;
use std::sync::LazyLock;

/// Glyph that starts the summary line under a function header.
pub const FUNCTION_MARKER: char = '\u{2014}';

static RE_SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\s*API Section\s*(.*)").unwrap());

/// True when `line` opens a new API section: `<number?> API Section <title?>`.
pub fn is_section_header(line: &str) -> bool {
    RE_SECTION_HEADER.is_match(line)
}

/// True when the line *after* `pos` starts with the marker glyph. The header
/// line itself carries no marker.
pub fn is_function_header(lines: &LineStream, pos: usize) -> bool {
    lines
        .get(pos + 1)
        .is_some_and(|next| next.starts_with(FUNCTION_MARKER))
}

/// True when `pos` starts a function or a section, i.e. ends any open block.
pub fn is_header(lines: &LineStream, pos: usize) -> bool {
    is_function_header(lines, pos) || lines.get(pos).is_some_and(is_section_header)
}

/// Display title for a section header line, or `None` when the header has
/// no trailing text.
pub fn section_title(line: &str) -> Option<String> {
    let caps = RE_SECTION_HEADER.captures(line)?;
    let title = normalize_glyphs(caps.get(1)?.as_str()).trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Labels that open a block inside a function entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Synopsis,
    FortranEquivalent,
    Arguments,
    Returns,
    Description,
}

impl Label {
    /// Resolve the label of a line. Labels sit alone on their line.
    pub fn of(line: &str) -> Option<Label> {
        match line.trim_end() {
            "Synopsis:" => Some(Label::Synopsis),
            "Fortran Equivalent:" => Some(Label::FortranEquivalent),
            "Arguments:" => Some(Label::Arguments),
            "Returns:" => Some(Label::Returns),
            "Description:" => Some(Label::Description),
            _ => None,
        }
    }

    pub fn at(lines: &LineStream, pos: usize) -> Option<Label> {
        lines.get(pos).and_then(Label::of)
    }
}
