//! `Description:` block: prose interleaved with tab-delimited tables.
//!
//! Tab count is the only structural signal. With no table open, a line
//! without tabs is prose and a line with N tabs opens a table whose rows all
//! have N tabs. A logical row may be wrapped over several physical lines;
//! lines are joined until their tabs add up to N. The first tab-free line
//! closes the table.
//!
//! Orientation is row-major: each logical line is one table row (the first
//! is the header), so every row has N + 1 cells. Lines are never transposed
//! into columns.

use super::classify::is_header;
use crate::model::Fragment;
use crate::source::LineStream;
use crate::text::{emit_sentences, format_text, normalize_glyphs, Keywords};

const OPTLIST_TITLE: &str = "Optlist options";

/// A table being accumulated from consecutive tabbed lines.
#[derive(Debug)]
struct TabBlock {
    /// tabs per logical row, fixed by the opening line
    shape: usize,
    rows: Vec<Vec<String>>,
}

impl TabBlock {
    fn open(line: &str) -> Self {
        Self {
            shape: count_tabs(line),
            rows: vec![split_cells(line)],
        }
    }

    /// Gather one logical row starting at `j`; returns the next index.
    fn read_row(&mut self, body: &[&str], mut j: usize) -> usize {
        let mut parts: Vec<&str> = Vec::new();
        let mut tabs = 0;
        while tabs < self.shape && j < body.len() {
            parts.push(body[j]);
            tabs += count_tabs(body[j]);
            j += 1;
        }
        let joined = parts.join("\n");
        if tabs != self.shape {
            eprintln!(
                "warning: table row has {} tabs, expected {}: {:?}",
                tabs, self.shape, joined
            );
        }
        self.rows.push(split_cells(&joined.replace('\n', "<br>")));
        j
    }
}

fn count_tabs(line: &str) -> usize {
    line.bytes().filter(|&b| b == b'\t').count()
}

/// Split a row on tabs after trimming surrounding whitespace, keeping edge
/// tabs so empty leading and trailing cells survive.
fn split_cells(row: &str) -> Vec<String> {
    row.trim_matches(|c: char| c.is_whitespace() && c != '\t')
        .split('\t')
        .map(str::to_string)
        .collect()
}

/// Process the block whose `Description:` label sits at `pos`, emphasizing
/// `keywords` throughout. Returns the next position.
pub fn process(lines: &LineStream, pos: usize, keywords: &Keywords, out: &mut Vec<Fragment>) -> usize {
    let start = pos + 1;
    let mut end = start;
    while end < lines.len() && !is_header(lines, end) {
        end += 1;
    }
    let body: Vec<&str> = (start..end).filter_map(|j| lines.get(j)).collect();
    if body.is_empty() {
        return end;
    }

    out.push("* **Description:**\n\n".to_string());

    let mut table: Option<TabBlock> = None;
    let mut first_table = true;
    let mut j = 0;
    while j < body.len() {
        let line = body[j];
        if count_tabs(line) == 0 {
            if let Some(block) = table.take() {
                render_table(out, block.rows, keywords, table_title(first_table, keywords));
                first_table = false;
            }
            emit_sentences(out, line, keywords, "  ");
            j += 1;
        } else if let Some(block) = table.as_mut() {
            j = block.read_row(&body, j);
        } else {
            table = Some(TabBlock::open(line));
            j += 1;
        }
    }
    if let Some(block) = table.take() {
        render_table(out, block.rows, keywords, table_title(first_table, keywords));
    }

    out.push("\n".to_string());
    end
}

fn table_title(first_table: bool, keywords: &Keywords) -> Option<&'static str> {
    let last_arg = keywords.names().last().map(String::as_str);
    (first_table && last_arg == Some("optlist")).then_some(OPTLIST_TITLE)
}

/// Pad ragged rows with empty cells up to the widest row.
fn pad_to_longest(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}

/// Render gathered rows as a pipe table. The first row is the header.
fn render_table(out: &mut Vec<Fragment>, rows: Vec<Vec<String>>, keywords: &Keywords, title: Option<&str>) {
    let rows = pad_to_longest(rows);
    let Some((header, body)) = rows.split_first() else {
        return;
    };

    match title {
        Some(title) => out.push(format!("  **{}:**\n\n", title)),
        None => out.push("  **&nbsp;**\n\n".to_string()),
    }

    let header: Vec<String> = header.iter().map(|c| escape_cell(&normalize_glyphs(c))).collect();
    out.push(format!("  {}\n", header.join("|")));
    out.push(format!("  {}:---\n", ":---|".repeat(header.len().saturating_sub(1))));

    for row in body {
        let cells: Vec<String> = row
            .iter()
            .map(|c| escape_cell(&format_text(c, keywords)))
            .collect();
        out.push(format!("  {}\n", cells.join("|")));
    }
    out.push("\n\n".to_string());
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
