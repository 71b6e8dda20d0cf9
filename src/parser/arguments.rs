//! `Arguments:` block: alternating name/description lines rendered as a
//! two-column table.

use super::classify::{is_header, Label};
use crate::model::Fragment;
use crate::source::LineStream;
use crate::text::{format_text, Keywords};

/// Description cell for a name with no description line after it.
const MISSING_DESCRIPTION: &str = "ARGS PROBLEM";

/// Process the block whose `Arguments:` label sits at `pos`. Returns the
/// next position and the argument names, in order.
pub fn process(lines: &LineStream, pos: usize, out: &mut Vec<Fragment>) -> (usize, Keywords) {
    let mut i = pos + 1;
    let mut entries: Vec<&str> = Vec::new();
    while let Some(line) = lines.get(i) {
        if is_header(lines, i) || matches!(Label::of(line), Some(Label::Returns | Label::Description)) {
            break;
        }
        if !line.trim().is_empty() {
            entries.push(line.trim());
        }
        i += 1;
    }

    out.push("* **Arguments:**\n\n".to_string());
    if entries.len() < 2 {
        out.push("  `None`\n\n".to_string());
        return (i, Keywords::none());
    }

    if entries.len() % 2 != 0 {
        eprintln!(
            "warning: odd number of argument lines before line {}: {:?}",
            i + 1,
            entries
        );
    }

    // non-breaking spaces keep the name column from collapsing
    out.push("  Arg&nbsp;name | Description\n".to_string());
    out.push("  :---|:---\n".to_string());

    let keywords = Keywords::new(
        entries
            .chunks_exact(2)
            .map(|pair| pair[0].to_string())
            .collect(),
    );
    for pair in entries.chunks(2) {
        let description = match pair.get(1) {
            Some(desc) => format_text(desc, &keywords),
            None => MISSING_DESCRIPTION.to_string(),
        };
        out.push(format!("  `{}` | {}\n", pair[0], description));
    }
    out.push("\n\n".to_string());

    (i, keywords)
}
