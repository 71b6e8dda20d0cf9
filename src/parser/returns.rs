//! `Returns:` block.

use super::classify::{is_header, Label};
use crate::model::Fragment;
use crate::source::LineStream;
use crate::text::{emit_sentences, Keywords};

pub fn process(lines: &LineStream, pos: usize, out: &mut Vec<Fragment>) -> usize {
    let mut i = pos + 1;
    let mut returned: Vec<&str> = Vec::new();
    while let Some(line) = lines.get(i) {
        if is_header(lines, i) || Label::of(line) == Some(Label::Description) {
            break;
        }
        let stripped = line.trim();
        if !stripped.is_empty() && !stripped.to_lowercase().starts_with("none") {
            returned.push(line);
        }
        i += 1;
    }

    out.push("* **Returned value:**\n\n".to_string());
    if returned.is_empty() {
        out.push("  void".to_string());
    }
    for line in returned {
        emit_sentences(out, line, &Keywords::none(), "  ");
    }
    out.push("\n\n".to_string());
    i
}
