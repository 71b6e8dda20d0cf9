//! `Synopsis:` block: C signature plus the optional Fortran equivalent.

use super::classify::{is_header, Label};
use crate::model::Fragment;
use crate::source::LineStream;
use crate::text::{format_text, Keywords};

/// Tokens on the first line of a regrouped Fortran signature.
const FIRST_GROUP: usize = 4;
/// Tokens on each continuation line.
const NEXT_GROUP: usize = 6;

/// Process the block whose `Synopsis:` label sits at `pos`. Returns the
/// position of the first unconsumed line.
pub fn process(lines: &LineStream, pos: usize, out: &mut Vec<Fragment>) -> usize {
    let mut i = pos + 1;

    out.push("* **C Signature:**\n\n".to_string());
    out.push("  ```\n".to_string());
    if let Some(first) = lines.get(i) {
        out.push(format!("  {}\n", first.trim()));
        i += 1;
    }
    while let Some(line) = lines.get(i) {
        if is_header(lines, i) || Label::of(line).is_some() {
            break;
        }
        out.push(format!("      {}\n", line.trim()));
        i += 1;
    }
    out.push("  ```\n".to_string());

    if Label::at(lines, i) == Some(Label::FortranEquivalent) {
        out.push("\n".to_string());
        i = process_fortran(lines, i + 1, out);
    }

    out.push("\n".to_string());
    i
}

/// Fortran signature: argument tokens re-flowed into fixed-width groups up to
/// the closing `)`, then any postscript lines as normalized text.
fn process_fortran(lines: &LineStream, mut i: usize, out: &mut Vec<Fragment>) -> usize {
    out.push("* **Fortran Signature:**\n\n".to_string());
    out.push("  ```\n".to_string());

    if lines.get(i).map(str::trim_end) == Some("None") {
        out.push("  None\n".to_string());
        out.push("  ```\n".to_string());
        return i + 1;
    }

    let mut tokens: Vec<String> = Vec::new();
    let mut args_done = false;
    while let Some(line) = lines.get(i) {
        if is_header(lines, i) || Label::of(line).is_some() {
            break;
        }
        let line = line.trim_end();
        if args_done {
            out.push(format!("  {}\n", format_text(line.trim(), &Keywords::none())));
        } else {
            tokens.extend(
                line.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            );
            if line.ends_with(')') {
                emit_argument_groups(&tokens, out);
                tokens.clear();
                args_done = true;
                out.push("  ```\n\n".to_string());
            }
        }
        i += 1;
    }

    if !args_done {
        eprintln!(
            "warning: Fortran signature without closing ')' before line {}: {}",
            i + 1,
            tokens.join(", ")
        );
        emit_argument_groups(&tokens, out);
        out.push("  ```\n\n".to_string());
    }
    i
}

fn emit_argument_groups(tokens: &[String], out: &mut Vec<Fragment>) {
    let mut rest = tokens;
    let mut width = FIRST_GROUP;
    let mut indent = "  ";
    while !rest.is_empty() {
        let (group, tail) = rest.split_at(width.min(rest.len()));
        let mut line = format!("{}{}", indent, group.join(", "));
        if !group.last().is_some_and(|t| t.ends_with(')')) {
            line.push(',');
        }
        line.push('\n');
        out.push(line);
        rest = tail;
        width = NEXT_GROUP;
        indent = "     ";
    }
}
