//! Function entries: header, summary, then labeled blocks until the next
//! header.

use super::classify::{is_header, Label, FUNCTION_MARKER};
use super::{arguments, description, returns, synopsis};
use crate::model::Section;
use crate::source::LineStream;
use crate::text::{emit_sentences, format_text, Keywords};

/// `<br>` tags in the spacer after each entry.
pub const SPACER_BREAKS: usize = 40;

/// Process the function whose header sits at `pos` into `section`. Returns
/// the position of the next header (or end of input).
pub fn process(lines: &LineStream, pos: usize, section: &mut Section) -> usize {
    let name = lines.get(pos).unwrap_or_default().trim_end();
    let summary = lines.get(pos + 1).unwrap_or_default();
    let summary = summary.strip_prefix(FUNCTION_MARKER).unwrap_or(summary).trim();

    let out = &mut section.open_function(name).fragments;
    out.push(format!("### `{}()`\n\n", name));
    out.push(format!(
        "* **Summary:** {}\n\n",
        format_text(summary, &Keywords::none())
    ));

    let mut i = pos + 2;
    let mut keywords = Keywords::none();
    while i < lines.len() && !is_header(lines, i) {
        i = match Label::at(lines, i) {
            Some(Label::Synopsis) => synopsis::process(lines, i, out),
            Some(Label::Arguments) => {
                let (next, names) = arguments::process(lines, i, out);
                keywords = names;
                next
            }
            Some(Label::Returns) => returns::process(lines, i, out),
            Some(Label::Description) => description::process(lines, i, &keywords, out),
            Some(Label::FortranEquivalent) | None => {
                let line = lines.get(i).unwrap_or_default();
                eprintln!(
                    "warning: unclassified line {} in {}: {:?}",
                    i + 1,
                    name,
                    line
                );
                emit_sentences(out, line, &keywords, "  ");
                i + 1
            }
        };
    }

    out.push("---\n".to_string());
    out.push("<br>".repeat(SPACER_BREAKS));
    out.push("\n".to_string());
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> (usize, Section) {
        let lines = LineStream::from_text(text);
        let mut section = Section::default();
        let next = process(&lines, 0, &mut section);
        (next, section)
    }

    #[test]
    fn header_and_summary_only() {
        let (next, section) = run("DBClose\n\u{2014}Close a Silo database.\n");
        assert_eq!(next, 2);
        assert_eq!(section.functions.len(), 1);
        let entry = &section.functions[0];
        assert_eq!(entry.name, "DBClose");
        assert_eq!(entry.fragments[0], "### `DBClose()`\n\n");
        assert_eq!(entry.fragments[1], "* **Summary:** Close a Silo database.\n\n");
        assert_eq!(entry.fragments[2], "---\n");
        assert_eq!(entry.fragments[3], "<br>".repeat(40));
    }

    #[test]
    fn all_blocks() {
        let (next, section) = run(concat!(
            "DBClose\n",
            "\u{2014}Close a Silo database.\n",
            "Synopsis:\n",
            "int DBClose (DBfile *dbfile)\n",
            "Fortran Equivalent:\n",
            "integer function dbclose(dbid)\n",
            "Arguments:\n",
            "dbfile\n",
            "Database file pointer.\n",
            "Returns:\n",
            "DBClose returns zero on success and -1 on failure.\n",
            "Description:\n",
            "The dbfile is closed.\n",
            "DBOpen\n",
            "\u{2014}Open a database.\n",
        ));
        assert_eq!(next, 13);
        let out = section.functions[0].fragments.concat();
        assert!(out.contains("* **C Signature:**"));
        assert!(out.contains("  integer function dbclose(dbid)\n"));
        assert!(out.contains("  `dbfile` | Database file pointer.\n"));
        assert!(out.contains("* **Returned value:**"));
        assert!(out.contains("  The `dbfile` is closed.\n"));
        assert!(!out.contains("DBOpen"));
    }

    #[test]
    fn unclassified_lines_are_kept() {
        let (_, section) = run("DBClose\n\u{2014}Close.\nStray text here.\n");
        let out = section.functions[0].fragments.concat();
        assert!(out.contains("  Stray text here.\n"));
    }

    #[test]
    fn argument_names_reach_description_across_blocks() {
        let (_, section) = run(concat!(
            "DBPutUcdmesh\n",
            "\u{2014}Write a UCD mesh object.\n",
            "Arguments:\n",
            "ncomps\n",
            "Number of components.\n",
            "nels\n",
            "Number of elements.\n",
            "Returns:\n",
            "Zero on success.\n",
            "Description:\n",
            "ncomps gives the number of components.\n",
        ));
        let out = section.functions[0].fragments.concat();
        assert!(out.contains("  `ncomps` gives the number of components.\n"));
    }
}
