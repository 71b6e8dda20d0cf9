//! Parser: drives the classifiers and block processors over the whole line
//! stream and assembles the [`Document`].

pub mod arguments;
pub mod classify;
pub mod description;
pub mod method;
pub mod returns;
pub mod synopsis;

use crate::error::ConvertError;
use crate::model::Document;
use crate::sections;
use crate::source::LineStream;
use crate::text::{emit_sentences, Keywords};
use classify::{is_function_header, is_header, is_section_header, section_title};
use std::collections::HashMap;

/// Title of the `ordinal`-th (1-based) section header.
fn header_title(line: &str, ordinal: usize) -> String {
    section_title(line).unwrap_or_else(|| format!("Section {}", ordinal))
}

/// Check every section header against the output file table before any
/// conversion work is done. Two distinct titles may not share a file.
pub fn check_sections(lines: &LineStream) -> Result<(), ConvertError> {
    let mut claimed: HashMap<&'static str, String> = HashMap::new();
    let headers = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_section_header(line));
    for (n, (pos, line)) in headers.enumerate() {
        let title = header_title(line, n + 1);
        let file = sections::require_file_name(&title, pos + 1)?;
        match claimed.get(file) {
            Some(first) if *first != title => {
                return Err(ConvertError::SharedOutputFile {
                    title,
                    line: pos + 1,
                    file,
                    first: first.clone(),
                });
            }
            Some(_) => {}
            None => {
                claimed.insert(file, title);
            }
        }
    }
    Ok(())
}

/// Assemble the document model in a single forward pass.
pub fn parse(lines: &LineStream) -> Document {
    let mut doc = Document::default();
    let mut current: Option<usize> = None;
    let mut ordinal = 0;
    let mut i = 0;

    while let Some(line) = lines.get(i) {
        if is_section_header(line) {
            ordinal += 1;
            let (next, idx) = start_section(lines, i, ordinal, &mut doc);
            current = Some(idx);
            i = next;
        } else if is_function_header(lines, i) {
            match current {
                Some(idx) => i = method::process(lines, i, &mut doc.sections[idx]),
                None => {
                    eprintln!(
                        "warning: function {:?} at line {} precedes any section",
                        line,
                        i + 1
                    );
                    i += 1;
                }
            }
        } else {
            eprintln!("warning: unclassified line {}: {:?}", i + 1, line);
            i += 1;
        }
    }

    doc
}

/// Open the section whose header sits at `pos` and consume its introductory
/// prose. Returns the next position and the section's index.
fn start_section(lines: &LineStream, pos: usize, ordinal: usize, doc: &mut Document) -> (usize, usize) {
    let title = header_title(lines.get(pos).unwrap_or_default(), ordinal);
    let idx = doc.open_section(&title, pos + 1);
    let intro = &mut doc.sections[idx].intro;
    intro.push(format!("## {}\n", title));
    intro.push("\n".to_string());

    let mut i = pos + 1;
    while let Some(line) = lines.get(i) {
        if is_header(lines, i) {
            break;
        }
        emit_sentences(intro, line, &Keywords::none(), "");
        i += 1;
    }
    (i, idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANUAL: &str = concat!(
        "1 API Section Meshes and Variables\n",
        "This section covers meshes.\n",
        "DBPutUcdmesh\n",
        "\u{2014}Write a UCD mesh object.\n",
        "Synopsis:\n",
        "int DBPutUcdmesh (DBfile *dbfile, char const *name)\n",
        "Arguments:\n",
        "dbfile\n",
        "Database file pointer.\n",
        "name\n",
        "Name of the mesh.\n",
        "Description:\n",
        "See DBClose for details.\n",
        "Col\tType\tMeaning\n",
        "DBOPT_A\tint\tFirst.\n",
        "DBClose\n",
        "\u{2014}Close a database.\n",
        "2 API Section Optlists\n",
        "Optlists carry options.\n",
        "DBMakeOptlist\n",
        "\u{2014}Allocate an optlist.\n",
    );

    #[test]
    fn assembles_sections_and_functions() {
        let doc = parse(&LineStream::from_text(MANUAL));
        assert_eq!(doc.sections.len(), 2);

        let meshes = &doc.sections[0];
        assert_eq!(meshes.title, "Meshes and Variables");
        assert_eq!(meshes.line, 1);
        assert_eq!(meshes.intro[0], "## Meshes and Variables\n");
        assert!(meshes.intro.concat().contains("This section covers meshes.\n"));
        let names: Vec<_> = meshes.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["DBPutUcdmesh", "DBClose"]);

        let optlists = &doc.sections[1];
        assert_eq!(optlists.title, "Optlists");
        assert_eq!(optlists.functions.len(), 1);
    }

    #[test]
    fn function_with_no_blocks_is_one_entry() {
        let doc = parse(&LineStream::from_text(
            "API Section Optlists\nDBFreeOptlist\n\u{2014}Free an optlist.\n",
        ));
        assert_eq!(doc.sections[0].functions.len(), 1);
        assert_eq!(doc.sections[0].functions[0].name, "DBFreeOptlist");
    }

    #[test]
    fn consecutive_sections_do_not_swallow_each_other() {
        let doc = parse(&LineStream::from_text(
            "1 API Section Optlists\nIntro.\n2 API Section Fortran Interface\nMore.\n",
        ));
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Optlists", "Fortran Interface"]);
    }

    #[test]
    fn untitled_section_gets_ordinal() {
        let doc = parse(&LineStream::from_text("1 API Section Optlists\n2 API Section\n"));
        assert_eq!(doc.sections[1].title, "Section 2");
    }

    #[test]
    fn preamble_is_skipped() {
        let doc = parse(&LineStream::from_text("Front matter\n1 API Section Optlists\n"));
        assert_eq!(doc.sections.len(), 1);
        assert!(!doc.sections[0].intro.concat().contains("Front matter"));
    }

    #[test]
    fn check_accepts_mapped_titles() {
        assert!(check_sections(&LineStream::from_text(MANUAL)).is_ok());
    }

    #[test]
    fn check_rejects_unmapped_title() {
        let lines = LineStream::from_text("1 API Section Optlists\ntext\n2 API Section Bogus Things\n");
        assert_eq!(
            check_sections(&lines),
            Err(ConvertError::UnmappedSection {
                title: "Bogus Things".to_string(),
                line: 3
            })
        );
    }

    #[test]
    fn check_rejects_titles_sharing_a_file() {
        let lines = LineStream::from_text(concat!(
            "1 API Section Meshes, Variables and Materials\n",
            "2 API Section Meshes and Variables\n",
        ));
        assert_eq!(
            check_sections(&lines),
            Err(ConvertError::SharedOutputFile {
                title: "Meshes and Variables".to_string(),
                line: 2,
                file: "objects",
                first: "Meshes, Variables and Materials".to_string(),
            })
        );
    }

    #[test]
    fn check_allows_repeated_title() {
        let lines = LineStream::from_text("1 API Section Optlists\n2 API Section Optlists\n");
        assert!(check_sections(&lines).is_ok());
    }

    #[test]
    fn check_rejects_untitled_section() {
        let lines = LineStream::from_text("API Section\n");
        assert!(matches!(
            check_sections(&lines),
            Err(ConvertError::UnmappedSection { ref title, .. }) if title == "Section 1"
        ));
    }
}
