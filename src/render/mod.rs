//! Emitter: one Markdown file per section.

pub mod index;

use crate::error::ConvertError;
use crate::model::{Document, Section};
use crate::sections;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Output file base name of every section, in document order.
pub fn output_names(doc: &Document) -> Result<Vec<&'static str>, ConvertError> {
    doc.sections
        .iter()
        .map(|s| sections::require_file_name(&s.title, s.line))
        .collect()
}

/// Section intro, the method index, then every function in encounter order.
pub fn render_section(section: &Section) -> String {
    let mut out = section.intro.concat();
    out.push_str(&index::method_index(section));
    for func in &section.functions {
        out.push_str(&func.fragments.concat());
    }
    out
}

/// Write every section to `<output_dir>/<name>.md`, prefixed by `prefix`
/// with `${name}` substituted. Returns the paths written.
pub fn emit(
    doc: &Document,
    names: &[&str],
    output_dir: &Path,
    prefix: Option<&str>,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (section, name) in doc.sections.iter().zip(names) {
        let mut output = String::new();
        if let Some(tpl) = prefix {
            output.push_str(&tpl.replace("${name}", name));
            output.push('\n');
        }
        output.push_str(&render_section(section));

        let path = output_dir.join(format!("{}.md", name));
        fs::write(&path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        let mut doc = Document::default();
        let idx = doc.open_section("Optlists", 1);
        let section = &mut doc.sections[idx];
        section.intro.push("## Optlists\n".into());
        section.open_function("DBMakeOptlist").fragments.push("### `DBMakeOptlist()`\n\n".into());
        section.open_function("DBAddOption").fragments.push("### `DBAddOption()`\n\n".into());
        doc
    }

    #[test]
    fn names_follow_table() {
        assert_eq!(output_names(&doc()).unwrap(), ["optlists"]);
    }

    #[test]
    fn unmapped_section_fails() {
        let mut doc = doc();
        doc.open_section("Mystery", 7);
        assert!(matches!(
            output_names(&doc),
            Err(ConvertError::UnmappedSection { line: 7, .. })
        ));
    }

    #[test]
    fn intro_then_index_then_functions() {
        let doc = doc();
        let out = render_section(&doc.sections[0]);
        let intro = out.find("## Optlists").unwrap();
        let index = out.find("### Methods and symbols").unwrap();
        let make = out.find("### `DBMakeOptlist()`").unwrap();
        let add = out.find("### `DBAddOption()`").unwrap();
        assert!(intro < index && index < make && make < add);
        // the index itself is alphabetical
        assert!(out.find("[`DBAddOption`]").unwrap() < out.find("[`DBMakeOptlist`]").unwrap());
    }

    #[test]
    fn emit_writes_prefixed_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let doc = doc();
        let written = emit(&doc, &["optlists"], dir.path(), Some("---\ntitle: ${name}\n---")).unwrap();
        assert_eq!(written, [dir.path().join("optlists.md")]);
        let contents = fs::read_to_string(dir.path().join("optlists.md")).unwrap();
        assert!(contents.starts_with("---\ntitle: optlists\n---\n## Optlists\n"));
    }
}
