//! Cross-reference resolution: rewrites `See <Name>` mentions into links
//! once the whole document is known.
//!
//! Handled forms include `(See DBOpen)`, ``See `DBReadVar` ``,
//! `See "DBMakeMrgtree" on page 196` and `See the description of DBPutQuadmesh`.
//! Names that match no function become `UNKNOWN` links for manual review.

use crate::link::{self, Target};
use crate::model::Document;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

const HDF5_PHRASE: &str = "See HDF5 reference manual";
const HDF5_LINK: &str = "See [HDF5 reference manual](https://docs.hdfgroup.org/hdf5/develop/)";

static RE_SEE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"See (the description of |the write-up of |the documentation for |",
        r"the documentation on |documentation on )?",
        r#"(["`]?)(DB|db)([a-zA-Z0-9_]*)(\(\))?(["`]?)( on page ([0-9-]*))?"#
    ))
    .unwrap()
});

/// Lowercased function name → index of the first section defining it.
fn function_index(doc: &Document) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (idx, section) in doc.sections.iter().enumerate() {
        for func in &section.functions {
            index.entry(func.name.to_lowercase()).or_insert(idx);
        }
    }
    index
}

/// Rewrite every fragment of every section in place. `files[i]` is the
/// output file base name of section `i`.
pub fn resolve(doc: &mut Document, files: &[&str]) {
    let index = function_index(doc);
    for (idx, section) in doc.sections.iter_mut().enumerate() {
        for fragment in section.fragments_mut() {
            if fragment.contains("See") {
                *fragment = resolve_fragment(fragment, idx, &index, files);
            }
        }
    }
}

fn resolve_fragment(
    fragment: &str,
    current: usize,
    index: &HashMap<String, usize>,
    files: &[&str],
) -> String {
    let fragment = fragment.replace(HDF5_PHRASE, HDF5_LINK);
    RE_SEE
        .replace_all(&fragment, |caps: &Captures| {
            let name = format!("{}{}", &caps[3], &caps[4]);
            let target = match index.get(&name.to_lowercase()) {
                Some(&idx) if idx == current => Target::InPage,
                Some(&idx) => files.get(idx).map_or(Target::Unknown, |f| Target::File(f)),
                None => Target::Unknown,
            };
            format!("See {}", link::render(&name, target))
        })
        .into_owned()
}
