//! Static section-title → output file table.

use crate::error::ConvertError;

/// Section heading text → output file base name (without `.md`).
const FILE_NAMES: &[(&str, &str)] = &[
    ("Error Handling and Global Library Behavior", "globals"),
    ("Files and File Structure", "files"),
    ("Meshes, Variables and Materials", "objects"),
    ("Meshes and Variables", "objects"),
    ("Multi-Block Objects and Parallel I/O", "parallel"),
    ("Part Assemblies, AMR, Slide Surfaces,", "subsets"),
    ("Calculational and Utility", "utility"),
    ("Optlists", "optlists"),
    ("User Defined (Generic) Data and Objects", "generic"),
    ("JSON Interface to Silo Objects", "json"),
    ("Previously Undocumented Use Conventions", "conventions"),
    ("Fortran Interface", "fortran"),
    ("Python Interface", "python"),
    ("Deprecated Functions", "deprecated"),
    ("Silo Library Header File", "header"),
];

/// Look up the output file base name for a section title.
pub fn file_name(title: &str) -> Option<&'static str> {
    FILE_NAMES
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, name)| *name)
}

/// Like [`file_name`], but an unmapped title is an error. `line` is the
/// 1-based input line of the section header, for the message.
pub fn require_file_name(title: &str, line: usize) -> Result<&'static str, ConvertError> {
    file_name(title).ok_or_else(|| ConvertError::UnmappedSection {
        title: title.to_string(),
        line,
    })
}
