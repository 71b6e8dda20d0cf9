//! Fatal conversion errors.
//!
//! Everything else the converter runs into is recoverable and reported as a
//! warning on stderr; only a section whose output file cannot be named, or
//! whose file another section already claims, stops the run.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConvertError {
    #[error("section '{title}' (line {line}) has no output file mapping")]
    UnmappedSection { title: String, line: usize },

    #[error("section '{title}' (line {line}) would overwrite {file}.md, already written for section '{first}'")]
    SharedOutputFile {
        title: String,
        line: usize,
        file: &'static str,
        first: String,
    },
}
