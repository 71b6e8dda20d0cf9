//! Line source: the whole manual, loaded once, as an immutable line vector.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Ordered, 0-indexed input lines. Line terminators are not included.
#[derive(Debug, Default)]
pub struct LineStream {
    lines: Vec<String>,
}

impl LineStream {
    /// Read and decode the input file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::from_text(&decode_text(&bytes)))
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, pos: usize) -> Option<&str> {
        self.lines.get(pos).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Decode input bytes: UTF-8 first (BOM tolerated), otherwise Windows-1252,
/// which is what older manual exports use for their curly quotes.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
