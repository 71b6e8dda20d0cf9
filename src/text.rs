//! Text normalization and sentence splitting.
//!
//! Every prose line, table cell and argument description goes through
//! [`format_text`]. The emphasis sweeps are deliberately coarse; the
//! correction pass at the end undoes the known false positives, so it has to
//! run after all sweeps.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Library identifier prefix (`DBPutUcdmesh`, `DBOpen`, ...).
pub const IDENT_PREFIX: &str = "DB";

/// Acronyms the all-caps sweep marks up but which are not identifiers.
const NOT_IDENTIFIERS: &[&str] = &["HDF4", "HDF5", "PDB"];

static RE_IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(^|\s+){IDENT_PREFIX}([a-zA-Z0-9_]{{3,}})(\(\))?(\s+|[.?!]|$)"
    ))
    .unwrap()
});

static RE_ALL_CAPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s+)([A-Z0-9_]{3,})(\s+|[.?!]|$)").unwrap());

// A word character or closing paren, then `...`, `.`, `?` or `!`, then whitespace.
static RE_SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z0-9_)](?:\.\.\.|\.|\?|!))\s+").unwrap());

const EG: &str = "(e.g. ";
const EG_PLACEHOLDER: &str = "@e@g@@";

/// Identifiers to emphasize wherever they stand alone in prose, typically
/// the argument names of the function being rendered.
#[derive(Debug, Default)]
pub struct Keywords {
    names: Vec<String>,
    patterns: Vec<(Regex, String)>,
}

impl Keywords {
    pub fn new(names: Vec<String>) -> Self {
        let patterns = names
            .iter()
            .filter(|name| !name.is_empty())
            .filter_map(|name| {
                let re = Regex::new(&format!(
                    r"(^|\s+){}(\s+|[.?!]|$)",
                    regex::escape(name)
                ))
                .ok()?;
                Some((re, format!("${{1}}`{}`${{2}}", name.replace('$', "$$"))))
            })
            .collect();
        Self { names, patterns }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Replace typographic quotes and dashes with their ASCII counterparts.
pub fn normalize_glyphs(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{2014}' => '-',
            other => other,
        })
        .collect()
}

/// Normalize glyphs and mark identifiers up as inline code.
pub fn format_text(s: &str, keywords: &Keywords) -> String {
    let mut s = normalize_glyphs(s);

    for (re, replacement) in &keywords.patterns {
        s = re.replace_all(&s, replacement.as_str()).into_owned();
    }

    s = RE_IDENT
        .replace_all(&s, format!("${{1}}`{IDENT_PREFIX}${{2}}${{3}}`${{4}}").as_str())
        .into_owned();

    s = RE_ALL_CAPS
        .replace_all(&s, |caps: &Captures| {
            // digit-only tokens (page numbers, sizes) are not identifiers
            if caps[2].bytes().any(|b| b.is_ascii_uppercase()) {
                format!("{}`{}`{}", &caps[1], &caps[2], &caps[3])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();

    for word in NOT_IDENTIFIERS {
        s = s.replace(&format!("`{word}`"), word);
    }
    s.replace("`NOT`", "**not**")
}

/// Split a raw line into sentences. `(e.g. ` never ends a sentence.
pub fn split_sentences(line: &str) -> Vec<String> {
    let protected = line.replace(EG, EG_PLACEHOLDER);
    let broken = RE_SENTENCE_END.replace_all(&protected, "${1}\n");
    broken
        .trim()
        .replace(EG_PLACEHOLDER, EG)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Emit a prose line one formatted sentence per output line, followed by a
/// blank separator line.
pub fn emit_sentences(out: &mut Vec<String>, line: &str, keywords: &Keywords, indent: &str) {
    for sentence in split_sentences(line) {
        out.push(format!("{}{}\n", indent, format_text(&sentence, keywords).trim()));
    }
    out.push("\n".to_string());
}
