//! "Methods and symbols in this section" table.

use crate::link::{self, Target};
use crate::model::Section;
use crate::parser::method::SPACER_BREAKS;

const COLUMNS: usize = 3;

/// Three-column table linking every function of `section`, sorted by name.
pub fn method_index(section: &Section) -> String {
    let mut names: Vec<&str> = section.functions.iter().map(|f| f.name.as_str()).collect();
    names.sort_unstable();

    let mut out = String::new();
    out.push_str("### Methods and symbols in this section\n\n");
    out.push_str("&nbsp;|&nbsp;|&nbsp;\n");
    out.push_str(":---|:---|:---\n");
    for (n, name) in names.iter().enumerate() {
        out.push_str(&link::render(name, Target::InPage));
        out.push(if (n + 1) % COLUMNS == 0 { '\n' } else { '|' });
    }
    out.push_str("\n\n");
    out.push_str("---\n");
    out.push_str(&"<br>".repeat(SPACER_BREAKS));
    out.push('\n');
    out
}
