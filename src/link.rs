//! Markdown links to function headings.
//!
//! Headings are rendered as `` ### `NAME()` ``, which the site generator
//! anchors as the lowercased name.

/// Where a link to a function points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Heading on the same page.
    InPage,
    /// Heading in another output file (base name, without `.md`).
    File(&'a str),
    /// No heading with that name exists.
    Unknown,
}

/// Placeholder target for references nothing resolves to.
pub const UNKNOWN: &str = "UNKNOWN";

pub fn anchor(name: &str) -> String {
    name.to_lowercase()
}

/// `` [`NAME`](target) ``
pub fn render(name: &str, target: Target) -> String {
    match target {
        Target::InPage => format!("[`{}`](#{})", name, anchor(name)),
        Target::File(file) => format!("[`{}`](./{}.md#{})", name, file, anchor(name)),
        Target::Unknown => format!("[`{}`]({})", name, UNKNOWN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_lowercase() {
        assert_eq!(anchor("DBPutUcdmesh"), "dbputucdmesh");
        assert_eq!(anchor("DB_CLOBBER"), "db_clobber");
    }

    #[test]
    fn in_page_link() {
        assert_eq!(render("DBClose", Target::InPage), "[`DBClose`](#dbclose)");
    }

    #[test]
    fn cross_file_link() {
        assert_eq!(
            render("DBClose", Target::File("files")),
            "[`DBClose`](./files.md#dbclose)"
        );
    }

    #[test]
    fn unknown_link() {
        assert_eq!(render("DBNope", Target::Unknown), "[`DBNope`](UNKNOWN)");
    }
}
