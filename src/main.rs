//! fmtxt2md: convert the plain-text API reference manual into per-section
//! Markdown files for the documentation site.
//!
//! The pipeline runs in strict phases:
//!
//! 1. **Load** the manual into memory and check every section title against
//!    the output file table
//! 2. **Parse** sections, functions and their labeled blocks into fragments
//! 3. **Resolve** `See <Name>` cross-references into links
//! 4. **Emit** one `<name>.md` per section, each with a method index
//!
//! Usage: `fmtxt2md [INPUT] -o docs/ -p _prefix.md`

mod error;
mod link;
mod model;
mod parser;
mod render;
mod resolve;
mod sections;
mod source;
mod text;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix template looked up in a directory given to `-p`, or in the output
/// directory when `-p` is absent.
const PREFIX_FILE: &str = "_prefix.md";

#[derive(Parser)]
#[command(
    name = "fmtxt2md",
    about = "Convert the plain-text API reference manual into per-section Markdown"
)]
struct Cli {
    /// Plain-text manual to convert
    #[arg(default_value = "Chapter2-man_pages2.txt")]
    input: PathBuf,

    /// Output directory for the generated .md files
    #[arg(short = 'o', long, default_value = ".")]
    output: PathBuf,

    /// Prefix template file, or directory containing _prefix.md.
    /// Supports ${name} substitution.
    #[arg(short = 'p', long)]
    prefix: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lines = source::LineStream::load(&cli.input)?;
    parser::check_sections(&lines)
        .with_context(|| format!("cannot convert {}", cli.input.display()))?;

    let mut doc = parser::parse(&lines);
    let names = render::output_names(&doc)?;
    resolve::resolve(&mut doc, &names);

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory: {}", cli.output.display()))?;
    let prefix = resolve_prefix(cli.prefix.as_deref(), &cli.output)?;

    render::emit(&doc, &names, &cli.output, prefix.as_deref())?;
    Ok(())
}

/// Resolve the prefix template from the -p flag: a file, a directory holding
/// `_prefix.md`, or (without -p) `_prefix.md` in the output directory.
fn resolve_prefix(prefix_arg: Option<&str>, output_dir: &Path) -> Result<Option<String>> {
    let candidate = match prefix_arg {
        Some(p) => {
            let path = Path::new(p);
            if path.is_file() {
                return fs::read_to_string(path)
                    .map(Some)
                    .with_context(|| format!("failed to read prefix file: {}", path.display()));
            }
            if !path.is_dir() {
                anyhow::bail!("prefix not found: {}", p);
            }
            path.join(PREFIX_FILE)
        }
        None => output_dir.join(PREFIX_FILE),
    };

    if candidate.is_file() {
        let tpl = fs::read_to_string(&candidate)
            .with_context(|| format!("failed to read prefix file: {}", candidate.display()))?;
        Ok(Some(tpl))
    } else {
        Ok(None)
    }
}
