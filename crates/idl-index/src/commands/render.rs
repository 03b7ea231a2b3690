//! Render command implementation

use anyhow::Result;
use colored::*;
use idl_index::errors::print_warning;
use idl_index::sources::{combine, read_fragments, with_location};
use idl_index::{Config, DisplaySurface, FileSurface, StdoutSurface};
use std::path::{Path, PathBuf};

pub fn render_index(
    config: &Config,
    files: &[PathBuf],
    output: Option<&Path>,
    raw: bool,
    no_merge: bool,
) -> Result<()> {
    let fragments = read_fragments(files)?;
    let text = combine(&fragments, &config.separator);

    let mut options = config.render_options();
    if raw {
        options.pretty = false;
    }
    if no_merge {
        options.merge_partials = false;
    }

    let rendered = webidl_ast::render(&text, &options)
        .map_err(|e| with_location(e, &fragments, &config.separator))?;
    for warning in &rendered.warnings {
        print_warning(&warning.to_string());
    }

    let mut index = rendered.text;
    if !index.is_empty() && !index.ends_with('\n') {
        index.push('\n');
    }

    match output {
        Some(path) => {
            let mut surface = FileSurface::new(path);
            surface.show(&index)?;
            eprintln!(
                "{} Wrote IDL index for {} fragment(s) to {}",
                "✓".green().bold(),
                fragments.len(),
                path.display()
            );
        }
        None => StdoutSurface.show(&index)?,
    }

    Ok(())
}
