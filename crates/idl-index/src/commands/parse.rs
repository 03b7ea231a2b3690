//! Parse command implementation

use anyhow::{Context, Result};
use idl_index::errors::print_warning;
use idl_index::sources::{combine, read_fragments, with_location};
use idl_index::{Config, DisplaySurface, StdoutSurface};
use std::path::PathBuf;

/// Print the definitions of the fragments as pretty JSON.
pub fn dump_tree(config: &Config, files: &[PathBuf], merged: bool) -> Result<()> {
    let fragments = read_fragments(files)?;
    let text = combine(&fragments, &config.separator);

    let program = webidl_ast::parse(&text, config.parse_options())
        .map_err(|e| with_location(e, &fragments, &config.separator))?;

    let definitions = if merged {
        let merged = webidl_ast::merge_partials(program.definitions);
        for warning in &merged.warnings {
            print_warning(&warning.to_string());
        }
        merged.definitions
    } else {
        program.definitions
    };

    let mut json =
        serde_json::to_string_pretty(&definitions).context("Failed to serialize definitions")?;
    json.push('\n');
    StdoutSurface.show(&json)
}
