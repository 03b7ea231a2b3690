//! Check command implementation

use anyhow::{bail, Result};
use colored::*;
use idl_index::errors::print_warning;
use idl_index::sources::{combine, read_fragments, with_location};
use idl_index::{theme, Config};
use std::path::PathBuf;
use webidl_ast::Definition;

pub fn check_fragments(config: &Config, files: &[PathBuf], strict: bool) -> Result<()> {
    let fragments = read_fragments(files)?;
    let text = combine(&fragments, &config.separator);

    let program = webidl_ast::parse(&text, config.parse_options())
        .map_err(|e| with_location(e, &fragments, &config.separator))?;

    println!("\n{}\n", "Definitions".bold().underline());
    for def in &program.definitions {
        println!("  {}", describe(def));
    }

    let partials = program.definitions.iter().filter(|d| d.is_partial()).count();
    let merged = webidl_ast::merge_partials(program.definitions);
    for warning in &merged.warnings {
        print_warning(&warning.to_string());
    }

    println!();
    println!(
        "{} {} fragment(s), {} definition(s) after merging {} partial(s)",
        theme::info("→"),
        fragments.len(),
        merged.definitions.len(),
        partials - merged.warnings.len()
    );

    if strict && !merged.warnings.is_empty() {
        bail!("{} partial definition(s) could not be merged", merged.warnings.len());
    }

    println!("{} {}", "✓".green().bold(), theme::success("All fragments are valid"));
    Ok(())
}

fn describe(def: &Definition) -> String {
    let mut line = String::new();
    if def.is_partial() {
        line.push_str(&format!("{} ", theme::partial()));
    }
    line.push_str(&format!("{} {}", theme::keyword(def.keyword()), theme::name(def.name())));
    if let Some(base) = def.inheritance() {
        line.push_str(&format!(" : {}", base));
    }
    if let Some(members) = def.members() {
        line.push_str(&format!(" ({} members)", members.len()).dimmed().to_string());
    }
    line
}
