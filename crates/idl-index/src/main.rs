//! WebIDL index CLI tool

use clap::Parser;
use idl_index::errors::{print_error, print_error_with_suggestion};
use idl_index::Config;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error_with_suggestion(
                "Failed to load configuration",
                &e,
                "Check the syntax of idl-index.toml or pass another file with --config",
            );
            std::process::exit(1);
        }
    };
    config.merge(cli.dialect.overrides());
    tracing::debug!(?config, "effective configuration");

    let result = match cli.command {
        Commands::Render { files, output, raw, no_merge } => {
            render_index(&config, &files, output.as_deref(), raw, no_merge)
        }
        Commands::Parse { files, merged } => dump_tree(&config, &files, merged),
        Commands::Check { files, strict } => check_fragments(&config, &files, strict),
        Commands::Tokens { file } => list_tokens(&file),
    };

    if let Err(e) = result {
        print_error("Command failed", &e);
        std::process::exit(1);
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    // The binary reports merge warnings itself, so library warnings stay
    // quiet unless asked for.
    match v {
        0 => "idl_index=warn,webidl_ast=error",
        1 => "idl_index=debug,webidl_ast=debug",
        _ => "idl_index=trace,webidl_ast=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "idl_index=warn,webidl_ast=error");
        assert_eq!(directive_for_verbosity(1), "idl_index=debug,webidl_ast=debug");
        assert_eq!(directive_for_verbosity(2), "idl_index=trace,webidl_ast=trace");
        assert_eq!(directive_for_verbosity(9), "idl_index=trace,webidl_ast=trace");
    }
}
