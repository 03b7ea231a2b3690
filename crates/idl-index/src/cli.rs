//! CLI argument parsing

use clap::{ArgAction, Args, Parser, Subcommand};
use idl_index::PartialConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "idl-index")]
#[command(version, about = "Merged, pretty-printed WebIDL index builder", long_about = None)]
#[command(after_help = "Use 'idl-index <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./idl-index.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub dialect: DialectArgs,
}

/// Grammar switches; each flag overrides the configuration file
#[derive(Args, Debug, Default)]
pub struct DialectArgs {
    /// Accept `class` as an alias of `interface`
    #[arg(long, global = true)]
    pub allow_class: bool,

    /// Accept `extends` for inheritance
    #[arg(long, global = true)]
    pub allow_extends: bool,

    /// Accept typedefs inside interface bodies
    #[arg(long, global = true)]
    pub nested_typedefs: bool,

    /// Keep comments from the sources
    #[arg(long, global = true)]
    pub keep_comments: bool,
}

impl DialectArgs {
    /// Flags that were given, as a configuration layer.
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            allow_class: self.allow_class.then_some(true),
            allow_extends: self.allow_extends.then_some(true),
            allow_nested_typedefs: self.nested_typedefs.then_some(true),
            capture_trivia: self.keep_comments.then_some(true),
            ..PartialConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the merged, pretty-printed index
    #[command(visible_alias = "build")]
    Render {
        /// WebIDL fragments, in order (`-` or none reads stdin)
        files: Vec<PathBuf>,

        /// Write the index to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip pretty printing
        #[arg(long)]
        raw: bool,

        /// Keep partial definitions separate
        #[arg(long)]
        no_merge: bool,
    },

    /// Dump the syntax tree as JSON
    Parse {
        /// WebIDL fragments, in order (`-` or none reads stdin)
        files: Vec<PathBuf>,

        /// Merge partial definitions before dumping
        #[arg(short, long)]
        merged: bool,
    },

    /// Check that fragments parse and merge cleanly
    #[command(visible_alias = "validate")]
    Check {
        /// WebIDL fragments, in order (`-` or none reads stdin)
        files: Vec<PathBuf>,

        /// Treat dropped partial definitions as errors
        #[arg(long)]
        strict: bool,
    },

    /// List the tokens of a file
    Tokens {
        /// WebIDL file (`-` reads stdin)
        file: PathBuf,
    },
}
