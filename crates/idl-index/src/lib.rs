//! WebIDL index builder
//!
//! Collects WebIDL fragments, runs them through the `webidl-ast` pipeline
//! (parse, merge partials, write, pretty print) and hands the resulting
//! index text to a display surface.

pub mod config;
pub mod errors;
pub mod sources;
pub mod surface;
pub mod theme;

pub use config::{Config, PartialConfig};
pub use sources::Fragment;
pub use surface::{DisplaySurface, FileSurface, StdoutSurface};

/// Re-export common error types
pub use anyhow::{Error, Result};
