//! Where the finished index text goes.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Receives the rendered index
pub trait DisplaySurface {
    fn show(&mut self, text: &str) -> Result<()>;
}

/// Writes the index to standard output
pub struct StdoutSurface;

impl DisplaySurface for StdoutSurface {
    fn show(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes()).context("Failed to write to standard output")?;
        stdout.flush().context("Failed to write to standard output")
    }
}

/// Writes the index to a file, replacing its contents
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySurface for FileSurface {
    fn show(&mut self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// Collects the index in memory
impl DisplaySurface for String {
    fn show(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}
