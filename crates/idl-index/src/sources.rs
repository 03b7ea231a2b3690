//! Loading WebIDL fragments and mapping pipeline errors back to them.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Name used for text read from standard input
pub const STDIN_ORIGIN: &str = "<stdin>";

/// One block of WebIDL source and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub origin: String,
    pub text: String,
}

impl Fragment {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self { origin: origin.into(), text: text.into() }
    }
}

/// Read every path as one fragment, in order. `-` (or an empty list) reads
/// standard input.
pub fn read_fragments(paths: &[PathBuf]) -> Result<Vec<Fragment>> {
    if paths.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    paths.iter().map(|path| read_fragment(path)).collect()
}

pub fn read_fragment(path: &Path) -> Result<Fragment> {
    if path == Path::new("-") {
        return read_stdin();
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read fragment");
    Ok(Fragment::new(path.display().to_string(), text))
}

fn read_stdin() -> Result<Fragment> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text).context("Failed to read standard input")?;
    Ok(Fragment::new(STDIN_ORIGIN, text))
}

/// Concatenate the fragments the way the pipeline sees them.
pub fn combine(fragments: &[Fragment], separator: &str) -> String {
    let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
    webidl_ast::combine_fragments(&texts, separator)
}

/// Translate a line of the combined text into (origin, line in fragment).
pub fn locate<'a>(fragments: &'a [Fragment], separator: &str, line: usize) -> Option<(&'a str, usize)> {
    let separator_lines = separator.matches('\n').count();
    let mut start = 1;
    for fragment in fragments {
        let end = start + fragment.text.matches('\n').count();
        if line <= end {
            return (line >= start).then(|| (fragment.origin.as_str(), line - start + 1));
        }
        start = end + separator_lines;
    }
    None
}

/// Attach the fragment and line an error was reported at.
pub fn with_location(
    err: webidl_ast::Error,
    fragments: &[Fragment],
    separator: &str,
) -> anyhow::Error {
    let context = match locate(fragments, separator, err.line()) {
        Some((origin, line)) => format!("Invalid WebIDL in {} at line {}", origin, line),
        None => "Invalid WebIDL".to_string(),
    };
    anyhow::Error::new(err).context(context)
}
