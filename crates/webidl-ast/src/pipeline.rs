//! End-to-end entry points: fragments in, index text out.

use crate::ast::Program;
use crate::error::Result;
use crate::idl::merge::{merge_partials, MergeWarning};
use crate::idl::parser::Parser;
use crate::idl::pretty::pretty_print;
use crate::idl::writer::Writer;
use crate::options::ParseOptions;

/// Stages and dialect used by [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub parse: ParseOptions,
    /// Fold partial definitions into their canonical definition
    pub merge_partials: bool,
    /// Lay the written text out with [`pretty_print`]
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { parse: ParseOptions::default(), merge_partials: true, pretty: true }
    }
}

/// Rendered index text plus the partials that had to be dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub warnings: Vec<MergeWarning>,
}

/// Concatenate source fragments in order, `separator` between each pair.
pub fn combine_fragments<S: AsRef<str>>(fragments: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(fragment.as_ref());
    }
    out
}

pub fn parse(text: &str, options: ParseOptions) -> Result<Program> {
    Parser::parse_str(text, options)
}

/// Parse, merge, write and (optionally) pretty print `text`.
pub fn render(text: &str, options: &RenderOptions) -> Result<Rendered> {
    let program = parse(text, options.parse)?;

    let (definitions, warnings) = if options.merge_partials {
        let merged = merge_partials(program.definitions);
        (merged.definitions, merged.warnings)
    } else {
        (program.definitions, Vec::new())
    };
    tracing::debug!(definitions = definitions.len(), warnings = warnings.len(), "merged definitions");

    let written = Writer::new().write(&definitions);
    let text = if options.pretty { pretty_print(&written) } else { written };
    Ok(Rendered { text, warnings })
}

/// Render fragments joined by newlines.
pub fn render_index<S: AsRef<str>>(fragments: &[S], options: &RenderOptions) -> Result<Rendered> {
    render(&combine_fragments(fragments, "\n"), options)
}

/// Merged, pretty-printed text of `webidl` with the default dialect.
/// Orphan partials are skipped; see [`render`] to inspect them.
pub fn pretty_print_webidl(webidl: &str) -> Result<String> {
    Ok(render(webidl, &RenderOptions::default())?.text)
}
