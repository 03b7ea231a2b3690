use serde::Serialize;
use std::fmt;

/// Whitespace or a comment captured next to a construct so the writer can
/// put it back in front of the same construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Trivia {
    Whitespace(String),
    /// Text after `//`, up to but excluding the line break
    LineComment(String),
    /// Text between `/*` and `*/`
    BlockComment(String),
}

impl fmt::Display for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trivia::Whitespace(ws) => f.write_str(ws),
            Trivia::LineComment(text) => write!(f, "//{}", text),
            Trivia::BlockComment(text) => write!(f, "/*{}*/", text),
        }
    }
}
