use crate::idl::lexer::Token;
use std::fmt;

/// Position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize, // Byte offset
    pub line: usize,   // Line number (1-based)
    pub column: usize, // Column number (1-based)
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Lexer errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Token stream not progressing: unexpected character {ch:?} at {pos}")]
    UnexpectedChar { ch: char, pos: Position },
}

/// Parser error: the first failure of a committed production.
///
/// `input` is the concatenated text of the next few pending tokens and
/// `tokens` holds the same tokens for programmatic inspection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}, line {line} (tokens: '{input}')")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub input: String,
    pub tokens: Vec<Token>,
}

/// Errors surfaced by the top-level entry points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Line the failure was reported on (1-based).
    pub fn line(&self) -> usize {
        match self {
            Error::Lex(LexError::UnexpectedChar { pos, .. }) => pos.line,
            Error::Parse(e) => e.line,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
