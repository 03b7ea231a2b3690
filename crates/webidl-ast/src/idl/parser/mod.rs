//! Recursive-descent WebIDL parser.
//!
//! Every production returns `Ok(Some(node))` when it matched, `Ok(None)` when
//! its leading keyword is absent (the caller tries the next alternative) and
//! `Err` once it has committed and then found malformed input.

mod definitions;
mod members;
mod types;

use crate::ast::{Definition, Program, Trivia};
use crate::error::{ParseError, Result};
use crate::idl::cursor::Cursor;
use crate::idl::lexer::{Lexer, Token, TokenKind};
use crate::options::ParseOptions;

type PResult<T> = std::result::Result<Option<T>, ParseError>;

pub struct Parser {
    cursor: Cursor,
    options: ParseOptions,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, options: ParseOptions) -> Self {
        Self { cursor: Cursor::new(tokens), options }
    }

    pub fn parse_str(input: &str, options: ParseOptions) -> Result<Program> {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize()?;
        tracing::debug!(tokens = tokens.len(), "tokenized WebIDL source");
        let mut parser = Parser::new(tokens, options);
        Ok(parser.parse()?)
    }

    /// Parse every definition up to the end of the token stream.
    pub fn parse(&mut self) -> std::result::Result<Program, ParseError> {
        let mut definitions = Vec::new();

        let trailing = loop {
            let leading = self.trivia();
            let ext_attrs = self.extended_attributes()?;
            let after_attrs = self.trivia();

            match self.definition()? {
                Some(kind) => {
                    definitions.push(Definition { ext_attrs, leading, after_attrs, kind });
                }
                None => {
                    if !ext_attrs.is_empty() {
                        return Err(self.fail("Stray extended attributes"));
                    }
                    break leading;
                }
            }
        };

        if !self.cursor.is_at_end() {
            return Err(self.fail("Unrecognised tokens"));
        }

        tracing::debug!(definitions = definitions.len(), "parsed WebIDL definitions");
        Ok(Program { definitions, trailing })
    }

    // Token helpers. All of them skip (and drop) whitespace first; call
    // `trivia()` beforehand wherever whitespace has to be kept.

    fn ws(&mut self) {
        self.cursor.skip_whitespace(None);
    }

    /// Consume whitespace, keeping it when trivia capture is on.
    fn trivia(&mut self) -> Vec<Trivia> {
        let mut store = Vec::new();
        if self.options.capture_trivia {
            self.cursor.skip_whitespace(Some(&mut store));
        } else {
            self.cursor.skip_whitespace(None);
        }
        store
    }

    fn keyword(&mut self, word: &str) -> bool {
        self.ws();
        self.cursor.consume(TokenKind::Identifier, Some(word)).is_some()
    }

    fn symbol(&mut self, sym: &str) -> bool {
        self.ws();
        self.cursor.consume(TokenKind::Other, Some(sym)).is_some()
    }

    fn identifier(&mut self) -> Option<String> {
        self.ws();
        self.cursor.consume(TokenKind::Identifier, None).map(|t| t.text)
    }

    fn expect_symbol(&mut self, sym: &str, message: &str) -> std::result::Result<(), ParseError> {
        if self.symbol(sym) {
            Ok(())
        } else {
            Err(self.fail(message))
        }
    }

    fn expect_identifier(&mut self, message: &str) -> std::result::Result<String, ParseError> {
        self.identifier().ok_or_else(|| self.fail(message))
    }

    fn fail(&self, message: impl Into<String>) -> ParseError {
        self.cursor.fail(message)
    }
}
