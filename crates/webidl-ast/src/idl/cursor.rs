use crate::ast::Trivia;
use crate::error::ParseError;
use crate::idl::lexer::{Token, TokenKind};

/// Number of pending tokens quoted in a parse error.
const ERROR_CONTEXT_TOKENS: usize = 5;

/// Saved cursor state for speculative parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    line: usize,
}

/// Read position over a token sequence.
///
/// Productions try alternatives by taking a [`Checkpoint`] before consuming
/// and calling [`Cursor::rewind`] when the alternative does not apply. The
/// line counter only moves when whitespace tokens are consumed, so a rewind
/// restores it together with the position.
pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
    line: usize,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0, line: 1 }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { pos: self.pos, line: self.line }
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.line = checkpoint.line;
    }

    /// Consume the next token if it has `kind` (and `text`, when given).
    /// Identifiers lose one leading `_` escape marker; the comparison with
    /// `text` happens before stripping, so `_interface` is never a keyword.
    pub fn consume(&mut self, kind: TokenKind, text: Option<&str>) -> Option<Token> {
        let token = self.peek()?;
        if token.kind != kind || text.is_some_and(|t| token.text != t) {
            return None;
        }

        let mut token = token.clone();
        self.pos += 1;
        if kind == TokenKind::Identifier {
            if let Some(stripped) = token.text.strip_prefix('_') {
                token.text = stripped.to_string();
            }
        }
        Some(token)
    }

    /// Step back over the most recently consumed token.
    pub fn unconsume(&mut self) {
        if self.pos == 0 {
            return;
        }
        self.pos -= 1;
        if self.tokens[self.pos].kind == TokenKind::Whitespace {
            self.line -= self.tokens[self.pos].newlines();
        }
    }

    /// Consume every contiguous whitespace token. The consumed text is
    /// returned as one whitespace token; with a collector it is also split
    /// into classified [`Trivia`] pieces.
    pub fn skip_whitespace(&mut self, collect: Option<&mut Vec<Trivia>>) -> Option<Token> {
        let mut text = String::new();
        while let Some(token) = self.tokens.get(self.pos) {
            if token.kind != TokenKind::Whitespace {
                break;
            }
            text.push_str(&token.text);
            self.line += token.newlines();
            self.pos += 1;
        }

        if text.is_empty() {
            return None;
        }
        if let Some(store) = collect {
            classify_trivia(&text, store);
        }
        Some(Token::new(TokenKind::Whitespace, text))
    }

    /// Build the error for the current position; callers return it.
    pub fn fail(&self, message: impl Into<String>) -> ParseError {
        let pending: Vec<Token> =
            self.tokens[self.pos..].iter().take(ERROR_CONTEXT_TOKENS).cloned().collect();
        let input = pending.iter().map(|t| t.text.as_str()).collect();
        ParseError { message: message.into(), line: self.line, input, tokens: pending }
    }
}

/// Split a whitespace run into blanks, line comments and block comments.
fn classify_trivia(mut text: &str, store: &mut Vec<Trivia>) {
    while !text.is_empty() {
        if let Some(rest) = text.strip_prefix("//") {
            let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
            store.push(Trivia::LineComment(rest[..end].to_string()));
            text = &rest[end..];
        } else if let Some(rest) = text.strip_prefix("/*") {
            let end = rest.find("*/").unwrap_or(rest.len());
            store.push(Trivia::BlockComment(rest[..end].to_string()));
            text = rest.get(end + 2..).unwrap_or("");
        } else {
            let end = text.find(|c: char| !matches!(c, '\t' | '\n' | '\r' | ' ')).unwrap_or(text.len());
            // Anything else would have been rejected by the lexer; keep it verbatim.
            let end = if end == 0 { text.len() } else { end };
            store.push(Trivia::Whitespace(text[..end].to_string()));
            text = &text[end..];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idl::lexer::tokenize;

    fn cursor(input: &str) -> Cursor {
        Cursor::new(tokenize(input).unwrap())
    }

    #[test]
    fn test_consume_matches_kind_and_text() {
        let mut c = cursor("interface Foo");
        assert!(c.consume(TokenKind::Identifier, Some("dictionary")).is_none());
        assert_eq!(c.consume(TokenKind::Identifier, Some("interface")).unwrap().text, "interface");
        assert!(c.consume(TokenKind::Identifier, None).is_none());
        c.skip_whitespace(None);
        assert_eq!(c.consume(TokenKind::Identifier, None).unwrap().text, "Foo");
        assert!(c.is_at_end());
    }

    #[test]
    fn test_consume_strips_escape_marker() {
        let mut c = cursor("_interface");
        assert!(c.consume(TokenKind::Identifier, Some("interface")).is_none());
        assert_eq!(c.consume(TokenKind::Identifier, None).unwrap().text, "interface");
    }

    #[test]
    fn test_skip_whitespace_counts_lines() {
        let mut c = cursor("a\n\n  b");
        c.consume(TokenKind::Identifier, None);
        let ws = c.skip_whitespace(None).unwrap();
        assert_eq!(ws.text, "\n\n  ");
        assert_eq!(c.line(), 3);
        assert!(c.skip_whitespace(None).is_none());
    }

    #[test]
    fn test_checkpoint_restores_line() {
        let mut c = cursor("a\nb\nc");
        let start = c.checkpoint();
        c.consume(TokenKind::Identifier, None);
        c.skip_whitespace(None);
        c.consume(TokenKind::Identifier, None);
        c.skip_whitespace(None);
        assert_eq!(c.line(), 3);
        c.rewind(start);
        assert_eq!(c.line(), 1);
        assert_eq!(c.peek().unwrap().text, "a");
    }

    #[test]
    fn test_unconsume_steps_back() {
        let mut c = cursor("- x");
        c.consume(TokenKind::Other, Some("-")).unwrap();
        c.unconsume();
        assert_eq!(c.peek().unwrap().text, "-");
    }

    #[test]
    fn test_collects_trivia() {
        let mut c = cursor("  // note\n/* block */\tx");
        let mut store = Vec::new();
        c.skip_whitespace(Some(&mut store));
        assert_eq!(
            store,
            vec![
                Trivia::Whitespace("  ".to_string()),
                Trivia::LineComment(" note".to_string()),
                Trivia::Whitespace("\n".to_string()),
                Trivia::BlockComment(" block ".to_string()),
                Trivia::Whitespace("\t".to_string()),
            ]
        );
        assert_eq!(c.line(), 2);
    }

    #[test]
    fn test_fail_reports_pending_tokens() {
        let mut c = cursor("foo bar baz qux quux corge");
        c.consume(TokenKind::Identifier, None);
        let err = c.fail("Something broke");
        assert_eq!(err.message, "Something broke");
        assert_eq!(err.line, 1);
        assert_eq!(err.tokens.len(), 5);
        assert_eq!(err.input, " bar baz ");
    }
}
