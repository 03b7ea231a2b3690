use crate::error::{LexError, Position};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Float,
    Integer,
    Identifier,
    String,
    Whitespace,
    Other,
}

/// A lexeme and its kind. Whitespace tokens hold the exact source span,
/// comments included, so nothing is lost between tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn newlines(&self) -> usize {
        self.text.matches('\n').count()
    }
}

pub struct Lexer {
    input: Vec<char>,
    current: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self { input: input.chars().collect(), current: 0, offset: 0, line: 1, column: 1 }
    }

    /// Split the input into tokens. Rules are tried in a fixed priority order
    /// at every offset: float, integer, identifier, string, whitespace, other.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let rules: [(TokenKind, fn(&Self) -> usize); 5] = [
            (TokenKind::Float, Self::match_float),
            (TokenKind::Integer, Self::match_integer),
            (TokenKind::Identifier, Self::match_identifier),
            (TokenKind::String, Self::match_string),
            (TokenKind::Whitespace, Self::match_whitespace),
        ];

        for (kind, rule) in rules {
            let len = rule(self);
            if len > 0 {
                return Ok(self.take(kind, len));
            }
        }

        match self.current_char() {
            Some(ch) if Self::is_other(ch) => Ok(self.take(TokenKind::Other, 1)),
            Some(ch) => Err(LexError::UnexpectedChar { ch, pos: self.current_position() }),
            None => unreachable!("next_token called at end of input"),
        }
    }

    // -?(([0-9]+\.[0-9]*|[0-9]*\.[0-9]+)([Ee][-+]?[0-9]+)?|[0-9]+[Ee][-+]?[0-9]+)
    fn match_float(&self) -> usize {
        let mut i = self.current;
        if self.char_at(i) == Some('-') {
            i += 1;
        }
        let int_digits = self.count_while(i, |c| c.is_ascii_digit());
        i += int_digits;

        if self.char_at(i) == Some('.') {
            let frac_digits = self.count_while(i + 1, |c| c.is_ascii_digit());
            if int_digits == 0 && frac_digits == 0 {
                return 0;
            }
            i += 1 + frac_digits;
            i += self.match_exponent(i);
            return i - self.current;
        }

        if int_digits == 0 {
            return 0;
        }
        match self.match_exponent(i) {
            0 => 0,
            exp => i + exp - self.current,
        }
    }

    fn match_exponent(&self, start: usize) -> usize {
        let mut i = start;
        if !matches!(self.char_at(i), Some('e' | 'E')) {
            return 0;
        }
        i += 1;
        if matches!(self.char_at(i), Some('-' | '+')) {
            i += 1;
        }
        let digits = self.count_while(i, |c| c.is_ascii_digit());
        if digits == 0 {
            return 0;
        }
        i + digits - start
    }

    // -?(0([Xx][0-9A-Fa-f]+|[0-7]*)|[1-9][0-9]*)
    fn match_integer(&self) -> usize {
        let mut i = self.current;
        if self.char_at(i) == Some('-') {
            i += 1;
        }
        match self.char_at(i) {
            Some('0') => {
                i += 1;
                if matches!(self.char_at(i), Some('x' | 'X')) {
                    let hex = self.count_while(i + 1, |c| c.is_ascii_hexdigit());
                    if hex > 0 {
                        return i + 1 + hex - self.current;
                    }
                }
                i += self.count_while(i, |c| ('0'..='7').contains(&c));
                i - self.current
            }
            Some('1'..='9') => {
                i += self.count_while(i, |c| c.is_ascii_digit());
                i - self.current
            }
            _ => 0,
        }
    }

    fn match_identifier(&self) -> usize {
        match self.current_char() {
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                1 + self.count_while(self.current + 1, |c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => 0,
        }
    }

    fn match_string(&self) -> usize {
        if self.current_char() != Some('"') {
            return 0;
        }
        let body = self.count_while(self.current + 1, |c| c != '"');
        if self.char_at(self.current + 1 + body) == Some('"') {
            body + 2
        } else {
            0
        }
    }

    /// A run of blanks, `//` line comments and `/* */` block comments.
    /// An unterminated block comment ends the run before the `/*`.
    fn match_whitespace(&self) -> usize {
        let mut i = self.current;
        loop {
            i += self.count_while(i, Self::is_blank);
            match (self.char_at(i), self.char_at(i + 1)) {
                (Some('/'), Some('/')) => {
                    i += 2 + self.count_while(i + 2, |c| c != '\n' && c != '\r');
                }
                (Some('/'), Some('*')) => match self.find_block_end(i + 2) {
                    Some(end) => i = end,
                    None => break,
                },
                _ => break,
            }
        }
        i - self.current
    }

    fn find_block_end(&self, start: usize) -> Option<usize> {
        (start..self.input.len().saturating_sub(1))
            .find(|&j| self.input[j] == '*' && self.input[j + 1] == '/')
            .map(|j| j + 2)
    }

    fn is_blank(ch: char) -> bool {
        matches!(ch, '\t' | '\n' | '\r' | ' ')
    }

    // Any single symbol that is neither a blank nor part of a word. Control
    // characters are excluded and fail tokenization with
    // `LexError::UnexpectedChar`, which is the only way tokenizing can fail.
    fn is_other(ch: char) -> bool {
        !Self::is_blank(ch) && !ch.is_ascii_alphanumeric() && ch != '_' && !ch.is_control()
    }

    fn take(&mut self, kind: TokenKind, len: usize) -> Token {
        let text: String = self.input[self.current..self.current + len].iter().collect();
        for _ in 0..len {
            self.advance();
        }
        Token { kind, text }
    }

    fn count_while(&self, start: usize, pred: impl Fn(char) -> bool) -> usize {
        self.input.get(start..).map_or(0, |rest| rest.iter().take_while(|&&c| pred(c)).count())
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.input.get(index).copied()
    }

    fn current_char(&self) -> Option<char> {
        self.char_at(self.current)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.current += 1;
            self.offset += ch.len_utf8();

            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn current_position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }
}

/// Convenience function for tokenizing a whole document
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}
