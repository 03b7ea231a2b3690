//! Tokens command implementation

use anyhow::{Context, Result};
use colored::*;
use idl_index::sources::read_fragment;
use std::path::Path;
use webidl_ast::idl::{tokenize, TokenKind};

pub fn list_tokens(file: &Path) -> Result<()> {
    let fragment = read_fragment(file)?;
    let tokens = tokenize(&fragment.text)
        .with_context(|| format!("Failed to tokenize {}", fragment.origin))?;

    let mut line = 1;
    for token in &tokens {
        let kind = format!("{:<10}", format!("{:?}", token.kind).to_lowercase());
        let kind = match token.kind {
            TokenKind::Whitespace => kind.dimmed(),
            TokenKind::Identifier => kind.cyan(),
            TokenKind::String | TokenKind::Integer | TokenKind::Float => kind.green(),
            TokenKind::Other => kind.normal(),
        };
        println!("{:>4}  {}  {:?}", line, kind, token.text);
        line += token.newlines();
    }

    println!("\n{} {} token(s)", "→".cyan(), tokens.len());
    Ok(())
}
