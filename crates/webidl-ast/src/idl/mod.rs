pub mod cursor;
pub mod lexer;
pub mod merge;
pub mod parser;
pub mod pretty;
pub mod writer;

pub use cursor::{Checkpoint, Cursor};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use merge::{merge_partials, MergeWarning, Merged};
pub use parser::Parser;
pub use pretty::{pretty_print, PrettyPrinter};
pub use writer::{write, Writer};
