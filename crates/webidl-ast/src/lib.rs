pub mod ast;
pub mod error;
pub mod idl;
pub mod options;
pub mod pipeline;

// Re-export commonly used items
pub use ast::{Definition, DefinitionKind, Member, MemberKind, Program, Type};
pub use error::{Error, LexError, ParseError, Position, Result};
pub use idl::{merge_partials, pretty_print, tokenize, write, MergeWarning, Merged, Parser};
pub use options::ParseOptions;
pub use pipeline::{
    combine_fragments, parse, pretty_print_webidl, render, render_index, RenderOptions, Rendered,
};
