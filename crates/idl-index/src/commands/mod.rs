//! Command implementations

pub mod check;
pub mod parse;
pub mod render;
pub mod tokens;

pub use check::check_fragments;
pub use parse::dump_tree;
pub use render::render_index;
pub use tokens::list_tokens;
