pub mod attr;
pub mod item;
pub mod member;
pub mod trivia;
pub mod types;

pub use attr::*;
pub use item::*;
pub use member::*;
pub use trivia::*;
pub use types::*;

use serde::Serialize;

/// The root of the AST: definitions in source order, partials not merged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub definitions: Vec<Definition>,
    /// Trivia after the last definition
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trailing: Vec<Trivia>,
}

impl Program {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions, trailing: Vec::new() }
    }
}
