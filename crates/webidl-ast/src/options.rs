use serde::{Deserialize, Serialize};

/// Grammar dialect switches, passed explicitly to the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept `class` as an alias of `interface`
    pub allow_class: bool,
    /// Accept `extends Base` next to `: Base`
    pub allow_extends: bool,
    /// Accept `typedef` members inside interface bodies
    pub allow_nested_typedefs: bool,
    /// Keep whitespace and comments on the AST for faithful round-trips
    pub capture_trivia: bool,
}

impl ParseOptions {
    pub fn with_trivia() -> Self {
        Self { capture_trivia: true, ..Self::default() }
    }
}
