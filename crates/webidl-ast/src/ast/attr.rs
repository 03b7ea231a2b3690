use super::{ConstValue, Trivia, Type};
use serde::Serialize;

/// `[Name]`, `[Name=Ident]`, `[Name=(A,B)]`, `[Name(args)]`, `[Name(T1, T2)]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedAttribute {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhs: Option<ExtAttrRhs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ExtAttrParams>,
}

impl ExtendedAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), rhs: None, params: None }
    }

    /// Argument list, if the attribute has one (possibly empty).
    pub fn arguments(&self) -> Option<&[Argument]> {
        match &self.params {
            Some(ExtAttrParams::Arguments(args)) => Some(args),
            _ => None,
        }
    }
}

/// Right-hand side of `Name=...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ExtAttrRhs {
    Identifier(String),
    IdentifierList(Vec<String>),
}

/// Parenthesized part of an extended attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ExtAttrParams {
    Arguments(Vec<Argument>),
    TypePair(Type, Type),
}

/// Operation, callback or constructor argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub optional: bool,
    pub variadic: bool,
    #[serde(rename = "idlType")]
    pub ty: Type,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ConstValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leading: Vec<Trivia>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub after_attrs: Vec<Trivia>,
    /// Trivia between the argument and the following `,` or `)`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trailing: Vec<Trivia>,
}

impl Argument {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            ext_attrs: Vec::new(),
            optional: false,
            variadic: false,
            ty,
            name: name.into(),
            default: None,
            leading: Vec::new(),
            after_attrs: Vec::new(),
            trailing: Vec::new(),
        }
    }
}
