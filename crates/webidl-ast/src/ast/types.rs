use serde::Serialize;
use std::fmt;

/// A type reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Type {
    pub kind: TypeKind,
    pub nullable: bool,
    /// One entry per `[]` level, outermost last. Each flag records whether
    /// the element type in front of that level was nullable, so `long?[]`
    /// is `[true]` and `long[]?[]` is `[false, true]`.
    pub array: Vec<bool>,
}

/// Type kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum TypeKind {
    /// Numeric or boolean-like built-in, normalized spelling (`unsigned long long`)
    Primitive(String),
    /// Any other name, `any` and `void` included
    Named(String),
    /// `name<inner>`; `sequence` is the sequence-like case
    Generic { name: String, inner: Box<Type> },
    /// `(A or B ...)`
    Union(Vec<Type>),
}

impl Type {
    pub fn new(kind: TypeKind) -> Self {
        Self { kind, nullable: false, array: Vec::new() }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Primitive(name.into()))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Named(name.into()))
    }

    pub fn generic(name: impl Into<String>, inner: Type) -> Self {
        Self::new(TypeKind::Generic { name: name.into(), inner: Box::new(inner) })
    }

    pub fn union(members: Vec<Type>) -> Self {
        Self::new(TypeKind::Union(members))
    }

    pub fn array_depth(&self) -> usize {
        self.array.len()
    }

    pub fn is_union(&self) -> bool {
        matches!(self.kind, TypeKind::Union(_))
    }

    pub fn is_sequence(&self) -> bool {
        self.generic_name() == Some("sequence")
    }

    pub fn generic_name(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Generic { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Name of a primitive or named type; `None` for generics and unions.
    pub fn base_name(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Primitive(name) | TypeKind::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Primitive(name) | TypeKind::Named(name) => f.write_str(name)?,
            TypeKind::Generic { name, inner } => write!(f, "{}<{}>", name, inner)?,
            TypeKind::Union(members) => {
                f.write_str("(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{}", member)?;
                }
                f.write_str(")")?;
            }
        }
        for nullable in &self.array {
            if *nullable {
                f.write_str("?")?;
            }
            f.write_str("[]")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// Literal used by constants and default values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ConstValue {
    Boolean(bool),
    Null,
    Infinity { negative: bool },
    NaN,
    /// Numeric literal, kept in its source spelling (`0x1F`, `-1.5e3`)
    Number(String),
    /// String default, without the quotes
    String(String),
    /// `[]`, only valid as a default
    EmptySequence,
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Boolean(b) => write!(f, "{}", b),
            ConstValue::Null => f.write_str("null"),
            ConstValue::Infinity { negative } => {
                write!(f, "{}Infinity", if *negative { "-" } else { "" })
            }
            ConstValue::NaN => f.write_str("NaN"),
            ConstValue::Number(n) => f.write_str(n),
            ConstValue::String(s) => write!(f, "\"{}\"", s),
            ConstValue::EmptySequence => f.write_str("[]"),
        }
    }
}
