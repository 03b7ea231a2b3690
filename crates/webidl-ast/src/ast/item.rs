use super::{Argument, ExtendedAttribute, Member, Trivia, Type, Typedef};
use serde::Serialize;

/// A top-level definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    #[serde(rename = "extAttrs", skip_serializing_if = "Vec::is_empty")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    /// Trivia in front of the definition (and its extended attributes)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leading: Vec<Trivia>,
    /// Trivia between the extended attributes and the definition keyword
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub after_attrs: Vec<Trivia>,
    #[serde(flatten)]
    pub kind: DefinitionKind,
}

/// Definition kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DefinitionKind {
    Interface(Interface),
    /// `class Name { ... };`, only with `allow_class`
    Class(Interface),
    Callback(Callback),
    CallbackInterface(Interface),
    Dictionary(Dictionary),
    Exception(Exception),
    Enum(Enum),
    Typedef(Typedef),
    Implements(Implements),
}

/// Body shared by interfaces, classes and callback interfaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub name: String,
    pub partial: bool,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
    /// Trivia in front of the closing brace
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub closing: Vec<Trivia>,
}

/// `callback Name = ReturnType (args);`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Callback {
    pub name: String,
    #[serde(rename = "idlType")]
    pub return_type: Type,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dictionary {
    pub name: String,
    pub partial: bool,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub closing: Vec<Trivia>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exception {
    pub name: String,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub closing: Vec<Trivia>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enum {
    pub name: String,
    pub values: Vec<EnumValue>,
    /// Whether the last value is followed by a comma
    pub trailing_comma: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub closing: Vec<Trivia>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leading: Vec<Trivia>,
    /// Trivia between the value and its comma
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trailing: Vec<Trivia>,
}

impl EnumValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), leading: Vec::new(), trailing: Vec::new() }
    }
}

/// `Target implements Mixin;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Implements {
    pub target: String,
    pub implements: String,
}

impl Definition {
    pub fn new(kind: DefinitionKind) -> Self {
        Self { ext_attrs: Vec::new(), leading: Vec::new(), after_attrs: Vec::new(), kind }
    }

    /// Name used for partial matching. `implements` statements are named
    /// after their target.
    pub fn name(&self) -> &str {
        match &self.kind {
            DefinitionKind::Interface(i)
            | DefinitionKind::Class(i)
            | DefinitionKind::CallbackInterface(i) => &i.name,
            DefinitionKind::Callback(c) => &c.name,
            DefinitionKind::Dictionary(d) => &d.name,
            DefinitionKind::Exception(e) => &e.name,
            DefinitionKind::Enum(e) => &e.name,
            DefinitionKind::Typedef(t) => &t.name,
            DefinitionKind::Implements(i) => &i.target,
        }
    }

    pub fn is_partial(&self) -> bool {
        match &self.kind {
            DefinitionKind::Interface(i) | DefinitionKind::Class(i) => i.partial,
            DefinitionKind::Dictionary(d) => d.partial,
            _ => false,
        }
    }

    pub fn inheritance(&self) -> Option<&str> {
        match &self.kind {
            DefinitionKind::Interface(i)
            | DefinitionKind::Class(i)
            | DefinitionKind::CallbackInterface(i) => i.inheritance.as_deref(),
            DefinitionKind::Dictionary(d) => d.inheritance.as_deref(),
            DefinitionKind::Exception(e) => e.inheritance.as_deref(),
            _ => None,
        }
    }

    /// Member list, for the kinds that have one.
    pub fn members(&self) -> Option<&[Member]> {
        match &self.kind {
            DefinitionKind::Interface(i)
            | DefinitionKind::Class(i)
            | DefinitionKind::CallbackInterface(i) => Some(&i.members),
            DefinitionKind::Dictionary(d) => Some(&d.members),
            DefinitionKind::Exception(e) => Some(&e.members),
            _ => None,
        }
    }

    pub fn members_mut(&mut self) -> Option<&mut Vec<Member>> {
        match &mut self.kind {
            DefinitionKind::Interface(i)
            | DefinitionKind::Class(i)
            | DefinitionKind::CallbackInterface(i) => Some(&mut i.members),
            DefinitionKind::Dictionary(d) => Some(&mut d.members),
            DefinitionKind::Exception(e) => Some(&mut e.members),
            _ => None,
        }
    }

    /// Leading keyword(s) of the definition, as written by the writer.
    pub fn keyword(&self) -> &'static str {
        match &self.kind {
            DefinitionKind::Interface(_) => "interface",
            DefinitionKind::Class(_) => "class",
            DefinitionKind::Callback(_) => "callback",
            DefinitionKind::CallbackInterface(_) => "callback interface",
            DefinitionKind::Dictionary(_) => "dictionary",
            DefinitionKind::Exception(_) => "exception",
            DefinitionKind::Enum(_) => "enum",
            DefinitionKind::Typedef(_) => "typedef",
            DefinitionKind::Implements(_) => "implements",
        }
    }
}
