use super::{Argument, ConstValue, ExtendedAttribute, Trivia, Type};
use serde::Serialize;

/// An entry of an interface, dictionary or exception body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leading: Vec<Trivia>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub after_attrs: Vec<Trivia>,
    #[serde(flatten)]
    pub kind: MemberKind,
}

impl Member {
    pub fn new(kind: MemberKind) -> Self {
        Self { ext_attrs: Vec::new(), leading: Vec::new(), after_attrs: Vec::new(), kind }
    }

    /// Declared name, if the member has one.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            MemberKind::Const(c) => Some(&c.name),
            MemberKind::Field(f) => Some(&f.name),
            MemberKind::Attribute(a) => Some(&a.name),
            MemberKind::Operation(op) => op.name.as_deref(),
            MemberKind::Typedef(t) => Some(&t.name),
            MemberKind::Iterator(_) | MemberKind::Serializer(_) | MemberKind::Iterable(_) => None,
        }
    }
}

/// Member kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MemberKind {
    Const(Const),
    Field(Field),
    Attribute(Attribute),
    Operation(Operation),
    Iterator(IteratorMember),
    Serializer(Serializer),
    Iterable(Iterable),
    Typedef(Typedef),
}

/// `const T name = value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Const {
    #[serde(rename = "idlType")]
    pub ty: Type,
    pub name: String,
    pub value: ConstValue,
}

/// Dictionary or exception field: `required T name = default;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub required: bool,
    #[serde(rename = "idlType")]
    pub ty: Type,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ConstValue>,
}

impl Field {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self { required: false, ty, name: name.into(), default: None }
    }
}

/// `static stringifier inherit readonly attribute T name;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "static")]
    pub is_static: bool,
    pub stringifier: bool,
    pub inherit: bool,
    pub readonly: bool,
    #[serde(rename = "idlType")]
    pub ty: Type,
    pub name: String,
}

/// Special operation keywords; any combination may precede the return type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Specials {
    pub getter: bool,
    pub setter: bool,
    pub creator: bool,
    pub deleter: bool,
    pub legacycaller: bool,
}

impl Specials {
    pub fn any(&self) -> bool {
        self.getter || self.setter || self.creator || self.deleter || self.legacycaller
    }

    /// Set keywords in rendering order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.getter, "getter"),
            (self.setter, "setter"),
            (self.creator, "creator"),
            (self.deleter, "deleter"),
            (self.legacycaller, "legacycaller"),
        ]
        .into_iter()
        .filter_map(|(set, keyword)| set.then_some(keyword))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Operation {
    #[serde(flatten)]
    pub specials: Specials,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub stringifier: bool,
    /// `None` only for the bare `stringifier;` form
    #[serde(rename = "idlType")]
    pub return_type: Option<Type>,
    pub name: Option<String>,
    pub arguments: Vec<Argument>,
}

/// `T iterator;`, `T iterator object;`, `T iterator = Name;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IteratorMember {
    #[serde(rename = "idlType")]
    pub return_type: Type,
    #[serde(rename = "iteratorObject", skip_serializing_if = "Option::is_none")]
    pub object: Option<IteratorObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IteratorObject {
    Object,
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "kebab-case")]
pub enum Serializer {
    /// `serializer;`
    Bare,
    /// `serializer = name;`
    Named { name: String },
    /// `serializer = { ... };`
    PatternMap { names: Vec<String> },
    /// `serializer = [ ... ];`
    PatternList { names: Vec<String> },
    /// `serializer T name(args);`
    Operation {
        #[serde(rename = "idlType")]
        return_type: Type,
        name: Option<String>,
        arguments: Vec<Argument>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IterableKind {
    Iterable,
    LegacyIterable,
    Maplike,
    Setlike,
}

impl IterableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IterableKind::Iterable => "iterable",
            IterableKind::LegacyIterable => "legacyiterable",
            IterableKind::Maplike => "maplike",
            IterableKind::Setlike => "setlike",
        }
    }

    pub fn allows_second_type(&self) -> bool {
        matches!(self, IterableKind::Iterable | IterableKind::Maplike)
    }

    pub fn requires_second_type(&self) -> bool {
        matches!(self, IterableKind::Maplike)
    }
}

/// `iterable<V>`, `iterable<K, V>`, `readonly maplike<K, V>`, `setlike<V>` ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Iterable {
    pub kind: IterableKind,
    pub readonly: bool,
    /// One or two type arguments
    #[serde(rename = "idlType")]
    pub types: Vec<Type>,
}

/// `typedef [TypeAttrs] T Name;`, top level or nested in an interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typedef {
    #[serde(rename = "typeExtAttrs", skip_serializing_if = "Vec::is_empty")]
    pub type_ext_attrs: Vec<ExtendedAttribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub after_type_attrs: Vec<Trivia>,
    #[serde(rename = "idlType")]
    pub ty: Type,
    pub name: String,
}
