//! Interface body members.

use super::{PResult, Parser};
use crate::ast::{
    Argument, Attribute, Const, IterableKind, Iterable, IteratorMember, IteratorObject, MemberKind,
    Operation, Serializer, Specials, Type,
};
use crate::error::ParseError;

impl Parser {
    /// `const T name = value;`
    pub(super) fn constant(&mut self) -> PResult<Const> {
        if !self.keyword("const") {
            return Ok(None);
        }
        let mut ty = match self.primitive_type()? {
            Some(prim) => Type::primitive(prim),
            None => Type::named(self.expect_identifier("No type for const")?),
        };
        if self.symbol("?") {
            ty.nullable = true;
        }
        let name = self.expect_identifier("No name for const")?;
        self.expect_symbol("=", "No value assignment for const")?;
        let value = self.const_value().ok_or_else(|| self.fail("No value for const"))?;
        self.expect_symbol(";", "Unterminated const")?;
        Ok(Some(Const { ty, name, value }))
    }

    fn inheritable_attribute(&mut self) -> PResult<Attribute> {
        let start = self.cursor.checkpoint();
        let is_static = self.keyword("static");
        let stringifier = !is_static && self.keyword("stringifier");

        let inherit = self.keyword("inherit");
        if inherit && (is_static || stringifier) {
            return Err(self.fail("Cannot have a static or stringifier inherit"));
        }
        let readonly = self.keyword("readonly");
        if !self.keyword("attribute") {
            self.cursor.rewind(start);
            return Ok(None);
        }

        let ty = self.parse_type()?.ok_or_else(|| self.fail("No type in attribute"))?;
        if ty.is_sequence() {
            return Err(self.fail("Attributes cannot accept sequence types"));
        }
        let name = self.expect_identifier("No name in attribute")?;
        self.expect_symbol(";", "Unterminated attribute")?;
        Ok(Some(Attribute { is_static, stringifier, inherit, readonly, ty, name }))
    }

    /// Optional name and argument list of an operation, up to the `;`.
    fn operation_rest(&mut self) -> Result<(Option<String>, Vec<Argument>), ParseError> {
        let name = self.identifier();
        self.expect_symbol("(", "Invalid operation")?;
        let arguments = self.argument_list()?.unwrap_or_default();
        self.expect_symbol(")", "Unterminated operation")?;
        self.expect_symbol(";", "Unterminated operation")?;
        Ok((name, arguments))
    }

    fn specials(&mut self) -> Specials {
        let mut specials = Specials::default();
        loop {
            if self.keyword("getter") {
                specials.getter = true;
            } else if self.keyword("setter") {
                specials.setter = true;
            } else if self.keyword("creator") {
                specials.creator = true;
            } else if self.keyword("deleter") {
                specials.deleter = true;
            } else if self.keyword("legacycaller") {
                specials.legacycaller = true;
            } else {
                return specials;
            }
        }
    }

    /// Operations and `T iterator ...;` members. A plain `T name` that is
    /// not followed by `(` is left for the caller to report.
    fn operation(&mut self) -> PResult<MemberKind> {
        let specials = self.specials();
        if specials.any() {
            let return_type = self.return_type()?;
            let (name, arguments) = self.operation_rest()?;
            return Ok(Some(MemberKind::Operation(Operation {
                specials,
                return_type: Some(return_type),
                name,
                arguments,
                ..Operation::default()
            })));
        }

        if self.keyword("static") {
            let return_type = self.return_type()?;
            let (name, arguments) = self.operation_rest()?;
            return Ok(Some(MemberKind::Operation(Operation {
                is_static: true,
                return_type: Some(return_type),
                name,
                arguments,
                ..Operation::default()
            })));
        }

        if self.keyword("stringifier") {
            if self.symbol(";") {
                return Ok(Some(MemberKind::Operation(Operation {
                    stringifier: true,
                    ..Operation::default()
                })));
            }
            let return_type = self.return_type()?;
            let (name, arguments) = self.operation_rest()?;
            return Ok(Some(MemberKind::Operation(Operation {
                stringifier: true,
                return_type: Some(return_type),
                name,
                arguments,
                ..Operation::default()
            })));
        }

        let start = self.cursor.checkpoint();
        let Some(return_type) = self.return_type_opt()? else {
            return Ok(None);
        };

        if self.keyword("iterator") {
            let object = if self.keyword("object") {
                Some(IteratorObject::Object)
            } else if self.symbol("=") {
                let name = self.expect_identifier("No right hand side in iterator")?;
                Some(IteratorObject::Named(name))
            } else {
                None
            };
            self.expect_symbol(";", "Unterminated iterator")?;
            return Ok(Some(MemberKind::Iterator(IteratorMember { return_type, object })));
        }

        let probe = self.cursor.checkpoint();
        self.identifier();
        let is_call = self.symbol("(");
        self.cursor.rewind(probe);
        if !is_call {
            self.cursor.rewind(start);
            return Ok(None);
        }

        let (name, arguments) = self.operation_rest()?;
        Ok(Some(MemberKind::Operation(Operation {
            return_type: Some(return_type),
            name,
            arguments,
            ..Operation::default()
        })))
    }

    /// Names inside a serializer pattern; `getter` stands alone and
    /// `inherit` (maps only) may be followed by more names.
    fn serializer_names(&mut self, allow_inherit: bool) -> Result<Vec<String>, ParseError> {
        let mut names = Vec::new();
        if let Some(first) = self.identifier() {
            let alone = first == "getter";
            let inherit = first == "inherit";
            names.push(first);
            if !alone && (allow_inherit || !inherit) {
                self.identifiers(&mut names)?;
            }
        }
        Ok(names)
    }

    fn serializer(&mut self) -> PResult<Serializer> {
        if !self.keyword("serializer") {
            return Ok(None);
        }

        if self.symbol(";") {
            return Ok(Some(Serializer::Bare));
        }

        if !self.symbol("=") {
            let return_type = self.return_type()?;
            let (name, arguments) = self.operation_rest()?;
            return Ok(Some(Serializer::Operation { return_type, name, arguments }));
        }

        let serializer = if self.symbol("{") {
            let names = self.serializer_names(true)?;
            self.expect_symbol("}", "Unterminated serializer pattern map")?;
            Serializer::PatternMap { names }
        } else if self.symbol("[") {
            let names = self.serializer_names(false)?;
            self.expect_symbol("]", "Unterminated serializer pattern list")?;
            Serializer::PatternList { names }
        } else {
            Serializer::Named { name: self.expect_identifier("Invalid serializer")? }
        };
        self.expect_symbol(";", "Unterminated serializer")?;
        Ok(Some(serializer))
    }

    fn iterable_kind(&mut self, readonly: bool) -> Option<IterableKind> {
        if !readonly {
            if self.keyword("iterable") {
                return Some(IterableKind::Iterable);
            }
            if self.keyword("legacyiterable") {
                return Some(IterableKind::LegacyIterable);
            }
        }
        if self.keyword("maplike") {
            return Some(IterableKind::Maplike);
        }
        if self.keyword("setlike") {
            return Some(IterableKind::Setlike);
        }
        None
    }

    /// `iterable<V>`, `maplike<K, V>`, `readonly setlike<V>` ...
    fn iterable(&mut self) -> PResult<Iterable> {
        let start = self.cursor.checkpoint();
        let readonly = self.keyword("readonly");
        let Some(kind) = self.iterable_kind(readonly) else {
            self.cursor.rewind(start);
            return Ok(None);
        };
        let what = kind.as_str();

        if !self.symbol("<") {
            return Err(self.fail(format!("Error parsing {} declaration", what)));
        }
        let first =
            self.parse_type()?.ok_or_else(|| self.fail(format!("Error parsing {} declaration", what)))?;
        let mut types = vec![first];
        if kind.allows_second_type() {
            let second = if self.symbol(",") { self.parse_type()? } else { None };
            match second {
                Some(second) => types.push(second),
                None if kind.requires_second_type() => {
                    return Err(self.fail(format!(
                        "Missing second type argument in {} declaration",
                        what
                    )));
                }
                None => {}
            }
        }
        self.expect_symbol(">", &format!("Unterminated {} declaration", what))?;
        self.expect_symbol(";", &format!("Missing semicolon after {} declaration", what))?;

        Ok(Some(Iterable { kind, readonly, types }))
    }

    /// One interface-like body member; every alternative is tried in turn.
    pub(super) fn interface_member(&mut self) -> Result<MemberKind, ParseError> {
        if let Some(constant) = self.constant()? {
            return Ok(MemberKind::Const(constant));
        }
        if self.options.allow_nested_typedefs {
            if let Some(typedef) = self.typedef()? {
                return Ok(MemberKind::Typedef(typedef));
            }
        }
        if let Some(iterable) = self.iterable()? {
            return Ok(MemberKind::Iterable(iterable));
        }
        if let Some(serializer) = self.serializer()? {
            return Ok(MemberKind::Serializer(serializer));
        }
        if let Some(attribute) = self.inheritable_attribute()? {
            return Ok(MemberKind::Attribute(attribute));
        }
        if let Some(operation) = self.operation()? {
            return Ok(operation);
        }
        Err(self.fail("Unknown member"))
    }
}
