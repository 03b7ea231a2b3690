//! Types, literals, arguments and extended attributes.

use super::{PResult, Parser};
use crate::ast::{Argument, ConstValue, ExtAttrParams, ExtAttrRhs, ExtendedAttribute, Type};
use crate::error::ParseError;
use crate::idl::lexer::TokenKind;

impl Parser {
    fn integer_type(&mut self) -> PResult<String> {
        let mut ret = String::new();
        if self.keyword("unsigned") {
            ret.push_str("unsigned ");
        }
        if self.keyword("short") {
            return Ok(Some(ret + "short"));
        }
        if self.keyword("long") {
            ret.push_str("long");
            if self.keyword("long") {
                ret.push_str(" long");
            }
            return Ok(Some(ret));
        }
        if !ret.is_empty() {
            return Err(self.fail("Failed to parse integer type"));
        }
        Ok(None)
    }

    fn float_type(&mut self) -> PResult<String> {
        let mut ret = String::new();
        if self.keyword("unrestricted") {
            ret.push_str("unrestricted ");
        }
        if self.keyword("float") {
            return Ok(Some(ret + "float"));
        }
        if self.keyword("double") {
            return Ok(Some(ret + "double"));
        }
        if !ret.is_empty() {
            return Err(self.fail("Failed to parse float type"));
        }
        Ok(None)
    }

    pub(super) fn primitive_type(&mut self) -> PResult<String> {
        if let Some(num) = self.integer_type()? {
            return Ok(Some(num));
        }
        if let Some(num) = self.float_type()? {
            return Ok(Some(num));
        }
        for name in ["boolean", "byte", "octet"] {
            if self.keyword(name) {
                return Ok(Some(name.to_string()));
            }
        }
        Ok(None)
    }

    /// `?` and `[]` suffixes, in any order and number.
    fn type_suffix(&mut self, ty: &mut Type) -> Result<(), ParseError> {
        loop {
            if self.symbol("?") {
                if ty.nullable {
                    return Err(self.fail("Can't nullable more than once"));
                }
                ty.nullable = true;
            } else if self.symbol("[") {
                if !self.symbol("]") {
                    return Err(self.fail("Unterminated array type"));
                }
                ty.array.push(ty.nullable);
                ty.nullable = false;
            } else {
                return Ok(());
            }
        }
    }

    fn single_type(&mut self) -> PResult<Type> {
        let mut ty = if let Some(prim) = self.primitive_type()? {
            Type::primitive(prim)
        } else if let Some(name) = self.identifier() {
            if self.symbol("<") {
                let inner = self
                    .parse_type()?
                    .ok_or_else(|| self.fail(format!("Error parsing generic type {}", name)))?;
                if !self.symbol(">") {
                    return Err(self.fail(format!("Unterminated generic type {}", name)));
                }
                let mut ty = Type::generic(name, inner);
                self.type_suffix(&mut ty)?;
                return Ok(Some(ty));
            }
            Type::named(name)
        } else {
            return Ok(None);
        };

        self.type_suffix(&mut ty)?;
        if ty.nullable && ty.array.is_empty() && ty.base_name() == Some("any") {
            return Err(self.fail("Type any cannot be made nullable"));
        }
        Ok(Some(ty))
    }

    fn union_type(&mut self) -> PResult<Type> {
        if !self.symbol("(") {
            return Ok(None);
        }
        let first = self.parse_type()?.ok_or_else(|| self.fail("Union type with no content"))?;
        let mut members = vec![first];
        while self.keyword("or") {
            let next =
                self.parse_type()?.ok_or_else(|| self.fail("No type after 'or' in union type"))?;
            members.push(next);
        }
        if !self.symbol(")") {
            return Err(self.fail("Unterminated union type"));
        }
        if members.len() < 2 {
            return Err(self.fail("Union type needs at least two member types"));
        }
        let mut ty = Type::union(members);
        self.type_suffix(&mut ty)?;
        Ok(Some(ty))
    }

    pub(super) fn parse_type(&mut self) -> PResult<Type> {
        if let Some(ty) = self.single_type()? {
            return Ok(Some(ty));
        }
        self.union_type()
    }

    /// A type or `void`; `None` when neither is present.
    pub(super) fn return_type_opt(&mut self) -> PResult<Type> {
        if let Some(ty) = self.parse_type()? {
            return Ok(Some(ty));
        }
        if self.keyword("void") {
            return Ok(Some(Type::named("void")));
        }
        Ok(None)
    }

    pub(super) fn return_type(&mut self) -> Result<Type, ParseError> {
        self.return_type_opt()?.ok_or_else(|| self.fail("No return type"))
    }

    pub(super) fn const_value(&mut self) -> Option<ConstValue> {
        if self.keyword("true") {
            return Some(ConstValue::Boolean(true));
        }
        if self.keyword("false") {
            return Some(ConstValue::Boolean(false));
        }
        if self.keyword("null") {
            return Some(ConstValue::Null);
        }
        if self.keyword("Infinity") {
            return Some(ConstValue::Infinity { negative: false });
        }
        if self.keyword("NaN") {
            return Some(ConstValue::NaN);
        }
        self.ws();
        let number = self
            .cursor
            .consume(TokenKind::Float, None)
            .or_else(|| self.cursor.consume(TokenKind::Integer, None));
        if let Some(token) = number {
            return Some(ConstValue::Number(token.text));
        }
        if self.symbol("-") {
            if self.keyword("Infinity") {
                return Some(ConstValue::Infinity { negative: true });
            }
            self.cursor.unconsume();
        }
        None
    }

    /// `= value` after an optional argument or a dictionary member.
    pub(super) fn default_value(&mut self) -> PResult<ConstValue> {
        if !self.symbol("=") {
            return Ok(None);
        }
        if let Some(value) = self.const_value() {
            return Ok(Some(value));
        }
        if self.symbol("[") {
            if !self.symbol("]") {
                return Err(self.fail("Default sequence value must be empty"));
            }
            return Ok(Some(ConstValue::EmptySequence));
        }
        self.ws();
        let token =
            self.cursor.consume(TokenKind::String, None).ok_or_else(|| self.fail("No value for default"))?;
        Ok(Some(ConstValue::String(unquote(&token.text))))
    }

    /// Three `.` tokens with nothing in between.
    fn ellipsis(&mut self) -> bool {
        self.ws();
        let start = self.cursor.checkpoint();
        for _ in 0..3 {
            if self.cursor.consume(TokenKind::Other, Some(".")).is_none() {
                self.cursor.rewind(start);
                return false;
            }
        }
        true
    }

    /// An argument is only recognized when a type is followed by a name;
    /// otherwise everything consumed here is rolled back.
    fn argument(&mut self) -> PResult<Argument> {
        let start = self.cursor.checkpoint();
        let leading = self.trivia();
        let ext_attrs = self.extended_attributes()?;
        let after_attrs = self.trivia();

        let optional = self.keyword("optional");
        let Some(ty) = self.parse_type()? else {
            self.cursor.rewind(start);
            return Ok(None);
        };
        let variadic = !optional && self.ellipsis();
        let Some(name) = self.identifier() else {
            self.cursor.rewind(start);
            return Ok(None);
        };
        let default = if optional { self.default_value()? } else { None };
        let trailing = self.trivia();

        Ok(Some(Argument {
            ext_attrs,
            optional,
            variadic,
            ty,
            name,
            default,
            leading,
            after_attrs,
            trailing,
        }))
    }

    pub(super) fn argument_list(&mut self) -> PResult<Vec<Argument>> {
        let Some(first) = self.argument()? else {
            return Ok(None);
        };
        let mut args = vec![first];
        while self.symbol(",") {
            let next =
                self.argument()?.ok_or_else(|| self.fail("Trailing comma in arguments list"))?;
            args.push(next);
        }
        Ok(Some(args))
    }

    /// `T1, T2` inside an extended attribute; rolled back unless complete.
    fn type_pair(&mut self) -> PResult<(Type, Type)> {
        let start = self.cursor.checkpoint();
        let pair = match self.parse_type()? {
            Some(key) if self.symbol(",") => self.parse_type()?.map(|value| (key, value)),
            _ => None,
        };
        if pair.is_none() {
            self.cursor.rewind(start);
        }
        Ok(pair)
    }

    /// `, b, c` continuation of an identifier list.
    pub(super) fn identifiers(&mut self, names: &mut Vec<String>) -> Result<(), ParseError> {
        while self.symbol(",") {
            names.push(self.expect_identifier("Trailing comma in identifiers list")?);
        }
        Ok(())
    }

    fn extended_attribute(&mut self) -> PResult<ExtendedAttribute> {
        let Some(name) = self.identifier() else {
            return Ok(None);
        };
        let mut attr = ExtendedAttribute::new(name);

        if self.symbol("=") {
            if let Some(rhs) = self.identifier() {
                attr.rhs = Some(ExtAttrRhs::Identifier(rhs));
            } else if self.symbol("(") {
                // [Exposed=(Window,Worker)]
                let mut names = Vec::new();
                if let Some(first) = self.identifier() {
                    names.push(first);
                }
                self.identifiers(&mut names)?;
                self.expect_symbol(
                    ")",
                    "Unexpected token in extended attribute argument list or type pair",
                )?;
                attr.rhs = Some(ExtAttrRhs::IdentifierList(names));
            } else {
                return Err(self.fail("No right hand side to extended attribute assignment"));
            }
        }

        if self.symbol("(") {
            attr.params = Some(if let Some(args) = self.argument_list()? {
                // [Constructor(DOMString str)]
                ExtAttrParams::Arguments(args)
            } else if let Some((key, value)) = self.type_pair()? {
                // [MapClass(DOMString, DOMString)]
                ExtAttrParams::TypePair(key, value)
            } else {
                // [Constructor()]
                ExtAttrParams::Arguments(Vec::new())
            });
            self.expect_symbol(
                ")",
                "Unexpected token in extended attribute argument list or type pair",
            )?;
        }

        Ok(Some(attr))
    }

    /// `[A, B=C, ...]`, or an empty list when no `[` follows.
    pub(super) fn extended_attributes(&mut self) -> Result<Vec<ExtendedAttribute>, ParseError> {
        if !self.symbol("[") {
            return Ok(Vec::new());
        }
        let first = self
            .extended_attribute()?
            .ok_or_else(|| self.fail("Extended attribute with not content"))?;
        let mut attrs = vec![first];
        while self.symbol(",") {
            let next = self
                .extended_attribute()?
                .ok_or_else(|| self.fail("Trailing comma in extended attribute"))?;
            attrs.push(next);
        }
        self.expect_symbol("]", "No end of extended attribute")?;
        Ok(attrs)
    }
}

fn unquote(text: &str) -> String {
    text.trim_start_matches('"').trim_end_matches('"').to_string()
}
