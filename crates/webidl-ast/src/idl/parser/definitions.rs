//! Top-level definitions.

use super::{PResult, Parser};
use crate::ast::{
    Callback, DefinitionKind, Dictionary, Enum, EnumValue, Exception, Field, Implements,
    Interface, Member, MemberKind, Typedef,
};
use crate::error::ParseError;
use crate::idl::lexer::TokenKind;

impl Parser {
    /// Definitions are tried in a fixed order; the first one whose leading
    /// keyword matches is committed.
    pub(super) fn definition(&mut self) -> PResult<DefinitionKind> {
        if let Some(callback) = self.callback()? {
            return Ok(Some(callback));
        }
        if let Some((is_class, interface)) = self.interface(false)? {
            return Ok(Some(if is_class {
                DefinitionKind::Class(interface)
            } else {
                DefinitionKind::Interface(interface)
            }));
        }
        if let Some(partial) = self.partial()? {
            return Ok(Some(partial));
        }
        if let Some(dictionary) = self.dictionary(false)? {
            return Ok(Some(DefinitionKind::Dictionary(dictionary)));
        }
        if let Some(exception) = self.exception()? {
            return Ok(Some(DefinitionKind::Exception(exception)));
        }
        if let Some(enumeration) = self.enumeration()? {
            return Ok(Some(DefinitionKind::Enum(enumeration)));
        }
        if let Some(typedef) = self.typedef()? {
            return Ok(Some(DefinitionKind::Typedef(typedef)));
        }
        if let Some(implements) = self.implements()? {
            return Ok(Some(DefinitionKind::Implements(implements)));
        }
        Ok(None)
    }

    fn inheritance(&mut self) -> Result<Option<String>, ParseError> {
        if self.symbol(":") || (self.options.allow_extends && self.keyword("extends")) {
            return self.expect_identifier("No type in inheritance").map(Some);
        }
        Ok(None)
    }

    fn callback(&mut self) -> PResult<DefinitionKind> {
        if !self.keyword("callback") {
            return Ok(None);
        }

        if self.keyword("interface") {
            self.cursor.unconsume();
            let (_, interface) = self
                .interface(false)?
                .ok_or_else(|| self.fail("No name for callback"))?;
            return Ok(Some(DefinitionKind::CallbackInterface(interface)));
        }
        if self.options.allow_class && self.keyword("class") {
            return Err(self.fail("No such thing as callback class"));
        }

        let name = self.expect_identifier("No name for callback")?;
        self.expect_symbol("=", "No assignment in callback")?;
        let return_type = self.return_type()?;
        self.expect_symbol("(", "No arguments in callback")?;
        let arguments = self.argument_list()?.unwrap_or_default();
        self.expect_symbol(")", "Unterminated callback")?;
        self.expect_symbol(";", "Unterminated callback")?;
        Ok(Some(DefinitionKind::Callback(Callback { name, return_type, arguments })))
    }

    /// `interface Name : Base { members };`, or `class ...` when allowed.
    /// The flag in the result tells which keyword was used.
    fn interface(&mut self, partial: bool) -> PResult<(bool, Interface)> {
        let is_class = if self.keyword("interface") {
            false
        } else if self.options.allow_class && self.keyword("class") {
            true
        } else {
            return Ok(None);
        };

        let name = self.expect_identifier("No name for interface")?;
        let inheritance = if partial { None } else { self.inheritance()? };
        self.expect_symbol("{", "Bodyless interface")?;

        let mut members = Vec::new();
        let closing = loop {
            let leading = self.trivia();
            if self.symbol("}") {
                break leading;
            }
            let ext_attrs = self.extended_attributes()?;
            let after_attrs = self.trivia();
            let kind = self.interface_member()?;
            members.push(Member { ext_attrs, leading, after_attrs, kind });
        };
        self.expect_symbol(";", "Missing semicolon after interface")?;

        Ok(Some((is_class, Interface { name, partial, inheritance, members, closing })))
    }

    fn partial(&mut self) -> PResult<DefinitionKind> {
        if !self.keyword("partial") {
            return Ok(None);
        }
        if let Some(mut dictionary) = self.dictionary(true)? {
            dictionary.partial = true;
            return Ok(Some(DefinitionKind::Dictionary(dictionary)));
        }
        match self.interface(true)? {
            Some((true, interface)) => Ok(Some(DefinitionKind::Class(interface))),
            Some((false, interface)) => Ok(Some(DefinitionKind::Interface(interface))),
            None => Err(self.fail("Partial doesn't apply to anything")),
        }
    }

    fn dictionary(&mut self, partial: bool) -> PResult<Dictionary> {
        if !self.keyword("dictionary") {
            return Ok(None);
        }
        let name = self.expect_identifier("No name for dictionary")?;
        let inheritance = if partial { None } else { self.inheritance()? };
        self.expect_symbol("{", "Bodyless dictionary")?;

        let mut members = Vec::new();
        let closing = loop {
            let leading = self.trivia();
            if self.symbol("}") {
                break leading;
            }
            let ext_attrs = self.extended_attributes()?;
            let after_attrs = self.trivia();

            let required = self.keyword("required");
            let ty = self.parse_type()?.ok_or_else(|| self.fail("No type for dictionary member"))?;
            let name = self.expect_identifier("No name for dictionary member")?;
            let default = self.default_value()?;
            if required && default.is_some() {
                return Err(self.fail("Required member must not have a default"));
            }
            self.expect_symbol(";", "Unterminated dictionary member")?;

            let field = Field { required, ty, name, default };
            members.push(Member { ext_attrs, leading, after_attrs, kind: MemberKind::Field(field) });
        };
        self.expect_symbol(";", "Missing semicolon after dictionary")?;

        Ok(Some(Dictionary { name, partial, inheritance, members, closing }))
    }

    fn exception(&mut self) -> PResult<Exception> {
        if !self.keyword("exception") {
            return Ok(None);
        }
        let name = self.expect_identifier("No name for exception")?;
        let inheritance = self.inheritance()?;
        self.expect_symbol("{", "Bodyless exception")?;

        let mut members = Vec::new();
        let closing = loop {
            let leading = self.trivia();
            if self.symbol("}") {
                break leading;
            }
            let ext_attrs = self.extended_attributes()?;
            let after_attrs = self.trivia();

            let kind = if let Some(constant) = self.constant()? {
                MemberKind::Const(constant)
            } else {
                let ty = self.parse_type()?;
                let name = self.identifier();
                match (ty, name) {
                    (Some(ty), Some(name)) if self.symbol(";") => {
                        MemberKind::Field(Field::new(ty, name))
                    }
                    _ => return Err(self.fail("Unknown member in exception body")),
                }
            };
            members.push(Member { ext_attrs, leading, after_attrs, kind });
        };
        self.expect_symbol(";", "Missing semicolon after exception")?;

        Ok(Some(Exception { name, inheritance, members, closing }))
    }

    /// `enum Name { "a", "b", };` Commas between values are optional and a
    /// trailing comma is remembered.
    fn enumeration(&mut self) -> PResult<Enum> {
        if !self.keyword("enum") {
            return Ok(None);
        }
        let name = self.expect_identifier("No name for enum")?;
        self.expect_symbol("{", "No curly for enum")?;

        let mut values = Vec::new();
        let mut trailing_comma = false;
        let closing = loop {
            let leading = self.trivia();
            if self.symbol("}") {
                break leading;
            }
            let token = self
                .cursor
                .consume(TokenKind::String, None)
                .ok_or_else(|| self.fail("Unexpected value in enum"))?;
            let trailing = self.trivia();
            trailing_comma = self.symbol(",");
            values.push(EnumValue {
                value: token.text.replace('"', ""),
                leading,
                trailing,
            });
        };
        self.expect_symbol(";", "No semicolon after enum")?;

        Ok(Some(Enum { name, values, trailing_comma, closing }))
    }

    /// `typedef [TypeAttrs] T Name;`
    pub(super) fn typedef(&mut self) -> PResult<Typedef> {
        if !self.keyword("typedef") {
            return Ok(None);
        }
        let type_ext_attrs = self.extended_attributes()?;
        let after_type_attrs = self.trivia();
        let ty = self.parse_type()?.ok_or_else(|| self.fail("No type in typedef"))?;
        let name = self.expect_identifier("No name in typedef")?;
        self.expect_symbol(";", "Unterminated typedef")?;
        Ok(Some(Typedef { type_ext_attrs, after_type_attrs, ty, name }))
    }

    /// `Target implements Mixin;`
    fn implements(&mut self) -> PResult<Implements> {
        let start = self.cursor.checkpoint();
        let Some(target) = self.identifier() else {
            return Ok(None);
        };
        if !self.keyword("implements") {
            self.cursor.rewind(start);
            return Ok(None);
        }
        let implements = self.expect_identifier("Incomplete implements statement")?;
        self.expect_symbol(";", "No terminating ; for implements statement")?;
        Ok(Some(Implements { target, implements }))
    }
}
