//! Tree to text.
//!
//! The output is compact: members follow each other without separators and
//! only captured trivia reintroduces the original layout. Trivia stored on a
//! node is emitted once, right in front of that node.

use crate::ast::*;

pub struct Writer;

impl Writer {
    pub fn new() -> Self {
        Self
    }

    /// Render definitions in order. Definitions without leading trivia are
    /// put on their own line.
    pub fn write(&self, definitions: &[Definition]) -> String {
        let mut out = String::new();
        for (i, def) in definitions.iter().enumerate() {
            if i > 0 && def.leading.is_empty() {
                out.push('\n');
            }
            out.push_str(&self.write_definition(def));
        }
        out
    }

    /// Like [`Writer::write`], followed by the trivia after the last definition.
    pub fn write_program(&self, program: &Program) -> String {
        let mut out = self.write(&program.definitions);
        out.push_str(&trivia(&program.trailing));
        out
    }

    pub fn write_definition(&self, def: &Definition) -> String {
        let mut out = trivia(&def.leading);
        out.push_str(&self.write_ext_attrs(&def.ext_attrs, &def.after_attrs));

        match &def.kind {
            DefinitionKind::Interface(body)
            | DefinitionKind::Class(body)
            | DefinitionKind::CallbackInterface(body) => {
                let header = self.header(def.keyword(), &body.name, body.partial, body.inheritance.as_deref());
                out.push_str(&self.block(&header, &body.members, &body.closing));
            }
            DefinitionKind::Dictionary(dict) => {
                let header = self.header("dictionary", &dict.name, dict.partial, dict.inheritance.as_deref());
                out.push_str(&self.block(&header, &dict.members, &dict.closing));
            }
            DefinitionKind::Exception(exc) => {
                let header = self.header("exception", &exc.name, false, exc.inheritance.as_deref());
                out.push_str(&self.block(&header, &exc.members, &exc.closing));
            }
            DefinitionKind::Callback(cb) => {
                out.push_str(&format!(
                    "callback {} = {}({});",
                    cb.name,
                    cb.return_type,
                    self.write_arguments(&cb.arguments)
                ));
            }
            DefinitionKind::Enum(e) => out.push_str(&self.write_enum(e)),
            DefinitionKind::Typedef(t) => out.push_str(&self.write_typedef(t)),
            DefinitionKind::Implements(imp) => {
                out.push_str(&format!("{} implements {};", imp.target, imp.implements));
            }
        }
        out
    }

    fn header(&self, keyword: &str, name: &str, partial: bool, inheritance: Option<&str>) -> String {
        let mut header = String::new();
        if partial {
            header.push_str("partial ");
        }
        header.push_str(keyword);
        header.push(' ');
        header.push_str(name);
        if let Some(base) = inheritance {
            header.push_str(" : ");
            header.push_str(base);
        }
        header
    }

    fn block(&self, header: &str, members: &[Member], closing: &[Trivia]) -> String {
        let body: String = members.iter().map(|m| self.write_member(m)).collect();
        format!("{} {{{}{}}};", header, body, trivia(closing))
    }

    fn write_enum(&self, e: &Enum) -> String {
        let mut out = format!("enum {} {{", e.name);
        for (i, value) in e.values.iter().enumerate() {
            out.push_str(&trivia(&value.leading));
            out.push_str(&format!("\"{}\"", value.value));
            out.push_str(&trivia(&value.trailing));
            if i + 1 < e.values.len() || e.trailing_comma {
                out.push(',');
            }
        }
        out.push_str(&trivia(&e.closing));
        out.push_str("};");
        out
    }

    fn write_typedef(&self, t: &Typedef) -> String {
        format!(
            "typedef {}{} {};",
            self.write_ext_attrs(&t.type_ext_attrs, &t.after_type_attrs),
            t.ty,
            t.name
        )
    }

    pub fn write_member(&self, member: &Member) -> String {
        let mut out = trivia(&member.leading);
        out.push_str(&self.write_ext_attrs(&member.ext_attrs, &member.after_attrs));

        let text = match &member.kind {
            MemberKind::Const(c) => format!("const {} {} = {};", c.ty, c.name, c.value),
            MemberKind::Field(field) => {
                let required = if field.required { "required " } else { "" };
                match &field.default {
                    Some(value) => format!("{}{} {} = {};", required, field.ty, field.name, value),
                    None => format!("{}{} {};", required, field.ty, field.name),
                }
            }
            MemberKind::Attribute(attr) => self.write_attribute(attr),
            MemberKind::Operation(op) => self.write_operation(op),
            MemberKind::Iterator(it) => match &it.object {
                None => format!("{} iterator;", it.return_type),
                Some(IteratorObject::Object) => format!("{} iterator object;", it.return_type),
                Some(IteratorObject::Named(name)) => {
                    format!("{} iterator = {};", it.return_type, name)
                }
            },
            MemberKind::Serializer(s) => self.write_serializer(s),
            MemberKind::Iterable(it) => {
                let types: Vec<String> = it.types.iter().map(ToString::to_string).collect();
                let readonly = if it.readonly { "readonly " } else { "" };
                format!("{}{}<{}>;", readonly, it.kind.as_str(), types.join(", "))
            }
            MemberKind::Typedef(t) => self.write_typedef(t),
        };
        out.push_str(&text);
        out
    }

    fn write_attribute(&self, attr: &Attribute) -> String {
        let mut out = String::new();
        for (set, keyword) in [
            (attr.is_static, "static "),
            (attr.stringifier, "stringifier "),
            (attr.inherit, "inherit "),
            (attr.readonly, "readonly "),
        ] {
            if set {
                out.push_str(keyword);
            }
        }
        out.push_str(&format!("attribute {} {};", attr.ty, attr.name));
        out
    }

    fn write_operation(&self, op: &Operation) -> String {
        let Some(return_type) = &op.return_type else {
            return "stringifier;".to_string();
        };

        let mut out = String::new();
        for keyword in op.specials.keywords() {
            out.push_str(keyword);
            out.push(' ');
        }
        if op.stringifier {
            out.push_str("stringifier ");
        }
        if op.is_static {
            out.push_str("static ");
        }
        out.push_str(&self.signature(return_type, op.name.as_deref(), &op.arguments));
        out
    }

    /// `T name(args);`
    fn signature(&self, ty: &Type, name: Option<&str>, args: &[Argument]) -> String {
        match name {
            Some(name) => format!("{} {}({});", ty, name, self.write_arguments(args)),
            None => format!("{}({});", ty, self.write_arguments(args)),
        }
    }

    fn write_serializer(&self, s: &Serializer) -> String {
        match s {
            Serializer::Bare => "serializer;".to_string(),
            Serializer::Named { name } => format!("serializer = {};", name),
            Serializer::PatternMap { names } => format!("serializer = {{{}}};", names.join(", ")),
            Serializer::PatternList { names } => format!("serializer = [{}];", names.join(", ")),
            Serializer::Operation { return_type, name, arguments } => {
                format!("serializer {}", self.signature(return_type, name.as_deref(), arguments))
            }
        }
    }

    pub fn write_arguments(&self, args: &[Argument]) -> String {
        let mut out = String::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                out.push_str(if arg.leading.is_empty() { ", " } else { "," });
            }
            out.push_str(&self.write_argument(arg));
        }
        out
    }

    fn write_argument(&self, arg: &Argument) -> String {
        let mut out = trivia(&arg.leading);
        out.push_str(&self.write_ext_attrs(&arg.ext_attrs, &arg.after_attrs));
        if arg.optional {
            out.push_str("optional ");
        }
        out.push_str(&arg.ty.to_string());
        if arg.variadic {
            out.push_str("...");
        }
        out.push(' ');
        out.push_str(&arg.name);
        if let Some(value) = &arg.default {
            out.push_str(&format!(" = {}", value));
        }
        out.push_str(&trivia(&arg.trailing));
        out
    }

    /// `[A, B=C]` plus the trivia that followed it, or a single space.
    fn write_ext_attrs(&self, attrs: &[ExtendedAttribute], after: &[Trivia]) -> String {
        if attrs.is_empty() {
            return trivia(after);
        }
        let list: Vec<String> = attrs.iter().map(|a| self.write_ext_attr(a)).collect();
        let gap = if after.is_empty() { " ".to_string() } else { trivia(after) };
        format!("[{}]{}", list.join(", "), gap)
    }

    fn write_ext_attr(&self, attr: &ExtendedAttribute) -> String {
        let mut out = attr.name.clone();
        match &attr.rhs {
            Some(ExtAttrRhs::Identifier(id)) => {
                out.push('=');
                out.push_str(id);
            }
            Some(ExtAttrRhs::IdentifierList(ids)) => {
                out.push_str(&format!("=({})", ids.join(",")));
            }
            None => {}
        }
        match &attr.params {
            Some(ExtAttrParams::Arguments(args)) => {
                out.push_str(&format!("({})", self.write_arguments(args)));
            }
            Some(ExtAttrParams::TypePair(key, value)) => {
                out.push_str(&format!("({}, {})", key, value));
            }
            None => {}
        }
        out
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

fn trivia(items: &[Trivia]) -> String {
    items.iter().map(ToString::to_string).collect()
}

/// Convenience function for writing definitions
pub fn write(definitions: &[Definition]) -> String {
    Writer::new().write(definitions)
}
