//! Text-level layout of written definitions.
//!
//! Works on the writer's output rather than on the tree: statements are
//! split on top-level `;`, a statement with a `{ ... }` body becomes a block
//! and the body is laid out one entry per line. Dictionary members get their
//! types aligned in a column. Strings, comments and nested brackets are
//! never split.

/// Pretty printer for WebIDL text
pub struct PrettyPrinter {
    indent: usize,
}

enum Entry<'a> {
    Comment(&'a str),
    Field { ty: String, name: &'a str, default: Option<&'a str> },
    Decl(&'a str),
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self { indent: 4 }
    }

    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    pub fn print(&self, text: &str) -> String {
        let mut pieces = split_top_level(text, ';');
        let rest = pieces.pop().unwrap_or_default();

        let mut out = String::new();
        for statement in pieces {
            match split_block(statement) {
                Some((header, body)) => {
                    out.push_str(header);
                    out.push_str(" {\n");
                    out.push_str(&self.print_body(definition_keyword(header), body));
                    out.push_str("};\n\n");
                }
                None => {
                    let statement = statement.trim();
                    if !statement.is_empty() {
                        out.push_str(statement);
                        out.push_str(";\n\n");
                    }
                }
            }
        }

        let rest = rest.trim();
        if !rest.is_empty() {
            out.push_str(rest);
            out.push('\n');
        }
        out
    }

    fn print_body(&self, keyword: &str, body: &str) -> String {
        match keyword {
            "dictionary" => self.print_entries(body_entries(body, ';', true), ";"),
            "enum" => self.print_enum(body),
            _ => self.print_entries(body_entries(body, ';', false), ";"),
        }
    }

    fn print_entries(&self, entries: Vec<Entry<'_>>, terminator: &str) -> String {
        let indent = " ".repeat(self.indent);
        let width = entries
            .iter()
            .filter_map(|e| match e {
                Entry::Field { ty, .. } => Some(ty.chars().count()),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for entry in entries {
            out.push_str(&indent);
            match entry {
                Entry::Comment(comment) => {
                    out.push_str(comment);
                    out.push('\n');
                    continue;
                }
                Entry::Field { ty, name, default } => {
                    if ty.is_empty() {
                        out.push_str(name);
                    } else {
                        out.push_str(&format!("{:<width$} {}", ty, name, width = width));
                    }
                    if let Some(value) = default {
                        out.push_str(" = ");
                        out.push_str(value);
                    }
                }
                Entry::Decl(decl) => out.push_str(decl),
            }
            out.push_str(terminator);
            out.push('\n');
        }
        out
    }

    fn print_enum(&self, body: &str) -> String {
        let indent = " ".repeat(self.indent);
        let entries = body_entries(body, ',', false);
        let last_value = entries.iter().rposition(|e| matches!(e, Entry::Decl(_)));

        let mut out = String::new();
        for (i, entry) in entries.iter().enumerate() {
            out.push_str(&indent);
            match entry {
                Entry::Comment(comment) => out.push_str(comment),
                Entry::Decl(value) | Entry::Field { name: value, .. } => {
                    out.push_str(value);
                    if Some(i) != last_value {
                        out.push(',');
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a body on top-level `sep` into comment and declaration entries.
fn body_entries(body: &str, sep: char, fields: bool) -> Vec<Entry<'_>> {
    let mut entries = Vec::new();
    for piece in split_top_level(body, sep) {
        let (comments, decl) = split_leading_comments(piece);
        entries.extend(comments.into_iter().map(Entry::Comment));
        if decl.is_empty() {
            continue;
        }
        entries.push(if fields { field_entry(decl) } else { Entry::Decl(decl) });
    }
    entries
}

/// `type words name = default`; the name is the last word before `=`.
fn field_entry(decl: &str) -> Entry<'_> {
    let (declaration, default) = match top_level_positions(decl, |c| c == '=').first() {
        Some(&at) => (&decl[..at], Some(decl[at + 1..].trim())),
        None => (decl, None),
    };
    let mut words: Vec<&str> = declaration.split_whitespace().collect();
    let name = words.pop().unwrap_or_default();
    Entry::Field { ty: words.join(" "), name, default }
}

/// `header { body }` with the outer braces removed; `None` for statements
/// without a body.
fn split_block(statement: &str) -> Option<(&str, &str)> {
    let open = *top_level_positions(statement, |c| c == '{').first()?;
    let body = statement[open + 1..].trim_end().strip_suffix('}')?;
    Some((statement[..open].trim(), body))
}

/// The definition keyword of a block header, skipping comments, extended
/// attributes and `partial`.
fn definition_keyword(header: &str) -> &str {
    let (_, mut rest) = split_leading_comments(header);
    if rest.starts_with('[') {
        // The next top-level character after the opening `[` is the first
        // one past its closing `]`.
        let after = top_level_positions(rest, |c| !c.is_whitespace())
            .get(1)
            .copied()
            .unwrap_or(rest.len());
        rest = &rest[after..];
    }
    if let Some(after) = rest.strip_prefix("partial") {
        rest = after.trim_start();
    }
    let end = rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_')).unwrap_or(rest.len());
    &rest[..end]
}

/// Comments at the start of `text`, and the trimmed remainder.
fn split_leading_comments(text: &str) -> (Vec<&str>, &str) {
    let mut comments = Vec::new();
    let mut rest = text.trim_start();
    loop {
        if rest.starts_with("//") {
            let end = rest.find('\n').unwrap_or(rest.len());
            comments.push(rest[..end].trim_end());
            rest = rest[end..].trim_start();
        } else if rest.starts_with("/*") {
            let end = rest[2..].find("*/").map_or(rest.len(), |at| at + 4);
            comments.push(&rest[..end]);
            rest = rest[end..].trim_start();
        } else {
            return (comments, rest.trim_end());
        }
    }
}

/// Split on `sep` outside strings, comments and brackets. The last piece is
/// whatever follows the final separator.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for at in top_level_positions(text, |c| c == sep) {
        pieces.push(&text[start..at]);
        start = at + sep.len_utf8();
    }
    pieces.push(&text[start..]);
    pieces
}

/// Byte offsets of characters accepted by `wanted` that sit outside
/// strings, comments and `()`, `[]`, `{}` nesting. An opening bracket at
/// the top level is itself reported.
fn top_level_positions(text: &str, wanted: impl Fn(char) -> bool) -> Vec<usize> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let next_is = |i: usize, c: char| chars.get(i + 1).is_some_and(|&(_, n)| n == c);

    let mut positions = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < chars.len() {
        let (at, ch) = chars[i];
        match ch {
            '"' => {
                i += 1;
                while i < chars.len() && chars[i].1 != '"' {
                    i += 1;
                }
            }
            '/' if next_is(i, '/') => {
                while i < chars.len() && chars[i].1 != '\n' {
                    i += 1;
                }
                continue;
            }
            '/' if next_is(i, '*') => {
                i += 2;
                while i < chars.len() && !(chars[i].1 == '*' && next_is(i, '/')) {
                    i += 1;
                }
                i += 1;
            }
            '(' | '[' | '{' => {
                if depth == 0 && wanted(ch) {
                    positions.push(at);
                }
                depth += 1;
            }
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {
                if depth == 0 && wanted(ch) {
                    positions.push(at);
                }
            }
        }
        i += 1;
    }
    positions
}

/// Convenience function for pretty printing
pub fn pretty_print(text: &str) -> String {
    PrettyPrinter::new().print(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_top_level_ignores_nested() {
        let pieces = split_top_level("a(b;c);d \"e;f\";g", ';');
        assert_eq!(pieces, vec!["a(b;c)", "d \"e;f\"", "g"]);
    }

    #[test]
    fn test_split_top_level_ignores_comments() {
        let pieces = split_top_level("a // x;y\n;b /* ; */;", ';');
        assert_eq!(pieces, vec!["a // x;y\n", "b /* ; */", ""]);
    }

    #[test]
    fn test_definition_keyword() {
        assert_eq!(definition_keyword("dictionary D"), "dictionary");
        assert_eq!(definition_keyword("partial dictionary D"), "dictionary");
        assert_eq!(definition_keyword("[Exposed=(A,B)] interface I : J"), "interface");
        assert_eq!(definition_keyword("// note\n[A] partial interface I"), "interface");
        assert_eq!(definition_keyword("callback interface C"), "callback");
        assert_eq!(definition_keyword("[A] /* c */ dictionary D"), "dictionary");
    }

    #[test]
    fn test_definition_keyword_skips_brackets_in_strings() {
        assert_eq!(
            definition_keyword("[Foo(optional DOMString a = \"]\")] dictionary D"),
            "dictionary"
        );
    }

    #[test]
    fn test_split_leading_comments() {
        let (comments, rest) = split_leading_comments("\n  // one\n  /* two */ long a");
        assert_eq!(comments, vec!["// one", "/* two */"]);
        assert_eq!(rest, "long a");
    }

    #[test]
    fn test_field_entry_with_default() {
        match field_entry("required unsigned long long size = 0x10") {
            Entry::Field { ty, name, default } => {
                assert_eq!(ty, "required unsigned long long");
                assert_eq!(name, "size");
                assert_eq!(default, Some("0x10"));
            }
            _ => panic!("expected a field"),
        }
    }

    #[test]
    fn test_field_entry_ignores_attribute_equals() {
        match field_entry("[Exposed=Window] long a") {
            Entry::Field { ty, name, default } => {
                assert_eq!(ty, "[Exposed=Window] long");
                assert_eq!(name, "a");
                assert_eq!(default, None);
            }
            _ => panic!("expected a field"),
        }
    }

    #[test]
    fn test_custom_indent() {
        let printer = PrettyPrinter::with_indent(2);
        assert_eq!(printer.print("enum E {\"a\",\"b\"};"), "enum E {\n  \"a\",\n  \"b\"\n};\n\n");
    }
}
