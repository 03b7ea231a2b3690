use proptest::prelude::*;
use webidl_ast::pretty_print;

#[test]
fn test_dictionary_alignment() {
    let output = pretty_print("dictionary D {short a;longertype b;};");
    assert_eq!(output, "dictionary D {\n    short      a;\n    longertype b;\n};\n\n");
}

#[test]
fn test_dictionary_alignment_after_attribute_with_bracket_string() {
    let output = pretty_print(
        "[Foo(optional DOMString a = \"]\")] dictionary D {long a; DOMString bb;};",
    );
    assert_eq!(
        output,
        "[Foo(optional DOMString a = \"]\")] dictionary D {\n    long      a;\n    DOMString bb;\n};\n\n"
    );
}

#[test]
fn test_dictionary_defaults_and_multiword_types() {
    let output = pretty_print(
        "dictionary D : Base {required unsigned long long size;boolean flag = false;DOMString s = \"a; b\";};",
    );
    assert_eq!(
        output,
        "dictionary D : Base {\n\
         \x20   required unsigned long long size;\n\
         \x20   boolean                     flag = false;\n\
         \x20   DOMString                   s = \"a; b\";\n\
         };\n\n"
    );
}

#[test]
fn test_enum_values_one_per_line() {
    let output = pretty_print("enum Color {\"red\",\"green\",\"blue\"};");
    assert_eq!(output, "enum Color {\n    \"red\",\n    \"green\",\n    \"blue\"\n};\n\n");
}

#[test]
fn test_enum_trailing_comma_dropped() {
    let output = pretty_print("enum E {\"a\",\"b\",};");
    assert_eq!(output, "enum E {\n    \"a\",\n    \"b\"\n};\n\n");
}

#[test]
fn test_interface_members_one_per_line() {
    let output = pretty_print(
        "[Exposed=Window] interface Foo : Bar {attribute long a;void f(long x, optional long y = 1);serializer = {a, b};};",
    );
    assert_eq!(
        output,
        "[Exposed=Window] interface Foo : Bar {\n\
         \x20   attribute long a;\n\
         \x20   void f(long x, optional long y = 1);\n\
         \x20   serializer = {a, b};\n\
         };\n\n"
    );
}

#[test]
fn test_statements_without_body() {
    let output = pretty_print("typedef long T;\ncallback C = void(long a);\nA implements B;");
    assert_eq!(
        output,
        "typedef long T;\n\ncallback C = void(long a);\n\nA implements B;\n\n"
    );
}

#[test]
fn test_several_blocks() {
    let output = pretty_print("dictionary A {long a;};\nenum B {\"x\"};");
    assert_eq!(output, "dictionary A {\n    long a;\n};\n\nenum B {\n    \"x\"\n};\n\n");
}

#[test]
fn test_empty_body() {
    assert_eq!(pretty_print("interface Foo {};"), "interface Foo {\n};\n\n");
}

#[test]
fn test_comments_kept_on_their_own_lines() {
    let output = pretty_print("// Header\ndictionary D {\n  // first\n  long a;\n  /* second */ DOMString bb;\n};");
    assert_eq!(
        output,
        "// Header\ndictionary D {\n    // first\n    long      a;\n    /* second */\n    DOMString bb;\n};\n\n"
    );
}

#[test]
fn test_trailing_text_kept() {
    assert_eq!(pretty_print("typedef long T; // end"), "typedef long T;\n\n// end\n");
}

#[test]
fn test_empty_input() {
    assert_eq!(pretty_print(""), "");
    assert_eq!(pretty_print("  \n"), "");
}

#[test]
fn test_pretty_print_is_idempotent_on_samples() {
    let samples = [
        "dictionary D {short a;longertype b;};",
        "enum E {\"a\",\"b\",};",
        "interface Foo {attribute long a;getter DOMString(unsigned long i);};",
        "typedef long T;\ncallback C = void();",
        "// c\ndictionary D {\n  // x\n  long a = 1;\n};",
    ];
    for sample in samples {
        let once = pretty_print(sample);
        assert_eq!(pretty_print(&once), once, "{}", sample);
    }
}

fn member() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "long",
            "short",
            "DOMString",
            "unsigned long long",
            "sequence<long>",
            "(Foo or Bar)?",
            "record<DOMString, long>",
        ]),
        "[a-z][a-zA-Z0-9]{0,8}",
        prop::option::of(prop::sample::select(vec!["0", "true", "\"x;y\"", "[]"])),
    )
        .prop_map(|(ty, name, default)| match default {
            Some(value) => format!("{} {} = {};", ty, name, value),
            None => format!("{} {};", ty, name),
        })
}

proptest! {
    #[test]
    fn dictionary_layout_is_idempotent(
        members in prop::collection::vec(member(), 0..8),
        spacing in "[ \n]{0,3}",
    ) {
        let text = format!("dictionary D {{{}{}}};", spacing, members.join(&spacing));
        let once = pretty_print(&text);
        prop_assert_eq!(pretty_print(&once), once);
    }

    #[test]
    fn enum_layout_is_idempotent(values in prop::collection::vec("[a-z ]{0,6}", 1..6)) {
        let quoted: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
        let text = format!("enum E {{{}}};", quoted.join(","));
        let once = pretty_print(&text);
        prop_assert_eq!(pretty_print(&once), once);
    }
}
