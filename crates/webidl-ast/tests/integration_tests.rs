use webidl_ast::{
    combine_fragments, pretty_print_webidl, render, render_index, Error, ParseOptions,
    RenderOptions,
};

#[test]
fn test_partial_dictionary_end_to_end() {
    let output = pretty_print_webidl(
        "dictionary D { long a; DOMString bb; }; partial dictionary D { boolean c; };",
    )
    .unwrap();
    assert_eq!(
        output,
        "dictionary D {\n    long      a;\n    DOMString bb;\n    boolean   c;\n};\n\n"
    );
}

#[test]
fn test_render_index_joins_fragments() {
    let fragments = [
        "interface Foo {\n  attribute long a;\n};",
        "partial interface Foo {\n  void f();\n};",
        "enum E { \"x\", \"y\" };",
    ];
    let rendered = render_index(&fragments, &RenderOptions::default()).unwrap();
    assert!(rendered.warnings.is_empty());
    assert_eq!(
        rendered.text,
        "interface Foo {\n    attribute long a;\n    void f();\n};\n\nenum E {\n    \"x\",\n    \"y\"\n};\n\n"
    );
}

#[test]
fn test_combine_fragments() {
    assert_eq!(combine_fragments(&["a", "b", "c"], "\n"), "a\nb\nc");
    assert_eq!(combine_fragments(&[String::from("a")], "--"), "a");
    assert_eq!(combine_fragments::<&str>(&[], "\n"), "");
}

#[test]
fn test_orphan_partial_still_renders_the_rest() {
    let rendered = render(
        "partial dictionary Missing { long a; }; dictionary D { long b; };",
        &RenderOptions::default(),
    )
    .unwrap();
    assert_eq!(rendered.text, "dictionary D {\n    long b;\n};\n\n");
    assert_eq!(rendered.warnings.len(), 1);
    assert_eq!(rendered.warnings[0].name, "Missing");
}

#[test]
fn test_render_stages_can_be_skipped() {
    let options = RenderOptions { merge_partials: false, pretty: false, ..RenderOptions::default() };
    let rendered =
        render("dictionary D { long a; }; partial dictionary D { long b; };", &options).unwrap();
    assert_eq!(rendered.text, "dictionary D {long a;};\npartial dictionary D {long b;};");
}

#[test]
fn test_render_keeps_comments_with_trivia() {
    let options = RenderOptions { parse: ParseOptions::with_trivia(), ..RenderOptions::default() };
    let rendered = render(
        "// Sizes\ndictionary D {\n  // width\n  long w;\n  unsigned long h;\n};",
        &options,
    )
    .unwrap();
    assert_eq!(
        rendered.text,
        "// Sizes\ndictionary D {\n    // width\n    long          w;\n    unsigned long h;\n};\n\n"
    );
}

#[test]
fn test_parse_error_propagates() {
    let err = pretty_print_webidl("interface Foo { unknownkeyword bar; };").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.line(), 1);
    assert!(err.to_string().starts_with("Parse error: Unknown member, line 1"));
}

#[test]
fn test_lex_error_propagates() {
    let err = pretty_print_webidl("interface Foo {\n\u{7}};").unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.line(), 2);
}

#[test]
fn test_output_is_stable_under_repeated_rendering() {
    let input = "interface A { attribute long a; }; dictionary B { short s; longertype t; };";
    let once = pretty_print_webidl(input).unwrap();
    let twice = pretty_print_webidl(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_tree_serializes_to_tagged_json() {
    let program = webidl_ast::parse(
        "partial dictionary D { required long a; };",
        ParseOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&program.definitions).unwrap();

    let def = &json[0];
    assert_eq!(def["type"], "dictionary");
    assert_eq!(def["name"], "D");
    assert_eq!(def["partial"], true);

    let member = &def["members"][0];
    assert_eq!(member["type"], "field");
    assert_eq!(member["name"], "a");
    assert_eq!(member["required"], true);
    assert_eq!(member["idlType"]["kind"]["kind"], "primitive");
    assert_eq!(member["idlType"]["kind"]["value"], "long");
    assert!(member.get("leading").is_none());
}
