use webidl_ast::ast::Definition;
use webidl_ast::{merge_partials, ParseOptions, Parser};

fn definitions(input: &str) -> Vec<Definition> {
    Parser::parse_str(input, ParseOptions::default()).unwrap().definitions
}

fn member_names(def: &Definition) -> Vec<&str> {
    def.members().unwrap().iter().filter_map(|m| m.name()).collect()
}

#[test]
fn test_partial_members_are_appended() {
    let merged = merge_partials(definitions(
        "dictionary D { long a; long b; }; partial dictionary D { long c; };",
    ));
    assert!(merged.warnings.is_empty());
    assert_eq!(merged.definitions.len(), 1);
    assert_eq!(member_names(&merged.definitions[0]), vec!["a", "b", "c"]);
    assert!(!merged.definitions[0].is_partial());
}

#[test]
fn test_several_partials_keep_source_order() {
    let merged = merge_partials(definitions(
        "interface A { void a(); };
         interface B { void b(); };
         partial interface A { void a2(); };
         partial interface B { void b2(); };
         partial interface A { void a3(); };",
    ));
    let names: Vec<&str> = merged.definitions.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(member_names(&merged.definitions[0]), vec!["a", "a2", "a3"]);
    assert_eq!(member_names(&merged.definitions[1]), vec!["b", "b2"]);
}

#[test]
fn test_orphan_partial_is_dropped_with_warning() {
    let merged = merge_partials(definitions(
        "partial interface Early { void x(); }; interface Early { void y(); }; enum E { \"a\" };",
    ));
    assert_eq!(merged.definitions.len(), 2);
    assert_eq!(member_names(&merged.definitions[0]), vec!["y"]);
    assert_eq!(merged.warnings.len(), 1);
    assert_eq!(merged.warnings[0].name, "Early");
    assert_eq!(
        merged.warnings[0].to_string(),
        "Partial definition comes before the real one (Early)"
    );
}

#[test]
fn test_partial_of_memberless_definition_is_dropped() {
    let merged = merge_partials(definitions("enum D { \"a\" }; partial dictionary D { long b; };"));
    assert_eq!(merged.definitions.len(), 1);
    assert_eq!(merged.warnings.len(), 1);
}

#[test]
fn test_implements_statement_does_not_capture_partial() {
    let merged = merge_partials(definitions(
        "A implements B;\ninterface A { void a(); };\npartial interface A { void b(); };",
    ));
    assert!(merged.warnings.is_empty());
    assert_eq!(merged.definitions.len(), 2);
    assert_eq!(merged.definitions[0].keyword(), "implements");
    assert_eq!(member_names(&merged.definitions[1]), vec!["a", "b"]);
}

#[test]
fn test_partial_attributes_are_not_copied() {
    let merged = merge_partials(definitions(
        "interface A {}; [Exposed=Window] partial interface A { attribute long x; };",
    ));
    assert!(merged.definitions[0].ext_attrs.is_empty());
    assert_eq!(member_names(&merged.definitions[0]), vec!["x"]);
}

#[test]
fn test_merge_without_partials_is_identity() {
    let defs = definitions("typedef long T; interface A { void f(); }; A implements B;");
    let merged = merge_partials(defs.clone());
    assert_eq!(merged.definitions, defs);
    assert!(merged.warnings.is_empty());
}
