mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestWorkspace, DICTIONARY, INTERFACE, PARTIAL};
use predicates::prelude::*;

#[test]
fn test_help() {
    let mut cmd = cargo_bin_cmd!("idl-index");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Merged, pretty-printed WebIDL index builder"));
}

#[test]
fn test_render_file() {
    let ws = TestWorkspace::new();
    let file = ws.file("d.webidl", DICTIONARY);

    ws.command()
        .arg("render")
        .arg(&file)
        .assert()
        .success()
        .stdout("dictionary D {\n    long      a;\n    DOMString bb;\n};\n\n");
}

#[test]
fn test_render_stdin() {
    let ws = TestWorkspace::new();

    ws.command()
        .arg("render")
        .write_stdin("enum E {\"a\",\"b\"};")
        .assert()
        .success()
        .stdout("enum E {\n    \"a\",\n    \"b\"\n};\n\n");
}

#[test]
fn test_render_merges_fragments_in_order() {
    let ws = TestWorkspace::new();
    let a = ws.file("a.webidl", INTERFACE);
    let b = ws.file("b.webidl", PARTIAL);

    ws.command()
        .arg("render")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("attribute long x;\n    void f();"))
        .stdout(predicate::str::contains("partial").not());
}

#[test]
fn test_render_no_merge_keeps_partials() {
    let ws = TestWorkspace::new();
    let a = ws.file("a.webidl", INTERFACE);
    let b = ws.file("b.webidl", PARTIAL);

    ws.command()
        .args(["render", "--no-merge"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("partial interface Foo {"));
}

#[test]
fn test_render_raw() {
    let ws = TestWorkspace::new();
    let file = ws.file("d.webidl", DICTIONARY);

    ws.command()
        .args(["build", "--raw"])
        .arg(&file)
        .assert()
        .success()
        .stdout("dictionary D {long a;DOMString bb;};\n");
}

#[test]
fn test_render_to_file() {
    let ws = TestWorkspace::new();
    let file = ws.file("d.webidl", DICTIONARY);

    ws.command()
        .arg("render")
        .arg(&file)
        .args(["-o", "index.webidl"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Wrote IDL index for 1 fragment(s)"));

    assert!(ws.read("index.webidl").starts_with("dictionary D {\n"));
}

#[test]
fn test_render_reports_orphan_partial() {
    let ws = TestWorkspace::new();
    let file = ws.file("p.webidl", PARTIAL);

    ws.command()
        .arg("render")
        .arg(&file)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains(
            "Partial definition comes before the real one (Foo)",
        ));
}

#[test]
fn test_parse_json() {
    let ws = TestWorkspace::new();
    let a = ws.file("a.webidl", INTERFACE);
    let b = ws.file("b.webidl", PARTIAL);

    let output = ws.command().arg("parse").arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let defs = json.as_array().unwrap();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0]["type"], "interface");
    assert_eq!(defs[0]["name"], "Foo");
    assert_eq!(defs[1]["partial"], true);

    let output = ws.command().args(["parse", "--merged"]).arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let defs = json.as_array().unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0]["members"].as_array().unwrap().len(), 2);
}

#[test]
fn test_check_valid() {
    let ws = TestWorkspace::new();
    let a = ws.file("a.webidl", INTERFACE);
    let b = ws.file("b.webidl", PARTIAL);

    ws.command()
        .arg("check")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("interface Foo (1 members)"))
        .stdout(predicate::str::contains("partial interface Foo"))
        .stdout(predicate::str::contains("2 fragment(s), 1 definition(s) after merging 1 partial(s)"))
        .stdout(predicate::str::contains("All fragments are valid"));
}

#[test]
fn test_check_invalid_names_the_fragment() {
    let ws = TestWorkspace::new();
    let good = ws.file("good.webidl", INTERFACE);
    let bad = ws.file("bad.webidl", "\ninterface Bar { unknownkeyword bar; };");

    ws.command()
        .arg("validate")
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.webidl at line 2"))
        .stderr(predicate::str::contains("Unknown member"));
}

#[test]
fn test_check_strict_rejects_orphan_partial() {
    let ws = TestWorkspace::new();
    let file = ws.file("p.webidl", PARTIAL);

    ws.command().arg("check").arg(&file).assert().success();

    ws.command()
        .args(["check", "--strict"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 partial definition(s) could not be merged"));
}

#[test]
fn test_dialect_flags() {
    let ws = TestWorkspace::new();
    let file = ws.file("c.webidl", "class Foo extends Bar { attribute long x; };");

    ws.command().arg("check").arg(&file).assert().failure();

    ws.command()
        .args(["check", "--allow-class", "--allow-extends"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("class Foo : Bar"));
}

#[test]
fn test_config_file_in_working_directory() {
    let ws = TestWorkspace::new();
    ws.config("allow_class = true\npretty = false\n");
    let file = ws.file("c.webidl", "class Foo { };");

    ws.command()
        .arg("render")
        .arg(&file)
        .assert()
        .success()
        .stdout("class Foo {};\n");
}

#[test]
fn test_explicit_config_file() {
    let ws = TestWorkspace::new();
    let config = ws.file("custom.toml", "merge_partials = false\n");
    let a = ws.file("a.webidl", INTERFACE);
    let b = ws.file("b.webidl", PARTIAL);

    ws.command()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("partial interface Foo"));
}

#[test]
fn test_invalid_config_file() {
    let ws = TestWorkspace::new();
    ws.config("pretty = \"yes\"\n");
    let file = ws.file("d.webidl", DICTIONARY);

    ws.command()
        .arg("render")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"))
        .stderr(predicate::str::contains("Suggestion:"));
}

#[test]
fn test_tokens() {
    let ws = TestWorkspace::new();
    let file = ws.file("t.webidl", "typedef long\nT;");

    ws.command()
        .arg("tokens")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("identifier  \"typedef\""))
        .stdout(predicate::str::contains("   2  identifier  \"T\""))
        .stdout(predicate::str::contains("other       \";\""))
        .stdout(predicate::str::contains("6 token(s)"));
}

#[test]
fn test_missing_file() {
    let ws = TestWorkspace::new();

    ws.command()
        .args(["render", "missing.webidl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read missing.webidl"));
}
