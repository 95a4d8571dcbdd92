use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn inspect_defaults_to_ast_tag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.cxt");
    fs::write(&input, "hi @name").unwrap();

    let mut cmd = cargo_bin_cmd!("cxt");
    cmd.current_dir(dir.path()).arg("inspect").arg(input.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<document>"))
        .stdout(predicate::str::contains("<text flags=\"get\">name</text>"));
}

#[test]
fn inspect_html_fragments() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.cxt");
    fs::write(&input, "a[t hide]secret[/]b").unwrap();

    let mut cmd = cargo_bin_cmd!("cxt");
    cmd.current_dir(dir.path())
        .arg("inspect")
        .arg(input.as_os_str())
        .arg("html-fragments");

    let output = cmd.assert().success().get_output().stdout.clone();
    let fragments: Vec<String> = serde_json::from_slice(&output).unwrap();
    assert_eq!(fragments, vec!["a", "", "b"]);
}

#[test]
fn inspect_show_attrs_override() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.cxt");
    fs::write(&input, "[t note=yes]x[/]").unwrap();

    let mut cmd = cargo_bin_cmd!("cxt");
    cmd.current_dir(dir.path())
        .arg("inspect")
        .arg(input.as_os_str())
        .arg("ast-tag")
        .arg("--extra-show-attrs")
        .arg("false");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("note=").not());
}

#[test]
fn inspect_rejects_unknown_transform() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.cxt");
    fs::write(&input, "x").unwrap();

    let mut cmd = cargo_bin_cmd!("cxt");
    cmd.current_dir(dir.path())
        .arg("inspect")
        .arg(input.as_os_str())
        .arg("token-json");
    cmd.assert().failure();
}

#[test]
fn list_transforms() {
    let mut cmd = cargo_bin_cmd!("cxt");
    cmd.arg("--list-transforms");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ast-tag"))
        .stdout(predicate::str::contains("html-fragments"))
        .stdout(predicate::str::contains("markdown"));
}
