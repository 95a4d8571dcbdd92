//! Tree dump formats (tag and json) used by `cxt inspect`

use crate::common::{convert, convert_with};

#[test]
fn test_tag_keeps_variables_unresolved() {
    let tag = convert("see @name", "tag").unwrap();
    assert!(tag.starts_with("<document>\n"));
    assert!(tag.contains("<text flags=\"get\">name</text>"));
}

#[test]
fn test_tag_without_attrs() {
    let tag = convert_with("[t a=1]x[/]", "tag", &[("show-attrs", "no")]).unwrap();
    assert!(tag.contains("<cont flags=\"t\">"));
    assert!(!tag.contains("a=\"1\""));
}

#[test]
fn test_tag_rejects_bad_bool() {
    assert!(convert_with("x", "tag", &[("show-attrs", "sometimes")]).is_err());
}

#[test]
fn test_json_does_not_resolve() {
    // An unresolved reference is fine for a dump.
    let json = convert("see @missing", "json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["elements"][1]["body"], "missing");
}

#[test]
fn test_json_rejects_options() {
    assert!(convert_with("x", "json", &[("pretty", "true")]).is_err());
}
