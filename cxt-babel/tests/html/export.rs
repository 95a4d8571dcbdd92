//! Export tests for HTML format (cxt → HTML)

use crate::common::{convert, convert_with};

fn fragment(src: &str) -> String {
    convert_with(src, "html", &[("standalone", "false")]).unwrap()
}

// ============================================================================
// DOCUMENT WRAPPER
// ============================================================================

#[test]
fn test_standalone_wrapper() {
    let html = convert("[h1]Title[/]", "html").unwrap();
    assert_eq!(
        html,
        "<!DOCTYPE html>\n<html><head>\n<meta charset=\"utf-8\">\n</head><body>\n\
         <h1>Title</h1>\n</body></html>\n"
    );
}

#[test]
fn test_title_is_escaped() {
    let html = convert_with("x", "html", &[("title", "A & B")]).unwrap();
    assert!(html.contains("<title>A &amp; B</title>"));
}

#[test]
fn test_empty_title_is_omitted() {
    let html = convert_with("x", "html", &[("title", "")]).unwrap();
    assert!(!html.contains("<title>"));
}

#[test]
fn test_fragments_one_per_line() {
    assert_eq!(
        fragment("[h1]Title[/][\"]quoted[/]\n\nafter"),
        "<h1>Title</h1>\n<blockquote>quoted</blockquote>\n<p>after\n"
    );
}

// ============================================================================
// CONTENT
// ============================================================================

#[test]
fn test_inline_formatting() {
    assert_eq!(
        fragment("[u][~]gone[~][u]"),
        "<u><s>gone</s></u>\n"
    );
}

#[test]
fn test_paragraphs() {
    assert_eq!(fragment("one\ntwo\n\nthree"), "one two<p>three\n");
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        fragment("[+]\n1. a\n3. b\n[/]"),
        "<ol><li value=\"1\">a</li><li value=\"3\">b</li></ol>\n"
    );
}

#[test]
fn test_reference_through_variable() {
    let html = fragment("[r set=goo]http://x.com[/]\n\nSee @goo.");
    assert!(html.contains("<a href=\"http://x.com\">http://x.com</a>"));
    assert!(!html.contains("goo"));
    assert_eq!(html.matches("<a ").count(), 1);
}
