//! Export tests for Markdown format (cxt → Markdown with HTML blocks)

use crate::common::convert;

#[test]
fn test_blocks_are_separated() {
    let md = convert("[h1]Title[/][\"]quoted[/]", "markdown").unwrap();
    assert_eq!(md, "<h1>Title</h1>\n\n<blockquote>quoted</blockquote>\n");
}

#[test]
fn test_hidden_content_leaves_no_gaps() {
    let md = convert("a[t hide]secret[/]b", "markdown").unwrap();
    assert_eq!(md, "a\n\nb\n");
}

#[test]
fn test_markdown_is_not_parseable() {
    let registry = cxt_babel::FormatRegistry::with_defaults();
    assert!(registry.parse("# title", "markdown").is_err());
}
