//! CLI-specific transforms
//!
//! This module defines the views available to `cxt inspect`. Each transform
//! is a stage + format combination (e.g., "ast-tag", "html-fragments").
//!
//! ## Stages
//!
//! 1. **Parsing** - Source text → element tree (variables unresolved)
//!    - `ast-tag`: XML-like tag format
//!    - `ast-json`: JSON representation
//!
//! 2. **Rendering** - Element tree → resolved HTML fragments
//!    - `html-fragments`: JSON array with one string per top-level element,
//!      so empty fragments and embedded newlines stay visible
//!
//! ## Extra Parameters
//!
//! - `show-attrs`: "false" hides attribute maps in `ast-tag` output
//!
//! Example: `cxt inspect notes.cxt ast-tag --extra-show-attrs false`

use cxt_babel::formats::tag::serialize_document;
use cxt_babel::parse_bool;
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &["ast-tag", "ast-json", "html-fragments"];

pub const DEFAULT_TRANSFORM: &str = "ast-tag";

/// Execute a named transform on cxt source with optional extra parameters
///
/// Returns the transformed output, or the error message to report.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let doc = cxt_core::parse(source).map_err(|e| e.to_string())?;
    log::debug!("inspect: running {transform_name}");

    match transform_name {
        "ast-tag" => {
            let show_attrs = match extra_params.get("show-attrs") {
                Some(raw) => parse_bool(raw)
                    .ok_or_else(|| format!("Invalid boolean value '{raw}' for show-attrs"))?,
                None => true,
            };
            Ok(format!("{}\n", serialize_document(&doc, show_attrs)))
        }
        "ast-json" => serde_json::to_string_pretty(&doc)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "html-fragments" => {
            let fragments = cxt_core::render(&doc).map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&fragments)
                .map(|json| format!("{json}\n"))
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        other => Err(format!("Unknown transform: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, transform: &str) -> Result<String, String> {
        execute_transform(source, transform, &HashMap::new())
    }

    #[test]
    fn ast_tag_shows_unresolved_tree() {
        let output = run("hi @name", "ast-tag").unwrap();
        assert!(output.starts_with("<document>\n"));
        assert!(output.contains("<text flags=\"get\">name</text>"));
        assert!(output.ends_with("</document>\n"));
    }

    #[test]
    fn ast_tag_respects_show_attrs() {
        let mut params = HashMap::new();
        params.insert("show-attrs".to_string(), "false".to_string());
        let output = execute_transform("[t a=1]x[/]", "ast-tag", &params).unwrap();
        assert!(!output.contains("a=\"1\""));

        params.insert("show-attrs".to_string(), "off".to_string());
        let output = execute_transform("[t a=1]x[/]", "ast-tag", &params).unwrap();
        assert!(!output.contains("a=\"1\""));

        params.insert("show-attrs".to_string(), "perhaps".to_string());
        assert!(execute_transform("x", "ast-tag", &params).is_err());
    }

    #[test]
    fn ast_json_is_valid_json() {
        let output = run("[b]x[b]", "ast-json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["elements"][0]["text_attrs"]["bold"], true);
    }

    #[test]
    fn html_fragments_lists_each_top_level_element() {
        let output = run("a[t hide]secret[/]b", "html-fragments").unwrap();
        let fragments: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(fragments, vec!["a", "", "b"]);
    }

    #[test]
    fn parse_errors_carry_the_line() {
        let err = run("ok\n[b]x[/]", "ast-tag").unwrap_err();
        assert!(err.starts_with("line 2:"), "{err}");
    }

    #[test]
    fn render_errors_are_reported() {
        let err = run("@nope", "html-fragments").unwrap_err();
        assert!(err.contains("nope"), "{err}");
    }

    #[test]
    fn unknown_transform_fails() {
        assert!(run("x", "token-json").is_err());
    }
}
