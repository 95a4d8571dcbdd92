//! Shared helpers: run cxt source through the default registry.

use cxt_babel::{FormatError, FormatRegistry};
use std::collections::HashMap;

pub fn convert(src: &str, format: &str) -> Result<String, FormatError> {
    convert_with(src, format, &[])
}

pub fn convert_with(
    src: &str,
    format: &str,
    options: &[(&str, &str)],
) -> Result<String, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let doc = registry.parse(src, "cxt")?;
    let options: HashMap<String, String> = options
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    registry.serialize_with_options(&doc, format, &options)
}

#[test]
fn test_registry_lists_all_formats() {
    let registry = FormatRegistry::with_defaults();
    for name in ["cxt", "html", "json", "markdown", "tag"] {
        assert!(registry.has(name), "missing format {name}");
    }
}

#[test]
fn test_parse_errors_surface_as_format_errors() {
    let err = convert("[b]x[/]", "html").unwrap_err();
    assert!(matches!(err, FormatError::ParseError(_)));
}

#[test]
fn test_render_errors_surface_as_serialization_errors() {
    let err = convert("see @missing", "html").unwrap_err();
    assert!(matches!(err, FormatError::SerializationError(_)));
}
