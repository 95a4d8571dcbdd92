//! JSON tree serialization
//!
//! Pretty-printed `serde_json` dump of the unresolved element tree, for
//! tooling that wants the structure without scraping the tag format.

use crate::error::FormatError;
use crate::format::Format;
use cxt_core::Document;

/// Format implementation for the JSON tree dump
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON dump of the element tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
