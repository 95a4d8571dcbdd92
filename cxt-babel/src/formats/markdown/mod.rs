//! Markdown format implementation
//!
//! Export only. Markdown renderers pass block-level HTML through untouched,
//! so a cxt document is written as its rendered HTML fragments, each one a
//! separate block. Empty fragments (hidden elements and variable
//! definitions) are dropped so they don't leave runs of blank lines.

use crate::error::FormatError;
use crate::format::Format;
use cxt_core::Document;

/// Format implementation for Markdown files embedding rendered HTML
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with rendered HTML blocks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let blocks: Vec<String> = cxt_core::render(doc)?
            .into_iter()
            .filter(|fragment| !fragment.is_empty())
            .collect();
        if blocks.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{}\n", blocks.join("\n\n")))
    }
}
