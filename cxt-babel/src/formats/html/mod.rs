//! HTML format implementation
//!
//! Export only. The document is rendered by `cxt-core` into one fragment per
//! top-level element (variables resolved, definitions suppressed); this
//! module decides how those fragments are wrapped.
//!
//! # Element Mapping Table
//!
//! | cxt                      | HTML                                   |
//! |--------------------------|----------------------------------------|
//! | `[b]` `[i]` `[u]` `[~]`  | `<b>` `<i>` `<u>` `<s>`                |
//! | `` `code` `` / `[c]`     | `<code>`, or `<pre>` when multi-line   |
//! | `[t]...[/]`              | `<span>`                               |
//! | `[h1]`..`[h3]`           | `<h1>`..`<h3>`                         |
//! | `["]`                    | `<blockquote>`                         |
//! | `[+]` with `*`/checkbox  | `<ul><li>`                             |
//! | `[+]` with `1.`          | `<ol><li value="1">`                   |
//! | `[r]url[/]`              | `<a href="url">url</a>`                |
//! | paragraph break          | `<p>` marker between lines             |
//!
//! # Output Modes
//!
//! - Standalone (default): a complete document with `<!DOCTYPE html>`, a
//!   `<head>` carrying the charset, the optional title and optional CSS, and
//!   the fragments one per line inside `<body>`.
//! - Fragment (`standalone=false`): the fragments alone, one per line.
//!
//! # Options
//!
//! `serialize_with_options` accepts `standalone` (bool), `title` and
//! `css-path` (a stylesheet inlined into `<style>`).

mod serializer;

pub use serializer::{serialize_to_html, HtmlOptions};

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use cxt_core::Document;
use std::collections::HashMap;

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Bare fragments, no document wrapper
    pub fn fragment() -> Self {
        Self::new(HtmlOptions {
            standalone: false,
            ..HtmlOptions::default()
        })
    }

    fn options_from(&self, params: &HashMap<String, String>) -> Result<HtmlOptions, FormatError> {
        let mut options = self.options.clone();
        options.standalone = bool_option(params, "standalone", options.standalone)?;
        if let Some(title) = params.get("title") {
            options.title = Some(title.clone()).filter(|t| !t.is_empty());
        }
        if let Some(path) = params.get("css-path").filter(|p| !p.is_empty()) {
            let css = std::fs::read_to_string(path).map_err(|e| {
                FormatError::SerializationError(format!("Failed to read CSS '{path}': {e}"))
            })?;
            options.custom_css = Some(css);
        }
        for key in params.keys() {
            if !matches!(key.as_str(), "standalone" | "title" | "css-path") {
                log::warn!("html: ignoring unknown option '{key}'");
            }
        }
        Ok(options)
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML document or fragments"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_to_html(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        serialize_to_html(doc, &self.options_from(options)?)
    }
}
