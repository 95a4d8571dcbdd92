//! XML-like tree tag serialization
//!
//! Dumps the parsed, unresolved element tree: variable references still
//! appear as `get` leaves and definitions keep their `set` attribute.
//!
//! ## Format
//!
//! - Text leaf → `<text>` with the escaped body as content
//! - Container → `<cont>` with its children nested and indented
//! - Set flags → a `flags` attribute listing their short names
//! - Attribute map → one XML attribute per entry; boolean attributes have
//!   the value `true` and references are written `@name`
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <text>See </text>
//!   <cont flags="t" set="goo" r="http://x.com">
//!     <text r="http://x.com">http://x.com</text>
//!   </cont>
//!   <text flags="get">goo</text>
//! </document>
//! ```

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use cxt_core::{AttrValue, Attrs, Document, Element};
use std::collections::HashMap;

/// Escape XML special characters; newlines become character references
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "&#10;")
}

fn attr_value(value: &AttrValue) -> String {
    match value {
        AttrValue::Flag => "true".to_string(),
        AttrValue::Value(Element::Text(t)) if t.text_attrs.get => format!("@{}", t.body),
        AttrValue::Value(Element::Text(t)) => t.body.clone(),
        AttrValue::Value(Element::Cont(c)) => c
            .children
            .iter()
            .filter_map(Element::as_text)
            .map(|t| t.body.as_str())
            .collect(),
    }
}

fn tag_attrs(flags: String, attrs: &Attrs, show_attrs: bool) -> String {
    let mut out = String::new();
    if !flags.is_empty() {
        out.push_str(&format!(" flags=\"{flags}\""));
    }
    if show_attrs {
        for (key, value) in attrs {
            out.push_str(&format!(
                " {}=\"{}\"",
                escape_xml(key),
                escape_xml(&attr_value(value))
            ));
        }
    }
    out
}

fn format_element(el: &Element, indent_level: usize, show_attrs: bool, out: &mut String) {
    let indent = "  ".repeat(indent_level);
    match el {
        Element::Text(t) => {
            let attrs = tag_attrs(t.text_attrs.to_string(), &t.attrs, show_attrs);
            out.push_str(&format!(
                "{indent}<text{attrs}>{}</text>\n",
                escape_xml(&t.body)
            ));
        }
        Element::Cont(c) => {
            let attrs = tag_attrs(c.cont_attrs.to_string(), &c.attrs, show_attrs);
            if c.children.is_empty() {
                out.push_str(&format!("{indent}<cont{attrs}></cont>\n"));
                return;
            }
            out.push_str(&format!("{indent}<cont{attrs}>\n"));
            for child in &c.children {
                format_element(child, indent_level + 1, show_attrs, out);
            }
            out.push_str(&format!("{indent}</cont>\n"));
        }
    }
}

/// Serialize a document to tag format
pub fn serialize_document(doc: &Document, show_attrs: bool) -> String {
    let mut result = String::from("<document>\n");
    for el in &doc.elements {
        format_element(el, 1, show_attrs, &mut result);
    }
    result.push_str("</document>");
    result
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like dump of the element tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc, true))
    }

    /// Accepts `show-attrs` (default true).
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let show_attrs = bool_option(options, "show-attrs", true)?;
        Ok(serialize_document(doc, show_attrs))
    }
}
