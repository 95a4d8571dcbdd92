//! cxt format implementation
//!
//! The markup itself, as a parse-only format. Parsing delegates to
//! `cxt-core`; there is no serializer back to markup.

use crate::error::FormatError;
use crate::format::Format;
use cxt_core::Document;

/// Format implementation for cxt source files
pub struct CxtFormat;

impl Format for CxtFormat {
    fn name(&self) -> &str {
        "cxt"
    }

    fn description(&self) -> &str {
        "cxt documentation markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["cxt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(cxt_core::parse(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cxt_format_parse_simple() {
        let doc = CxtFormat.parse("Hello [b]world[b]\n").unwrap();
        assert_eq!(doc.elements.len(), 2);
    }

    #[test]
    fn test_cxt_format_parse_error_has_line() {
        let err = CxtFormat.parse("one\ntwo [t]\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::ParseError("line 3: Unclosed [/]".to_string())
        );
    }
}
