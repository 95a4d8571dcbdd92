//! HTML serialization (cxt → HTML export)
//!
//! Pipeline: cxt Document → resolved copy → fragments → wrapped document.

use crate::error::FormatError;
use cxt_core::render::html::escape;
use cxt_core::Document;

/// Options for HTML serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the fragments in a complete HTML document
    pub standalone: bool,
    /// `<title>` of a standalone document
    pub title: Option<String>,
    /// Stylesheet inlined into a standalone document
    pub custom_css: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            title: None,
            custom_css: None,
        }
    }
}

impl HtmlOptions {
    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Serialize a cxt document to HTML
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> Result<String, FormatError> {
    let fragments = cxt_core::render(doc)?;

    let mut html = String::new();
    if options.standalone {
        html.push_str("<!DOCTYPE html>\n<html><head>\n<meta charset=\"utf-8\">\n");
        if let Some(title) = &options.title {
            html.push_str(&format!("<title>{}</title>\n", escape(title)));
        }
        if let Some(css) = &options.custom_css {
            html.push_str(&format!("<style>\n{}\n</style>\n", css.trim_end()));
        }
        html.push_str("</head><body>\n");
    }
    for fragment in &fragments {
        html.push_str(fragment);
        html.push('\n');
    }
    if options.standalone {
        html.push_str("</body></html>\n");
    }
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_document() {
        let doc = cxt_core::parse("[h1]Hi[/]\ntext").unwrap();
        let html = serialize_to_html(&doc, &HtmlOptions::default()).unwrap();
        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html><head>\n<meta charset=\"utf-8\">\n</head><body>\n\
             <h1>Hi</h1>\n text\n</body></html>\n"
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let doc = cxt_core::parse("x").unwrap();
        let options = HtmlOptions::default().with_title("a < b".to_string());
        let html = serialize_to_html(&doc, &options).unwrap();
        assert!(html.contains("<title>a &lt; b</title>"));
    }

    #[test]
    fn test_render_errors_surface() {
        let doc = cxt_core::parse("@nowhere").unwrap();
        let err = serialize_to_html(&doc, &HtmlOptions::default()).unwrap_err();
        assert!(matches!(err, FormatError::SerializationError(_)));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        let options = HtmlOptions {
            standalone: false,
            ..HtmlOptions::default()
        };
        assert_eq!(serialize_to_html(&doc, &options).unwrap(), "");
    }
}
