//! Rendering: variable resolution, then HTML emission
//!
//! [`render`] never touches the document it is given. It resolves a copy,
//! so the same parsed document can be rendered again or dumped unresolved
//! by other formats.

pub mod html;
pub mod variables;

use crate::ast::{Document, Element};
use crate::error::Result;
use variables::{collect, Resolver};

/// Resolve every variable reference in `elements` in place.
pub fn resolve(elements: &mut [Element]) -> Result<()> {
    let vars = collect(elements)?;
    log::debug!("resolving with {} variables", vars.len());
    Resolver::new(&vars).substitute(elements)
}

/// One HTML fragment per top-level element.
pub fn render(doc: &Document) -> Result<Vec<String>> {
    let mut elements = doc.elements.clone();
    resolve(&mut elements)?;
    let fragments = elements
        .iter()
        .map(html::html_element)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("rendered {} fragments", fragments.len());
    Ok(fragments)
}

/// Parse and render `src` into one HTML body, fragments one per line.
pub fn to_html(src: &str) -> Result<String> {
    let doc = crate::parser::parse(src)?;
    Ok(render(&doc)?.join("\n"))
}
