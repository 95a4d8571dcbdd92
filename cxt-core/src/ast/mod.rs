//! Element model produced by the parser and consumed by the renderer.

mod attrs;
mod element;

pub use attrs::{ContAttrs, TextAttrs};
pub use element::{AttrValue, Attrs, Cont, Document, Element, Text};
