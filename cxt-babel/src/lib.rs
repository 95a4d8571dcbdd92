//! Multi-format output for cxt documents
//!
//!     This crate provides a uniform interface for turning cxt source into the formats the
//!     toolchain emits (HTML, Markdown, and tree dumps for inspection).
//!
//!     This is a pure lib, that is, it powers the cxt CLI but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it to std print, env vars etc.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   └── <format>
//!     │       └── mod.rs
//!     └── lib.rs
//!
//! Formats
//!
//!     Every format implements the Format trait: a name, file extensions, and parse() and/or
//!     serialize(). The cxt markup is itself a (parse-only) format, so converting a file is
//!     always `registry.parse(src, "cxt")` followed by `registry.serialize(doc, target)`.
//!
//!     - cxt:      the markup (parse)
//!     - html:     standalone document or bare fragments (serialize)
//!     - markdown: rendered HTML blocks in a .md file (serialize)
//!     - tag:      XML-like dump of the unresolved tree (serialize)
//!     - json:     JSON dump of the unresolved tree (serialize)
//!
//!     Rendering formats (html, markdown) resolve variables on a copy of the document; the
//!     dump formats show the tree exactly as parsed.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::{parse_bool, Format};
pub use registry::FormatRegistry;
