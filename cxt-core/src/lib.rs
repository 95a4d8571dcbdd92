//! Core of the cxt documentation markup
//!
//! cxt is a small bracket-delimited markup: `[b]bold[b]`, `` `code` ``,
//! `[t attr=value]spans[/]`, `[h1]headers[/]`, `["]quotes[/]`, `[+]` lists and
//! named variables (`[t set=name]...[/]` defines, `@name` uses).
//!
//! This crate holds the element tree ([`ast`]), the parser ([`parser`]) and
//! the renderer ([`render`]) that resolves variables and emits HTML. It does
//! no I/O; file handling and output wrapping live in `cxt-babel` and the CLI.
//!
//! ```text
//! source --parse--> Document --resolve--> Document --html--> fragments
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod render;

pub use ast::{AttrValue, Attrs, Cont, ContAttrs, Document, Element, Text, TextAttrs};
pub use error::{Error, ErrorKind, Result};
pub use parser::parse;
pub use render::{render, to_html};
