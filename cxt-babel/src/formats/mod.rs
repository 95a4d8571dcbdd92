//! Format implementations
//!
//! This module contains all format implementations that convert between
//! cxt documents and their text representations.

pub mod cxt;
pub mod html;
pub mod json;
pub mod markdown;
pub mod tag;

pub use cxt::CxtFormat;
pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use tag::TagFormat;
