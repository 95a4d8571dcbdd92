//! Markdown format tests

mod export;
