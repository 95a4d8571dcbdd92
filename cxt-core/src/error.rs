//! Error types for parsing and rendering
//!
//! Every error is fatal: a malformed document fails the whole operation and
//! no partial output is produced. Parser errors record the 1-based line the
//! scanner was on; render errors have no source position.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unexpected EoF waiting for: {0}")]
    UnexpectedEof(String),
    #[error("{0}")]
    Syntax(String),
    #[error("Unclosed [/]")]
    UnclosedBlock,
    #[error("Unexpected [/]")]
    UnexpectedClose,
    #[error("variable '{0}' is defined more than once")]
    DuplicateVariable(String),
    #[error("variable '{0}' is never defined")]
    UnresolvedVariable(String),
    #[error("variable '{0}' used as an attribute must be a single text value")]
    InvalidVariableUsage(String),
    #[error("list mixes ordered and unordered items")]
    InconsistentListOrdering,
    #[error("variable '{0}' refers to itself")]
    RecursiveVariable(String),
}

/// An [`ErrorKind`] with the line it was raised on, when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub line: Option<usize>,
}

impl Error {
    pub fn at_line(kind: ErrorKind, line: usize) -> Self {
        Self {
            kind,
            line: Some(line),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_parse_error(&self) -> bool {
        self.line.is_some()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, line: None }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
