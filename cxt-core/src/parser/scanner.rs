//! Byte cursor primitives.
//!
//! The parser works on raw bytes: every delimiter of the markup is ASCII, so
//! multi-byte UTF-8 sequences pass through untouched and bodies stay valid
//! UTF-8. Every consumed `\n` bumps the line counter, including the ones
//! swallowed by [`Parser::until`].

use super::Parser;
use crate::error::{ErrorKind, Result};

/// Bytes that always form a token on their own inside `[...]`.
const TOKEN_SPECIAL: [u8; 3] = [b'[', b']', b'='];

pub(crate) fn is_special(c: u8) -> bool {
    TOKEN_SPECIAL.contains(&c)
}

impl Parser<'_> {
    pub(crate) fn not_eof(&self) -> bool {
        self.pos < self.buf.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Option<u8> {
        self.buf.get(self.pos + offset).copied()
    }

    /// Consume one byte.
    pub(crate) fn next_byte(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        if c == b'\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eof(&self, waiting_for: &str) -> crate::Error {
        self.error(ErrorKind::UnexpectedEof(waiting_for.to_string()))
    }

    /// Consume exactly the byte `c`.
    pub(crate) fn expect(&mut self, c: u8) -> Result<()> {
        match self.next_byte() {
            None => Err(self.eof(&char::from(c).to_string())),
            Some(found) if found == c => Ok(()),
            Some(found) => Err(self.error(ErrorKind::Syntax(format!(
                "expected {} found {}.",
                char::from(c),
                char::from(found)
            )))),
        }
    }

    /// Consume bytes up to and including `delim`, returning what came before it.
    pub(crate) fn until(&mut self, delim: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        while !out.ends_with(delim) {
            match self.next_byte() {
                Some(c) => out.push(c),
                None => return Err(self.eof(&String::from_utf8_lossy(delim))),
            }
        }
        out.truncate(out.len() - delim.len());
        Ok(out)
    }

    /// Read one token inside a command.
    ///
    /// Leading whitespace is skipped. `[`, `]` and `=` are returned as
    /// single-byte tokens; anything else runs until whitespace, one of those
    /// three bytes (left unconsumed) or the end of input.
    pub(crate) fn cmd_token(&mut self) -> Result<Vec<u8>> {
        let mut token = Vec::new();
        while let Some(c) = self.peek() {
            if token.is_empty() {
                if c <= b' ' {
                    self.next_byte();
                    continue;
                }
                if is_special(c) {
                    self.next_byte();
                    token.push(c);
                    break;
                }
            }
            if c <= b' ' || is_special(c) {
                break;
            }
            self.next_byte();
            token.push(c);
        }
        if token.is_empty() {
            return Err(self.eof("]"));
        }
        Ok(token)
    }
}
