//! Line scanning and the paragraph state machine.
//!
//! Raw newlines and spaces never reach a body directly. A single newline
//! inside a paragraph becomes one space, two in a row emit one literal `\n`,
//! and leading spaces of a line are dropped.

use super::Parser;
use crate::ast::{Attrs, Text, TextAttrs};
use crate::error::Result;

/// Paragraph state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pg {
    /// At a line start outside any paragraph.
    NotPg,
    /// Accumulating paragraph text.
    InPg,
    /// Saw one newline; the next line decides.
    EndPgMaybe,
}

/// Outcome of scanning one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineEnd {
    /// A `[/]` closed the current scope.
    pub closed: bool,
    pub pg: Pg,
}

fn is_ident(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

impl Parser<'_> {
    /// Parse the remainder of a line, or up to a `[/]`.
    pub(crate) fn parse_line(&mut self, mut pg: Pg) -> Result<LineEnd> {
        while let Some(c) = self.next_byte() {
            if c == b' ' && pg == Pg::NotPg {
                continue;
            }
            if c == b'\r' && self.peek() == Some(b'\n') {
                continue;
            }
            if c == b'\n' {
                pg = match pg {
                    Pg::NotPg => Pg::NotPg,
                    Pg::InPg => Pg::EndPgMaybe,
                    Pg::EndPgMaybe => {
                        self.body.push(b'\n');
                        Pg::NotPg
                    }
                };
                return Ok(LineEnd { closed: false, pg });
            }
            if pg == Pg::EndPgMaybe {
                if c == b' ' {
                    continue;
                }
                self.body.push(b' ');
            }
            pg = Pg::InPg;

            match c {
                b'`' => {
                    let cmd = self.new_cmd("`");
                    self.parse_code(cmd)?;
                }
                b'[' => {
                    let cmd = self.parse_cmd()?;
                    if cmd.name == "/" {
                        return Ok(LineEnd { closed: true, pg });
                    }
                    self.do_cmd(cmd)?;
                }
                b'@' => self.parse_at(),
                _ => self.body.push(c),
            }
        }
        Ok(LineEnd { closed: false, pg })
    }

    /// `@name` is a variable reference; a lone `@` is literal.
    fn parse_at(&mut self) {
        if !self.peek().is_some_and(is_ident) {
            self.body.push(b'@');
            return;
        }
        self.handle_body();
        let start = self.pos;
        while self.peek().is_some_and(is_ident) {
            self.pos += 1;
        }
        let name = String::from_utf8_lossy(&self.buf[start..self.pos]).into_owned();
        log::trace!("line {}: variable reference @{name}", self.line);
        self.frame
            .out
            .push(Text::with_attrs(name, TextAttrs::get(), Attrs::new()).into());
    }
}
