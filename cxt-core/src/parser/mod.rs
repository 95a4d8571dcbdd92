//! Recursive-descent parser for cxt markup
//!
//! The parser walks the input one line at a time (see [`line`]), reading
//! `[...]` commands as it meets them and dispatching on their name. Blocks
//! opened by a command (`[t]`, `["]`, `[h1]`, `[+]`) push a new scope
//! [`Frame`] and run until the matching `[/]`; closing pops the frame and
//! appends the finished container to the parent's output.
//!
//! Text is not emitted character by character: it accumulates in a single
//! pending body buffer that is flushed into a [`Text`] leaf whenever a
//! command, a scope boundary or the end of input is reached.
//!
//! Errors are fatal and carry the line the scanner was on.

mod command;
mod line;
mod list;
mod scanner;

use crate::ast::{AttrValue, Attrs, Cont, ContAttrs, Document, Element, Text, TextAttrs};
use crate::error::{Error, ErrorKind, Result};
use command::{Cmd, CmdKind};
use line::Pg;

/// Parse a complete document.
pub fn parse(src: &str) -> Result<Document> {
    log::debug!("parsing {} bytes", src.len());
    let mut parser = Parser::new(src);
    let elements = parser.parse_document()?;
    log::debug!("parsed {} top-level elements", elements.len());
    Ok(Document::new(elements))
}

/// One level of recursive parsing state.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    /// Toggles applied to text flushed in this scope.
    pub text_attrs: TextAttrs,
    /// Ambient attributes copied onto every text leaf flushed in this scope.
    pub attrs: Attrs,
    pub out: Vec<Element>,
}

impl Frame {
    fn new(text_attrs: TextAttrs, attrs: Attrs) -> Self {
        Self {
            text_attrs,
            attrs,
            out: Vec::new(),
        }
    }
}

pub(crate) struct Parser<'a> {
    buf: &'a [u8],
    pos: usize,
    /// 1-based line of the cursor.
    line: usize,
    body: Vec<u8>,
    frame: Frame,
    stack: Vec<Frame>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            buf: src.as_bytes(),
            pos: 0,
            line: 1,
            body: Vec::new(),
            frame: Frame::default(),
            stack: Vec::new(),
        }
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> Error {
        Error::at_line(kind, self.line)
    }

    /// Flush the pending body into a text leaf of the current frame.
    pub(crate) fn handle_body(&mut self) {
        if self.body.is_empty() {
            return;
        }
        let body = String::from_utf8_lossy(&self.body).into_owned();
        self.body.clear();
        self.frame.out.push(
            Text::with_attrs(body, self.frame.text_attrs, self.frame.attrs.clone()).into(),
        );
    }

    fn recurse(&mut self, frame: Frame) {
        self.handle_body();
        let parent = std::mem::replace(&mut self.frame, frame);
        self.stack.push(parent);
        log::trace!("line {}: push frame (depth {})", self.line, self.stack.len());
    }

    /// Pop the current frame, returning it finished.
    fn unrecurse(&mut self) -> Result<Frame> {
        self.handle_body();
        let parent = self
            .stack
            .pop()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedClose))?;
        log::trace!("line {}: pop frame (depth {})", self.line, self.stack.len());
        Ok(std::mem::replace(&mut self.frame, parent))
    }

    /// Parse lines until the input ends or a `[/]` closes the scope.
    ///
    /// Returns whether a `[/]` was met.
    fn parse_lines(&mut self, mut pg: Pg) -> Result<bool> {
        while self.not_eof() {
            let end = self.parse_line(pg)?;
            if end.closed {
                return Ok(true);
            }
            pg = end.pg;
        }
        Ok(false)
    }

    /// Run `frame` as a nested scope up to its `[/]` and return its output.
    fn parse_scope(&mut self, frame: Frame, pg: Pg) -> Result<Vec<Element>> {
        self.recurse(frame);
        if !self.parse_lines(pg)? {
            return Err(self.error(ErrorKind::UnclosedBlock));
        }
        Ok(self.unrecurse()?.out)
    }

    fn parse_document(&mut self) -> Result<Vec<Element>> {
        if self.parse_lines(Pg::NotPg)? {
            return Err(self.error(ErrorKind::UnexpectedClose));
        }
        self.handle_body();
        Ok(std::mem::take(&mut self.frame.out))
    }

    /// Execute a command.
    pub(crate) fn do_cmd(&mut self, cmd: Cmd) -> Result<()> {
        let kind = CmdKind::classify(&cmd.name).map_err(|kind| self.error(kind))?;
        log::trace!("line {}: [{}] as {:?}", self.line, cmd.name, kind);
        match kind {
            CmdKind::Empty => {}
            CmdKind::Code | CmdKind::Backtick => self.parse_code(cmd)?,
            CmdKind::Text => self.parse_text(cmd)?,
            CmdKind::Toggle(toggle) => {
                self.handle_body();
                toggle.apply(&mut self.frame.text_attrs);
            }
            CmdKind::List => self.parse_list(cmd)?,
            CmdKind::Quote => self.parse_block(cmd, ContAttrs::quote())?,
            CmdKind::Header(cont_attrs) => self.parse_block(cmd, cont_attrs)?,
            CmdKind::Reference => self.parse_reference(cmd)?,
            CmdKind::Newline => self.body.push(b'\n'),
            CmdKind::Space => self.body.push(b' '),
            CmdKind::At => self.body.push(b'@'),
        }
        Ok(())
    }

    /// Verbatim code: `` `...` `` or `[c]...[c]`, `[##]...[##]` etc.
    pub(crate) fn parse_code(&mut self, mut cmd: Cmd) -> Result<()> {
        self.handle_body();
        cmd.text_attrs.code = true;
        let end = if cmd.name == "`" {
            b"`".to_vec()
        } else {
            format!("[{}]", cmd.name).into_bytes()
        };
        let code = self.until(&end)?;
        let code = String::from_utf8_lossy(&code).into_owned();
        self.frame
            .out
            .push(Text::with_attrs(code, cmd.text_attrs, cmd.attrs).into());
        Ok(())
    }

    /// `[t ...]...[/]`: an inline span whose attributes reach every child.
    fn parse_text(&mut self, cmd: Cmd) -> Result<()> {
        let Cmd {
            text_attrs,
            mut cont_attrs,
            attrs: cmd_attrs,
            ..
        } = cmd;
        let mut attrs = self.frame.attrs.clone();
        attrs.extend(cmd_attrs);
        // only the span itself defines the variable
        let mut ambient = attrs.clone();
        ambient.remove("set");

        let children = self.parse_scope(Frame::new(text_attrs, ambient), Pg::InPg)?;
        cont_attrs.text = true;
        self.frame
            .out
            .push(Cont::new(children, cont_attrs, attrs).into());
        Ok(())
    }

    /// Quote and heading blocks.
    fn parse_block(&mut self, mut cmd: Cmd, cont_attrs: ContAttrs) -> Result<()> {
        let frame = Frame::new(cmd.text_attrs, self.frame.attrs.clone());
        let children = self.parse_scope(frame, Pg::NotPg)?;
        cmd.cont_attrs = cont_attrs;
        self.frame
            .out
            .push(Cont::new(children, cmd.cont_attrs, cmd.attrs).into());
        Ok(())
    }

    /// `[r]target[/]`: a link whose label is its own target.
    fn parse_reference(&mut self, mut cmd: Cmd) -> Result<()> {
        self.handle_body();
        let raw = self.until(b"[/]")?;
        let target = String::from_utf8_lossy(&raw).into_owned();

        let mut attrs = self.frame.attrs.clone();
        attrs.insert("r".to_string(), AttrValue::text(target.clone()));
        let label = Text::with_attrs(target.clone(), cmd.text_attrs, attrs);

        cmd.attrs.insert("r".to_string(), AttrValue::text(target));
        cmd.cont_attrs.text = true;
        self.frame
            .out
            .push(Cont::new(vec![label.into()], cmd.cont_attrs, cmd.attrs).into());
        Ok(())
    }
}
