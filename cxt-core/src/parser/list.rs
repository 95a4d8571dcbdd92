//! `[+]` lists.
//!
//! Each line may start with a bullet: `*`, a numeral followed by `.`, or a
//! checkbox `[ ]` / `[X]` / `[x]`. A line without one continues the current
//! item. Reading a new bullet seals everything parsed since the previous one
//! into a list-item container.

use super::command::Cmd;
use super::line::Pg;
use super::{Frame, Parser};
use crate::ast::{AttrValue, Attrs, Cont, ContAttrs, Element};
use crate::error::{ErrorKind, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Bullet {
    Star,
    /// Digits of the numeral, without the `.`.
    Num(String),
    Unchecked,
    Checked,
}

impl Bullet {
    fn item(self, children: Vec<Element>) -> Cont {
        let mut cont_attrs = ContAttrs::default();
        let mut attrs = Attrs::new();
        match self {
            Bullet::Star => cont_attrs.star = true,
            Bullet::Num(value) => {
                cont_attrs.num = true;
                attrs.insert("value".to_string(), AttrValue::text(value));
            }
            Bullet::Unchecked => cont_attrs.nochk = true,
            Bullet::Checked => cont_attrs.chk = true,
        }
        Cont::new(children, cont_attrs, attrs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListToken {
    Bullet(Bullet),
    /// `[/]` at the start of a line.
    Close,
    /// No bullet; the line continues the current item.
    Text,
}

impl Parser<'_> {
    fn list_token(&mut self) -> Result<ListToken> {
        while self.peek() == Some(b' ') {
            self.next_byte();
        }
        let token = match self.peek() {
            Some(b'*') => {
                self.next_byte();
                ListToken::Bullet(Bullet::Star)
            }
            Some(c) if c.is_ascii_digit() => self.list_num(),
            Some(b'[') => self.list_box()?,
            _ => ListToken::Text,
        };
        Ok(token)
    }

    /// Digits are a bullet only when a `.` follows; otherwise nothing is consumed.
    fn list_num(&mut self) -> ListToken {
        let start = self.pos;
        let mut end = start;
        while self.buf.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if self.buf.get(end) != Some(&b'.') {
            return ListToken::Text;
        }
        let digits = String::from_utf8_lossy(&self.buf[start..end]).into_owned();
        self.pos = end + 1;
        ListToken::Bullet(Bullet::Num(digits))
    }

    /// `[` at a line start: a checkbox, the closing `[/]`, or an ordinary
    /// command left for the line parser.
    fn list_box(&mut self) -> Result<ListToken> {
        let token = match (self.peek_at(1), self.peek_at(2)) {
            (Some(b'/'), _) => {
                self.pos += 2;
                self.expect(b']')?;
                return Ok(ListToken::Close);
            }
            (Some(b' '), Some(b']')) => ListToken::Bullet(Bullet::Unchecked),
            (Some(b'X' | b'x'), Some(b']')) => ListToken::Bullet(Bullet::Checked),
            _ => return Ok(ListToken::Text),
        };
        self.pos += 3;
        Ok(token)
    }

    /// Seal the output gathered since `bullet` into an item.
    fn start_bullet(&mut self, items: &mut Vec<Element>, bullet: Option<Bullet>) -> Result<()> {
        self.handle_body();
        let children = std::mem::take(&mut self.frame.out);
        match bullet {
            Some(bullet) => items.push(bullet.item(children).into()),
            None if children.is_empty() => {}
            None => {
                return Err(self.error(ErrorKind::Syntax(
                    "list content before the first bullet".to_string(),
                )))
            }
        }
        Ok(())
    }

    pub(crate) fn parse_list(&mut self, cmd: Cmd) -> Result<()> {
        let frame = Frame::new(cmd.text_attrs, self.frame.attrs.clone());
        self.recurse(frame);

        let mut items = Vec::new();
        let mut bullet = None;
        let mut pg = Pg::NotPg;
        let mut closed = false;
        while self.not_eof() {
            match self.list_token()? {
                ListToken::Close => {
                    closed = true;
                    break;
                }
                ListToken::Bullet(next) => {
                    self.start_bullet(&mut items, bullet.replace(next))?;
                    pg = Pg::NotPg;
                }
                ListToken::Text => {}
            }
            let end = self.parse_line(pg)?;
            if end.closed {
                closed = true;
                break;
            }
            pg = end.pg;
        }
        if !closed {
            return Err(self.error(ErrorKind::UnclosedBlock));
        }
        self.start_bullet(&mut items, bullet)?;
        self.unrecurse()?;

        log::trace!("line {}: list with {} items", self.line, items.len());
        let mut cont_attrs = cmd.cont_attrs;
        cont_attrs.list = true;
        self.frame
            .out
            .push(Cont::new(items, cont_attrs, cmd.attrs).into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Text;
    use crate::parser::parse;

    fn list(src: &str) -> Cont {
        let doc = parse(src).unwrap();
        assert_eq!(doc.elements.len(), 1, "{:?}", doc.elements);
        doc.elements[0].as_cont().unwrap().clone()
    }

    fn bodies(item: &Element) -> Vec<&str> {
        item.as_cont()
            .unwrap()
            .children
            .iter()
            .map(|c| c.as_text().unwrap().body.as_str())
            .collect()
    }

    #[test]
    fn star_items() {
        let l = list("[+]\n* item1\n* item2[/]");
        assert!(l.cont_attrs.list);
        assert_eq!(l.children.len(), 2);
        assert_eq!(bodies(&l.children[0]), vec!["item1"]);
        assert_eq!(bodies(&l.children[1]), vec!["item2"]);
        assert!(l.children[0].as_cont().unwrap().cont_attrs.star);
    }

    #[test]
    fn continuation_lines_join_the_item() {
        let l = list("[+]\n* item1\n  continued.\n* item2[/]");
        assert_eq!(bodies(&l.children[0]), vec!["item1 continued."]);
        assert_eq!(bodies(&l.children[1]), vec!["item2"]);
    }

    #[test]
    fn numbered_items_keep_their_value() {
        let l = list("[+]\n1. one\n22. two\n[/]");
        let second = l.children[1].as_cont().unwrap();
        assert!(second.cont_attrs.num);
        assert_eq!(second.attrs.get("value"), Some(&AttrValue::text("22")));
        assert_eq!(bodies(&l.children[1]), vec!["two"]);
    }

    #[test]
    fn digits_without_dot_are_text() {
        let l = list("[+]\n* the\n 42 answer\n[/]");
        assert_eq!(l.children.len(), 1);
        assert_eq!(bodies(&l.children[0]), vec!["the 42 answer"]);
    }

    #[test]
    fn checkboxes() {
        let l = list("[+]\n[ ] todo\n[x] done\n[X] also done\n[/]");
        let flags: Vec<_> = l
            .children
            .iter()
            .map(|c| c.as_cont().unwrap().cont_attrs)
            .map(|c| (c.nochk, c.chk))
            .collect();
        assert_eq!(flags, vec![(true, false), (false, true), (false, true)]);
    }

    #[test]
    fn commands_at_line_start_are_not_bullets() {
        let l = list("[+]\n* a\n[b]bold[b]\n[/]");
        let item = l.children[0].as_cont().unwrap();
        assert_eq!(item.children[0], Element::Text(Text::new("a ")));
        assert!(item.children[1].as_text().unwrap().text_attrs.bold);
    }

    #[test]
    fn list_attrs_come_from_the_command() {
        let l = list("[+ class=x]\n* a[/]");
        assert_eq!(l.attrs.get("class"), Some(&AttrValue::text("x")));
    }

    #[test]
    fn errors() {
        let err = parse("[+]\n* a\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnclosedBlock);

        let err = parse("[+]\nintro\n* a[/]").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Syntax(_)));

        let err = parse("[+]\n* a\n[/x").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Syntax(_)));
    }

    #[test]
    fn empty_list() {
        let l = list("[+][/]");
        assert!(l.children.is_empty());
    }
}
