//! `[name attr attr=value ...]` commands.

use super::Parser;
use crate::ast::{AttrValue, Attrs, ContAttrs, TextAttrs};
use crate::error::{ErrorKind, Result};

/// A parsed command. Consumed by dispatch right away, never stored in the tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Cmd {
    pub name: String,
    /// Copy of the enclosing scope's toggles at the time the command was read.
    pub text_attrs: TextAttrs,
    pub cont_attrs: ContAttrs,
    pub attrs: Attrs,
}

impl Cmd {
    pub fn new(name: impl Into<String>, text_attrs: TextAttrs) -> Self {
        Self {
            name: name.into(),
            text_attrs,
            cont_attrs: ContAttrs::default(),
            attrs: Attrs::new(),
        }
    }

    /// Bind one attribute. `code` and `hide` also drive the text flags.
    pub fn update_attr(&mut self, name: String, value: AttrValue) {
        match name.as_str() {
            "code" => self.text_attrs.code = true,
            "hide" => {
                self.text_attrs.hide = true;
                self.attrs.insert(name, value);
            }
            _ => {
                self.attrs.insert(name, value);
            }
        }
    }
}

/// Formatting toggles flipped by `[b]`, `[i]`, `[u]` and `[~]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Toggle {
    Bold,
    Italic,
    Underline,
    Strike,
}

impl Toggle {
    pub fn apply(self, attrs: &mut TextAttrs) {
        let flag = match self {
            Toggle::Bold => &mut attrs.bold,
            Toggle::Italic => &mut attrs.italic,
            Toggle::Underline => &mut attrs.underline,
            Toggle::Strike => &mut attrs.strike,
        };
        *flag = !*flag;
    }
}

/// What a command name asks the parser to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CmdKind {
    /// `[]`
    Empty,
    /// `[c]`, `[code]` or `[#...]`, closed by the same bracket form.
    Code,
    /// `` [`] ``, closed by a single backtick.
    Backtick,
    Text,
    Toggle(Toggle),
    List,
    Quote,
    /// `[h1]`..`[h3]`, carrying the matching heading flag.
    Header(ContAttrs),
    Reference,
    Newline,
    Space,
    /// `[@]`, a literal `@`.
    At,
}

impl CmdKind {
    pub fn classify(name: &str) -> std::result::Result<Self, ErrorKind> {
        let kind = match name {
            "" => CmdKind::Empty,
            "c" | "code" => CmdKind::Code,
            _ if name.bytes().all(|b| b == b'#') => CmdKind::Code,
            "`" => CmdKind::Backtick,
            "t" => CmdKind::Text,
            "b" => CmdKind::Toggle(Toggle::Bold),
            "i" => CmdKind::Toggle(Toggle::Italic),
            "u" => CmdKind::Toggle(Toggle::Underline),
            "~" => CmdKind::Toggle(Toggle::Strike),
            "+" => CmdKind::List,
            "\"" => CmdKind::Quote,
            "r" => CmdKind::Reference,
            "n" => CmdKind::Newline,
            "s" => CmdKind::Space,
            "@" => CmdKind::At,
            _ => match header_level(name) {
                Some(Ok(cont_attrs)) => CmdKind::Header(cont_attrs),
                Some(Err(err)) => return Err(err),
                None => return Err(ErrorKind::Syntax(format!("Unknown cmd: {name}"))),
            },
        };
        Ok(kind)
    }
}

/// `None` when `name` is not shaped like a heading (`h` + digits).
fn header_level(name: &str) -> Option<std::result::Result<ContAttrs, ErrorKind>> {
    let digits = name.strip_prefix('h')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let level = match digits {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        _ => None,
    };
    Some(
        level
            .and_then(ContAttrs::header)
            .ok_or_else(|| ErrorKind::Syntax(format!("unknown header level: {name}"))),
    )
}

fn check_cmd_token(p: &Parser<'_>, token: &[u8]) -> Result<()> {
    match token {
        b"[" | b"]" | b"=" => Err(p.error(ErrorKind::Syntax(format!(
            "Did not expect: '{}'",
            String::from_utf8_lossy(token)
        )))),
        _ => Ok(()),
    }
}

/// Attribute value token; a leading `@` makes it a variable reference.
fn attr_value(token: Vec<u8>) -> AttrValue {
    let value = String::from_utf8_lossy(&token).into_owned();
    match value.strip_prefix('@') {
        Some(name) if !name.is_empty() => AttrValue::get(name),
        _ => AttrValue::text(value),
    }
}

impl Parser<'_> {
    pub(crate) fn new_cmd(&self, name: impl Into<String>) -> Cmd {
        Cmd::new(name, self.frame.text_attrs)
    }

    /// Parse a command; the cursor sits just after its opening `[`.
    pub(crate) fn parse_cmd(&mut self) -> Result<Cmd> {
        let name = self.cmd_token()?;
        if name == b"]" {
            return Ok(self.new_cmd(""));
        }
        check_cmd_token(self, &name)?;

        let mut cmd = self.new_cmd(String::from_utf8_lossy(&name));
        let mut pending = None;
        loop {
            let attr = match pending.take() {
                Some(token) => token,
                None => self.cmd_token()?,
            };
            if attr == b"]" {
                break;
            }
            check_cmd_token(self, &attr)?;
            let attr = String::from_utf8_lossy(&attr).into_owned();

            let next = self.cmd_token()?;
            if next == b"=" {
                let value = self.cmd_token()?;
                check_cmd_token(self, &value)?;
                cmd.update_attr(attr, attr_value(value));
            } else {
                cmd.update_attr(attr, AttrValue::Flag);
                pending = Some(next);
            }
        }
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boolean_and_valued_attributes() {
        let mut p = Parser::new("cmd   a   foo=bar]");
        let cmd = p.parse_cmd().unwrap();
        assert_eq!(cmd.name, "cmd");
        assert_eq!(cmd.text_attrs, TextAttrs::default());
        assert_eq!(cmd.cont_attrs, ContAttrs::default());

        let mut expected = Attrs::new();
        expected.insert("a".to_string(), AttrValue::Flag);
        expected.insert("foo".to_string(), AttrValue::text("bar"));
        assert_eq!(cmd.attrs, expected);
    }

    #[test]
    fn trailing_boolean_attribute_is_kept() {
        let mut p = Parser::new("t x=1 shown]");
        let cmd = p.parse_cmd().unwrap();
        assert_eq!(cmd.attrs.get("shown"), Some(&AttrValue::Flag));
        assert_eq!(cmd.attrs.get("x"), Some(&AttrValue::text("1")));
    }

    #[test]
    fn at_prefix_marks_reference_value() {
        let mut p = Parser::new("t href=@home]");
        let cmd = p.parse_cmd().unwrap();
        assert_eq!(cmd.attrs.get("href"), Some(&AttrValue::get("home")));
    }

    #[test]
    fn empty_command() {
        let mut p = Parser::new("  ]");
        assert_eq!(p.parse_cmd().unwrap().name, "");
    }

    #[test]
    fn code_and_hide_attributes_set_text_flags() {
        let mut p = Parser::new("t code hide]");
        let cmd = p.parse_cmd().unwrap();
        assert!(cmd.text_attrs.code);
        assert!(cmd.text_attrs.hide);
        assert!(!cmd.attrs.contains_key("code"));
        assert_eq!(cmd.attrs.get("hide"), Some(&AttrValue::Flag));
    }

    #[test]
    fn rejects_special_tokens_in_names_and_values() {
        for src in ["=]", "[]", "t a=]", "t a==b]"] {
            let mut p = Parser::new(src);
            let err = p.parse_cmd().unwrap_err();
            assert!(matches!(err.kind, ErrorKind::Syntax(_)), "{src}: {err}");
        }
    }

    #[test]
    fn unterminated_command_hits_eof() {
        let mut p = Parser::new("t a=b");
        let err = p.parse_cmd().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedEof("]".to_string()));
    }

    #[test]
    fn classifies_command_names() {
        assert_eq!(CmdKind::classify("").unwrap(), CmdKind::Empty);
        assert_eq!(CmdKind::classify("code").unwrap(), CmdKind::Code);
        assert_eq!(CmdKind::classify("###").unwrap(), CmdKind::Code);
        assert_eq!(
            CmdKind::classify("h2").unwrap(),
            CmdKind::Header(ContAttrs::header(2).unwrap())
        );
        assert_eq!(
            CmdKind::classify("~").unwrap(),
            CmdKind::Toggle(Toggle::Strike)
        );
        assert!(matches!(
            CmdKind::classify("h4"),
            Err(ErrorKind::Syntax(msg)) if msg.contains("header level")
        ));
        assert!(matches!(
            CmdKind::classify("bogus"),
            Err(ErrorKind::Syntax(msg)) if msg.starts_with("Unknown cmd")
        ));
    }
}
