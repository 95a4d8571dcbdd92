//! HTML emission over a resolved tree.
//!
//! Every function here is pure: variables must already be substituted.
//! Definitions still marked `set` and anything hidden render as nothing.

use crate::ast::{Cont, Element, Text};
use crate::error::{ErrorKind, Result};

/// Escape HTML special characters in text
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn html_element(el: &Element) -> Result<String> {
    match el {
        Element::Text(t) => Ok(html_text(t)),
        Element::Cont(c) => html_cont(c),
    }
}

pub fn html_text(t: &Text) -> String {
    let a = t.text_attrs;
    if a.get || a.hide {
        return String::new();
    }

    let mut start = String::new();
    let mut end = Vec::new();
    for (on, tag) in [
        (a.bold, "b"),
        (a.italic, "i"),
        (a.underline, "u"),
        (a.strike, "s"),
    ] {
        if on {
            start.push_str(&format!("<{tag}>"));
            end.push(format!("</{tag}>"));
        }
    }
    if let Some(href) = t.attrs.get("r").and_then(|r| r.as_str()) {
        start.push_str(&format!("<a href=\"{}\">", escape(href)));
        end.push("</a>".to_string());
    }

    let body = if a.code {
        if t.body.contains('\n') {
            format!("<pre>{}</pre>", escape(&t.body))
        } else {
            format!("<code>{}</code>", escape(&t.body))
        }
    } else {
        escape(&t.body).split('\n').collect::<Vec<_>>().join("<p>")
    };

    end.reverse();
    format!("{start}{body}{}", end.concat())
}

fn html_children(children: &[Element]) -> Result<String> {
    children
        .iter()
        .map(html_element)
        .collect::<Result<Vec<_>>>()
        .map(|parts| parts.concat())
}

pub fn html_cont(cont: &Cont) -> Result<String> {
    if cont.attrs.contains_key("hide") || cont.attrs.contains_key("set") {
        return Ok(String::new());
    }
    let c = cont.cont_attrs;
    if c.list {
        return html_list(cont);
    }
    let tag = if c.text {
        "span"
    } else if c.quote {
        "blockquote"
    } else {
        match c.header_level() {
            Some(1) => "h1",
            Some(2) => "h2",
            Some(3) => "h3",
            _ => return html_children(&cont.children),
        }
    };
    Ok(format!("<{tag}>{}</{tag}>", html_children(&cont.children)?))
}

fn html_list(list: &Cont) -> Result<String> {
    let items: Vec<&Cont> = list.children.iter().filter_map(Element::as_cont).collect();
    let Some(first) = items.first() else {
        return Ok(String::new());
    };
    let ordered = first.cont_attrs.ordered().unwrap_or(false);

    let mut out = String::new();
    for item in &items {
        if item.cont_attrs.ordered().unwrap_or(false) != ordered {
            return Err(ErrorKind::InconsistentListOrdering.into());
        }
        let value = item.attrs.get("value").and_then(|v| v.as_str());
        match value {
            Some(value) if ordered => {
                out.push_str(&format!("<li value=\"{}\">", escape(value)));
            }
            _ => out.push_str("<li>"),
        }
        out.push_str(&html_children(&item.children)?);
        out.push_str("</li>");
    }

    let tag = if ordered { "ol" } else { "ul" };
    Ok(format!("<{tag}>{out}</{tag}>"))
}
