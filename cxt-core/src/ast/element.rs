//! Document tree nodes.

use super::attrs::{ContAttrs, TextAttrs};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Attribute map shared by text leaves and containers.
pub type Attrs = BTreeMap<String, AttrValue>;

/// Value of one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Boolean attribute: present without a value (`[t hide]`).
    Flag,
    /// Valued attribute. Parsed values are always [`Text`] leaves, possibly
    /// flagged `get` when written as `name=@var`.
    Value(Element),
}

impl AttrValue {
    /// Plain text attribute value.
    pub fn text(body: impl Into<String>) -> Self {
        AttrValue::Value(Element::Text(Text::new(body)))
    }

    /// Attribute value referring to the variable `name`.
    pub fn get(name: impl Into<String>) -> Self {
        AttrValue::Value(Element::Text(Text::with_attrs(
            name,
            TextAttrs::get(),
            Attrs::new(),
        )))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            AttrValue::Flag => None,
            AttrValue::Value(el) => Some(el),
        }
    }

    /// Body of a text value; `None` for flags and containers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Value(Element::Text(t)) => Some(&t.body),
            _ => None,
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Flag => serializer.serialize_bool(true),
            AttrValue::Value(el) => el.serialize(serializer),
        }
    }
}

/// Text leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub body: String,
    pub text_attrs: TextAttrs,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: Attrs,
}

impl Text {
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_attrs(body, TextAttrs::default(), Attrs::new())
    }

    pub fn with_attrs(body: impl Into<String>, text_attrs: TextAttrs, attrs: Attrs) -> Self {
        Self {
            body: body.into(),
            text_attrs,
            attrs,
        }
    }
}

/// Container node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cont {
    pub children: Vec<Element>,
    pub cont_attrs: ContAttrs,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: Attrs,
}

impl Cont {
    pub fn new(children: Vec<Element>, cont_attrs: ContAttrs, attrs: Attrs) -> Self {
        Self {
            children,
            cont_attrs,
            attrs,
        }
    }
}

/// A node in the parsed document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Text(Text),
    Cont(Cont),
}

impl Element {
    pub fn attrs(&self) -> &Attrs {
        match self {
            Element::Text(t) => &t.attrs,
            Element::Cont(c) => &c.attrs,
        }
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        match self {
            Element::Text(t) => &mut t.attrs,
            Element::Cont(c) => &mut c.attrs,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(t) => Some(t),
            Element::Cont(_) => None,
        }
    }

    pub fn as_cont(&self) -> Option<&Cont> {
        match self {
            Element::Cont(c) => Some(c),
            Element::Text(_) => None,
        }
    }
}

impl From<Text> for Element {
    fn from(value: Text) -> Self {
        Element::Text(value)
    }
}

impl From<Cont> for Element {
    fn from(value: Cont) -> Self {
        Element::Cont(value)
    }
}

/// A parsed document: the top-level elements in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}
