//! Variable definitions (`set=name`) and references (`@name`).
//!
//! Resolution runs in two passes over the whole tree. [`collect`] records a
//! copy of every element carrying a `set` attribute, failing on duplicate
//! names; only then does [`Resolver::substitute`] replace references, so a
//! name may be used before the element defining it.
//!
//! Collected copies are taken before any substitution. A definition that
//! itself uses variables is substituted each time it is spliced in, which
//! is also where self-reference is caught.

use std::collections::BTreeMap;

use crate::ast::{AttrValue, Element, Text};
use crate::error::{ErrorKind, Result};

/// Name to definition, without its `set` attribute.
pub type Variables = BTreeMap<String, Element>;

/// Collect every definition in `elements`, depth first.
pub fn collect(elements: &[Element]) -> Result<Variables> {
    let mut vars = Variables::new();
    collect_into(elements, &mut vars)?;
    Ok(vars)
}

fn collect_into(elements: &[Element], vars: &mut Variables) -> Result<()> {
    for el in elements {
        if let Some(value) = el.attrs().get("set") {
            let name = match value.as_element() {
                Some(Element::Text(t)) if !t.text_attrs.get => t.body.as_str(),
                _ => return Err(ErrorKind::InvalidVariableUsage("set".to_string()).into()),
            };
            if vars.contains_key(name) {
                return Err(ErrorKind::DuplicateVariable(name.to_string()).into());
            }
            log::debug!("collected variable '{name}'");
            let mut copy = el.clone();
            copy.attrs_mut().remove("set");
            vars.insert(name.to_string(), copy);
        }
        if let Element::Cont(cont) = el {
            collect_into(&cont.children, vars)?;
        }
    }
    Ok(())
}

fn is_get(el: &Element) -> Option<&str> {
    match el {
        Element::Text(t) if t.text_attrs.get => Some(&t.body),
        _ => None,
    }
}

/// Reduce a resolved attribute value to a single plain text leaf.
fn single_text(el: Element) -> Option<Text> {
    match el {
        Element::Text(t) => Some(t),
        Element::Cont(mut c) if c.children.len() == 1 => match c.children.pop() {
            Some(Element::Text(t)) => Some(t),
            _ => None,
        },
        Element::Cont(_) => None,
    }
}

/// Replaces references with copies of their definitions.
pub struct Resolver<'a> {
    vars: &'a Variables,
    /// Names whose definitions are being spliced in right now.
    active: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(vars: &'a Variables) -> Self {
        Self {
            vars,
            active: Vec::new(),
        }
    }

    pub fn substitute(&mut self, elements: &mut [Element]) -> Result<()> {
        for el in elements.iter_mut() {
            self.substitute_element(el)?;
        }
        Ok(())
    }

    fn substitute_element(&mut self, el: &mut Element) -> Result<()> {
        if let Some(name) = is_get(el).map(str::to_string) {
            *el = self.resolve(name)?;
            return Ok(());
        }
        self.substitute_attrs(el)?;
        if let Element::Cont(cont) = el {
            self.substitute(&mut cont.children)?;
        }
        Ok(())
    }

    fn substitute_attrs(&mut self, el: &mut Element) -> Result<()> {
        for (key, value) in el.attrs_mut().iter_mut() {
            if key == "set" {
                continue;
            }
            let name = match value.as_element().and_then(is_get) {
                Some(name) => name.to_string(),
                None => continue,
            };
            let resolved = self.resolve(name.clone())?;
            let text = single_text(resolved).ok_or(ErrorKind::InvalidVariableUsage(name))?;
            *value = AttrValue::Value(Element::Text(text));
        }
        Ok(())
    }

    /// A fully substituted copy of the definition of `name`.
    fn resolve(&mut self, name: String) -> Result<Element> {
        if self.active.contains(&name) {
            return Err(ErrorKind::RecursiveVariable(name).into());
        }
        let mut el = self
            .vars
            .get(&name)
            .cloned()
            .ok_or_else(|| ErrorKind::UnresolvedVariable(name.clone()))?;
        self.active.push(name);
        let result = self.substitute_element(&mut el);
        self.active.pop();
        result.map(|()| el)
    }
}
