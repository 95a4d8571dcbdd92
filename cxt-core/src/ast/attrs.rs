//! Flag sets attached to text leaves and containers.
//!
//! Both types are plain structs of named booleans: equality is structural and
//! copying one is free, which is what the parser relies on when it snapshots
//! the current toggles into every flushed text leaf.

use serde::Serialize;
use std::fmt;

/// Formatting flags of a [`Text`](super::Text) leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TextAttrs {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub code: bool,
    /// The body names a variable that is substituted at render time.
    pub get: bool,
    pub hide: bool,
}

impl TextAttrs {
    pub fn code() -> Self {
        Self {
            code: true,
            ..Self::default()
        }
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self {
            get: true,
            ..Self::default()
        }
    }

    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn names(&self) -> Vec<&'static str> {
        [
            (self.bold, "b"),
            (self.italic, "i"),
            (self.underline, "u"),
            (self.strike, "strike"),
            (self.code, "code"),
            (self.get, "get"),
            (self.hide, "hide"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

impl fmt::Display for TextAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(" "))
    }
}

/// Kind flags of a [`Cont`](super::Cont) container.
///
/// Exactly one structural flag (`text`, `h1`..`h3`, `list`, `quote`) is set on
/// containers produced by block commands; list items carry one bullet flag
/// (`star`, `num`, `nochk`, `chk`) instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ContAttrs {
    /// Inline text span.
    pub text: bool,
    pub h1: bool,
    pub h2: bool,
    pub h3: bool,
    pub list: bool,
    pub quote: bool,
    /// Unordered `*` bullet.
    pub star: bool,
    /// Ordered bullet; the numeral lives in the item's `value` attribute.
    pub num: bool,
    /// Unchecked `[ ]` checkbox bullet.
    pub nochk: bool,
    /// Checked `[X]` checkbox bullet.
    pub chk: bool,
}

impl ContAttrs {
    pub fn text() -> Self {
        Self {
            text: true,
            ..Self::default()
        }
    }

    pub fn list() -> Self {
        Self {
            list: true,
            ..Self::default()
        }
    }

    pub fn quote() -> Self {
        Self {
            quote: true,
            ..Self::default()
        }
    }

    /// Container for a heading of the given level, if the level exists.
    pub fn header(level: u8) -> Option<Self> {
        let mut c = Self::default();
        match level {
            1 => c.h1 = true,
            2 => c.h2 = true,
            3 => c.h3 = true,
            _ => return None,
        }
        Some(c)
    }

    /// Heading level (1-3) when this is a heading container.
    pub fn header_level(&self) -> Option<u8> {
        if self.h1 {
            Some(1)
        } else if self.h2 {
            Some(2)
        } else if self.h3 {
            Some(3)
        } else {
            None
        }
    }

    /// Orderedness implied by the bullet flag of a list item.
    ///
    /// `None` when no bullet flag is set.
    pub fn ordered(&self) -> Option<bool> {
        if self.num {
            Some(true)
        } else if self.star || self.nochk || self.chk {
            Some(false)
        } else {
            None
        }
    }

    fn names(&self) -> Vec<&'static str> {
        [
            (self.text, "t"),
            (self.h1, "h1"),
            (self.h2, "h2"),
            (self.h3, "h3"),
            (self.list, "list"),
            (self.quote, "quote"),
            (self.star, "star"),
            (self.num, "num"),
            (self.nochk, "nochk"),
            (self.chk, "chk"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

impl fmt::Display for ContAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_equality() {
        let original = TextAttrs::default();
        let mut attrs = original;
        attrs.bold = !attrs.bold;
        assert_ne!(attrs, original);
        attrs.bold = !attrs.bold;
        assert_eq!(attrs, original);
    }

    #[test]
    fn header_levels() {
        assert_eq!(ContAttrs::header(2).and_then(|c| c.header_level()), Some(2));
        assert!(ContAttrs::header(4).is_none());
        assert_eq!(ContAttrs::list().header_level(), None);
    }

    #[test]
    fn bullet_orderedness() {
        let num = ContAttrs {
            num: true,
            ..ContAttrs::default()
        };
        let chk = ContAttrs {
            chk: true,
            ..ContAttrs::default()
        };
        assert_eq!(num.ordered(), Some(true));
        assert_eq!(chk.ordered(), Some(false));
        assert_eq!(ContAttrs::default().ordered(), None);
    }

    #[test]
    fn display_lists_set_flags() {
        let attrs = TextAttrs {
            bold: true,
            code: true,
            ..TextAttrs::default()
        };
        assert_eq!(attrs.to_string(), "b code");
        assert_eq!(ContAttrs::quote().to_string(), "quote");
    }
}
