//! Insertion-ordered string set.

use serde::Serialize;

/// A set of strings that remembers insertion order.
///
/// Backs the tech stack categories: rules append recommendations in a fixed
/// order, and a value pushed twice (two rules recommending "Postgres") must
/// appear once, at its first position. Lookups are linear; these sets hold
/// a handful of entries each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedSet {
    items: Vec<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, keeping the first occurrence on duplicates.
    ///
    /// Returns `true` if the value was actually added.
    pub fn push(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.items.iter().any(|existing| *existing == value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|existing| existing == value)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Join all values with a separator, in insertion order.
    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.push(value);
        }
        set
    }
}
