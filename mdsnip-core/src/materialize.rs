//! Snippet materialization
//!
//! Turns a snippet plus resolved values into the final command, either by substituting values
//! in place or by prefixing shell assignments.
//!
//! # Trust boundary
//!
//! Values are inserted raw. Substitution adds no quoting even when a value contains spaces or
//! shell metacharacters, and assignment only wraps values containing a space in double quotes
//! without escaping anything inside them. The result is meant to be pasted by the same user who
//! typed the values.

use crate::scan::{placeholder_name, PLACEHOLDER};
use regex::Captures;
use serde::{Deserialize, Deserializer};
use std::fmt;
use tracing::debug;

/// How resolved values are applied to a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Replace `$name`/`${name}` with the value.
    #[default]
    Substitute,
    /// Prepend `name=value; ` assignments and keep the body untouched.
    Assign,
}

impl Strategy {
    /// Map a user-supplied name to a strategy.
    ///
    /// Unrecognized names fall back to [`Strategy::Substitute`] instead of failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "assign" | "assignment" => Strategy::Assign,
            "substitute" | "substitution" => Strategy::Substitute,
            other => {
                debug!(strategy = other, "unknown strategy, using substitution");
                Strategy::Substitute
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Substitute => "substitute",
            Strategy::Assign => "assign",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Strategy::from_name(&raw))
    }
}

/// Resolved values keyed by variable name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignedValues {
    entries: Vec<(String, String)>,
}

impl AssignedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, replacing an existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AssignedValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = AssignedValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// Replace every `$name`/`${name}` whose name has a value.
///
/// The code is scanned once; inserted values are never re-scanned, so a value containing `$other`
/// stays literal. Placeholders without a value are left as written.
pub fn substitute(code: &str, values: &AssignedValues) -> String {
    PLACEHOLDER
        .replace_all(code, |caps: &Captures<'_>| {
            match values.get(placeholder_name(caps)) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Prefix `code` with one shell assignment per value, followed by a newline.
///
/// Values containing a space are double quoted. With no values the code is returned unchanged.
pub fn assign(code: &str, values: &AssignedValues) -> String {
    if values.is_empty() {
        return code.to_string();
    }

    let mut output = String::new();
    for (name, value) in values.iter() {
        if value.contains(' ') {
            output.push_str(&format!("{name}=\"{value}\"; "));
        } else {
            output.push_str(&format!("{name}={value}; "));
        }
    }
    output.push('\n');
    output.push_str(code);
    output
}

/// Apply `values` to `code` with the given strategy.
pub fn materialize(strategy: Strategy, code: &str, values: &AssignedValues) -> String {
    match strategy {
        Strategy::Substitute => substitute(code, values),
        Strategy::Assign => assign(code, values),
    }
}
