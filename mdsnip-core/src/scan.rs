//! Placeholder scanning
//!
//! Placeholders are `$name` or `${name}` where `name` is one or more word characters. Only
//! lowercase-leading names are treated as user-fillable: `$HOME`, `$1` and `$_internal` belong to
//! the shell and are never prompted for.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches `${name}` (group 1) or `$name` (group 2).
pub(crate) static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("placeholder pattern is valid"));

/// Bare name of a placeholder match.
pub(crate) fn placeholder_name<'h>(caps: &Captures<'h>) -> &'h str {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or_default()
}

/// Whether `name` is something the user should be prompted for.
pub fn is_user_variable(name: &str) -> bool {
    match name.chars().next() {
        None => false,
        Some(first) => first != '_' && !first.is_numeric() && !first.is_uppercase(),
    }
}

/// Variable names referenced by `code`, in order of first occurrence, without duplicates.
pub fn scan(code: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(code) {
        let name = placeholder_name(&caps);
        if is_user_variable(name) && !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}
