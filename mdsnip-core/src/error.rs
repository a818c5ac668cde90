//! Error types for snippet operations

use std::fmt;

/// Errors that can occur while turning a document into a resolved command
#[derive(Debug, Clone, PartialEq)]
pub enum SnipError {
    /// Input document missing or unreadable
    Input(String),
    /// A quote block lacks the paragraph/text pair carrying its label
    Structure(String),
    /// The document contains no label/code pairs
    NoSnippets,
    /// The user aborted the selector or a prompt
    Cancelled,
    /// The selector returned a line that is not one of the offered labels
    UnknownLabel(String),
    /// Spawning or talking to an external program failed
    Io(String),
    /// Invalid configuration value
    Config(String),
}

impl fmt::Display for SnipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnipError::Input(msg) => write!(f, "Input error: {msg}"),
            SnipError::Structure(msg) => write!(f, "Malformed document: {msg}"),
            SnipError::NoSnippets => write!(f, "No snippets found in document"),
            SnipError::Cancelled => write!(f, "Selection cancelled"),
            SnipError::UnknownLabel(label) => write!(f, "Unknown snippet '{label}'"),
            SnipError::Io(msg) => write!(f, "I/O error: {msg}"),
            SnipError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for SnipError {}
