//! Snippet extraction
//!
//! A snippet is declared by adjacency: a quote block whose first paragraph holds the label,
//! immediately followed (as the next sibling) by a code block holding the command. There is no
//! other linking syntax.
//!
//! Duplicate labels are resolved last-write-wins. The overwritten label keeps the position of its
//! first appearance, so candidates are offered in document order.

use crate::error::SnipError;
use crate::tree::{walk, NodeKind, SnippetNode};
use std::collections::HashMap;
use tracing::debug;

/// Label → code mapping in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetTable {
    labels: Vec<String>,
    code: HashMap<String, String>,
}

impl SnippetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a snippet, replacing the code of an existing label in place.
    ///
    /// Returns the previous code when the label was already present.
    pub fn insert(&mut self, label: impl Into<String>, code: impl Into<String>) -> Option<String> {
        let label = label.into();
        let previous = self.code.insert(label.clone(), code.into());
        if previous.is_none() {
            self.labels.push(label);
        }
        previous
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.code.get(label).map(String::as_str)
    }

    /// Labels in order of first appearance.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .map(|label| (label.as_str(), self.code[label].as_str()))
    }
}

/// Walk `root` and collect every quote-block/code-block pair.
///
/// A quote block without the expected `first child > first child` label leaf aborts extraction
/// with [`SnipError::Structure`].
pub fn extract<N: SnippetNode>(root: &N) -> Result<SnippetTable, SnipError> {
    let mut table = SnippetTable::new();

    walk(root, &mut |node: &N| -> Result<(), SnipError> {
        if node.kind() != NodeKind::BlockQuote {
            return Ok(());
        }

        let label = quote_label(node)?;

        let code = match node.next_sibling() {
            Some(sibling) if sibling.kind() == NodeKind::CodeBlock => sibling.literal(),
            _ => None,
        };

        match code {
            Some(code) => {
                if table.insert(label.clone(), code).is_some() {
                    debug!(label = %label, "duplicate snippet label, keeping the later one");
                }
            }
            None => debug!(label = %label, "quote block has no code block after it"),
        }
        Ok(())
    })?;

    debug!(count = table.len(), "extracted snippets");
    Ok(table)
}

fn quote_label<N: SnippetNode>(quote: &N) -> Result<String, SnipError> {
    let block = quote.first_child().ok_or_else(|| {
        SnipError::Structure("quote block has no content to use as a label".to_string())
    })?;
    let leaf = block.first_child().ok_or_else(|| {
        SnipError::Structure(format!(
            "first {:?} inside quote block has no label text",
            block.kind()
        ))
    })?;
    leaf.literal().ok_or_else(|| {
        SnipError::Structure(format!(
            "label node inside quote block is {:?}, expected text",
            leaf.kind()
        ))
    })
}
