//! Markdown adapter
//!
//! Parses CommonMark with comrak and exposes the resulting arena nodes through [`SnippetNode`].
//! A snippet in markdown looks like:
//!
//! ```text
//! > Restart a service
//!
//! ~~~sh
//! sudo systemctl restart $service
//! ~~~
//! ```
//!
//! comrak yields `BlockQuote > Paragraph > Text("Restart a service")` followed by a `CodeBlock`
//! sibling, which is exactly the shape the extractor looks for.

use crate::error::SnipError;
use crate::extract::{extract, SnippetTable};
use crate::tree::{NodeKind, SnippetNode};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

impl<'a> SnippetNode for &'a AstNode<'a> {
    fn kind(&self) -> NodeKind {
        match &self.data.borrow().value {
            NodeValue::Document => NodeKind::Document,
            NodeValue::BlockQuote => NodeKind::BlockQuote,
            NodeValue::CodeBlock(_) => NodeKind::CodeBlock,
            NodeValue::Paragraph => NodeKind::Paragraph,
            NodeValue::Text(_) => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn literal(&self) -> Option<String> {
        match &self.data.borrow().value {
            NodeValue::Text(text) => Some(text.clone()),
            NodeValue::CodeBlock(code_block) => Some(code_block.literal.clone()),
            NodeValue::Code(code) => Some(code.literal.clone()),
            _ => None,
        }
    }

    fn first_child(&self) -> Option<Self> {
        // Inherent `Node::first_child`, not a recursive trait call.
        AstNode::first_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        AstNode::next_sibling(self)
    }
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

/// Parse markdown source and extract its snippet table.
pub fn extract_markdown(source: &str) -> Result<SnippetTable, SnipError> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);
    extract(&root)
}
