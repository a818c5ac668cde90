//! Hand-built document trees for exercising the extractor without a markdown parser.
//!
//! Trees are described with nested [`FakeNode`] values and flattened into a [`FakeTree`] arena
//! whose handles implement [`SnippetNode`].

use crate::tree::{NodeKind, SnippetNode};

/// Owned description of a node and its children.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeNode {
    pub kind: NodeKind,
    pub literal: Option<String>,
    pub children: Vec<FakeNode>,
}

impl FakeNode {
    pub fn new(kind: NodeKind, literal: Option<&str>, children: Vec<FakeNode>) -> Self {
        FakeNode {
            kind,
            literal: literal.map(str::to_string),
            children,
        }
    }

    pub fn document(children: Vec<FakeNode>) -> Self {
        Self::new(NodeKind::Document, None, children)
    }

    pub fn paragraph(children: Vec<FakeNode>) -> Self {
        Self::new(NodeKind::Paragraph, None, children)
    }

    pub fn text(literal: &str) -> Self {
        Self::new(NodeKind::Text, Some(literal), vec![])
    }

    pub fn code(literal: &str) -> Self {
        Self::new(NodeKind::CodeBlock, Some(literal), vec![])
    }

    /// A well-formed quote block: quote > paragraph > text(label).
    pub fn quote(label: &str) -> Self {
        Self::new(
            NodeKind::BlockQuote,
            None,
            vec![FakeNode::paragraph(vec![FakeNode::text(label)])],
        )
    }

    pub fn other() -> Self {
        Self::new(NodeKind::Other, None, vec![])
    }
}

#[derive(Debug)]
struct Entry {
    kind: NodeKind,
    literal: Option<String>,
    first_child: Option<usize>,
    next_sibling: Option<usize>,
}

/// Arena holding a flattened [`FakeNode`] tree.
#[derive(Debug)]
pub struct FakeTree {
    entries: Vec<Entry>,
}

impl FakeTree {
    pub fn new(root: FakeNode) -> Self {
        let mut entries = Vec::new();
        flatten(root, &mut entries);
        FakeTree { entries }
    }

    pub fn root(&self) -> FakeRef<'_> {
        FakeRef {
            tree: self,
            index: 0,
        }
    }
}

fn flatten(node: FakeNode, entries: &mut Vec<Entry>) -> usize {
    let index = entries.len();
    entries.push(Entry {
        kind: node.kind,
        literal: node.literal,
        first_child: None,
        next_sibling: None,
    });

    let mut previous: Option<usize> = None;
    for child in node.children {
        let child_index = flatten(child, entries);
        match previous {
            Some(prev) => entries[prev].next_sibling = Some(child_index),
            None => entries[index].first_child = Some(child_index),
        }
        previous = Some(child_index);
    }

    index
}

/// Handle into a [`FakeTree`].
#[derive(Debug, Clone, Copy)]
pub struct FakeRef<'t> {
    tree: &'t FakeTree,
    index: usize,
}

impl<'t> FakeRef<'t> {
    fn at(&self, index: Option<usize>) -> Option<Self> {
        index.map(|index| FakeRef {
            tree: self.tree,
            index,
        })
    }
}

impl<'t> SnippetNode for FakeRef<'t> {
    fn kind(&self) -> NodeKind {
        self.tree.entries[self.index].kind
    }

    fn literal(&self) -> Option<String> {
        self.tree.entries[self.index].literal.clone()
    }

    fn first_child(&self) -> Option<Self> {
        self.at(self.tree.entries[self.index].first_child)
    }

    fn next_sibling(&self) -> Option<Self> {
        self.at(self.tree.entries[self.index].next_sibling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_links_children_and_siblings() {
        let tree = FakeTree::new(FakeNode::document(vec![
            FakeNode::quote("label"),
            FakeNode::code("ls\n"),
        ]));

        let root = tree.root();
        let quote = root.first_child().unwrap();
        assert_eq!(quote.kind(), NodeKind::BlockQuote);

        let text = quote.first_child().unwrap().first_child().unwrap();
        assert_eq!(text.literal().as_deref(), Some("label"));

        let code = quote.next_sibling().unwrap();
        assert_eq!(code.kind(), NodeKind::CodeBlock);
        assert_eq!(code.literal().as_deref(), Some("ls\n"));
        assert!(code.next_sibling().is_none());
        assert!(root.next_sibling().is_none());
    }
}
