//! Minimal document tree contract
//!
//! The extractor never depends on a concrete parser. It walks any tree that can answer four
//! questions about a node: what kind it is, what literal text it carries, and where its first
//! child and next sibling are. The markdown adapter (see [`crate::markdown`]) implements this for
//! comrak's arena nodes; the test-only `FakeTree` implements it for hand-built trees.

/// Node kinds the extractor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    BlockQuote,
    CodeBlock,
    Paragraph,
    Text,
    Other,
}

/// Read-only view over a node in a parsed document.
///
/// Implementors are cheap handles (references or index pairs), hence the `Clone` bound.
pub trait SnippetNode: Clone {
    fn kind(&self) -> NodeKind;

    /// Literal payload. Only text leaves and code blocks carry one.
    fn literal(&self) -> Option<String>;

    fn first_child(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;
}

/// Pre-order, depth-first walk over `root` and its descendants.
///
/// `visit` is called once per node on entry. Siblings of `root` itself are not visited.
pub fn walk<N, F, E>(root: &N, visit: &mut F) -> Result<(), E>
where
    N: SnippetNode,
    F: FnMut(&N) -> Result<(), E>,
{
    visit(root)?;
    let mut child = root.first_child();
    while let Some(node) = child {
        walk(&node, visit)?;
        child = node.next_sibling();
    }
    Ok(())
}
