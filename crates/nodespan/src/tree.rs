//! Minimal view of a parsed syntax tree.
//!
//! The reporter needs exactly four things from a node: how many children it
//! has, one child by position, and its start and end byte. [`SpanNode`]
//! captures that, and `tree_sitter::Node` implements it. Nothing else in the
//! crate touches tree-sitter's node type.

use crate::error::{Error, Result};

/// Root child reported when no index is given.
pub const DEFAULT_CHILD_INDEX: usize = 4;

/// A half-open byte range `[start, end)` into the parsed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSpan {
    /// Offset of the first byte of the node
    pub start: usize,
    /// Offset one past the last byte of the node
    pub end: usize,
}

impl ByteSpan {
    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Read-only access to a node's children and byte offsets.
pub trait SpanNode: Sized {
    /// Number of direct children, named and anonymous.
    fn child_count(&self) -> usize;

    /// Direct child at `index`, or `None` if out of range.
    fn child(&self, index: usize) -> Option<Self>;

    /// Byte offset where the node starts.
    fn start_byte(&self) -> usize;

    /// Byte offset where the node ends.
    fn end_byte(&self) -> usize;

    /// Byte span of the node.
    fn span(&self) -> ByteSpan {
        ByteSpan {
            start: self.start_byte(),
            end: self.end_byte(),
        }
    }
}

impl SpanNode for tree_sitter::Node<'_> {
    fn child_count(&self) -> usize {
        tree_sitter::Node::child_count(self)
    }

    fn child(&self, index: usize) -> Option<Self> {
        tree_sitter::Node::child(self, index)
    }

    fn start_byte(&self) -> usize {
        tree_sitter::Node::start_byte(self)
    }

    fn end_byte(&self) -> usize {
        tree_sitter::Node::end_byte(self)
    }
}

/// Span of the direct child of `node` at `index`.
///
/// # Errors
///
/// Returns [`Error::ChildIndex`] if `node` has `index` or fewer children.
pub fn child_span<N: SpanNode>(node: &N, index: usize) -> Result<ByteSpan> {
    let child_count = node.child_count();
    let child = node
        .child(index)
        .ok_or(Error::ChildIndex { index, child_count })?;

    let span = child.span();
    tracing::trace!(
        index,
        child_count,
        start = span.start,
        end = span.end,
        "Selected child"
    );
    Ok(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory node with a fixed span and children.
    #[derive(Debug, Clone)]
    struct FakeNode {
        start: usize,
        end: usize,
        children: Vec<FakeNode>,
    }

    impl FakeNode {
        fn leaf(start: usize, end: usize) -> Self {
            Self {
                start,
                end,
                children: Vec::new(),
            }
        }

        fn root(children: Vec<FakeNode>) -> Self {
            let end = children.last().map_or(0, |c| c.end);
            Self {
                start: 0,
                end,
                children,
            }
        }
    }

    impl SpanNode for FakeNode {
        fn child_count(&self) -> usize {
            self.children.len()
        }

        fn child(&self, index: usize) -> Option<Self> {
            self.children.get(index).cloned()
        }

        fn start_byte(&self) -> usize {
            self.start
        }

        fn end_byte(&self) -> usize {
            self.end
        }
    }

    #[test]
    fn selects_fifth_child_by_default() {
        let root = FakeNode::root(vec![
            FakeNode::leaf(0, 2),
            FakeNode::leaf(3, 5),
            FakeNode::leaf(6, 8),
            FakeNode::leaf(9, 11),
            FakeNode::leaf(12, 47),
        ]);

        let span = child_span(&root, DEFAULT_CHILD_INDEX).expect("child 4 exists");

        assert_eq!(span, ByteSpan { start: 12, end: 47 });
        assert_eq!(span.len(), 35);
    }

    #[test]
    fn missing_child_reports_index_and_count() {
        let root = FakeNode::root(vec![FakeNode::leaf(0, 10)]);

        let err = child_span(&root, DEFAULT_CHILD_INDEX).unwrap_err();

        assert!(matches!(
            err,
            Error::ChildIndex {
                index: 4,
                child_count: 1
            }
        ));
    }

    #[test]
    fn empty_root_has_no_children() {
        let root = FakeNode::root(Vec::new());

        let err = child_span(&root, 0).unwrap_err();

        assert!(matches!(err, Error::ChildIndex { child_count: 0, .. }));
    }

    #[test]
    fn zero_width_span_is_empty() {
        let span = ByteSpan { start: 7, end: 7 };

        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }
}
