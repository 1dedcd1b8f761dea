//! Tree-navigation interface consumed by the resolver.
//!
//! The resolver never owns or mutates a syntax tree. Hosts expose their parse
//! tree through [`SyntaxToken`], a small capability trait that any concrete
//! tree (tree-sitter, a rowan CST, an editor's PSI) can implement with a thin
//! adapter.

use std::ops::Range;

/// A handle to a token or node in a host syntax tree.
///
/// Handles are cheap to clone; the resolver clones them while walking. A
/// handle whose [`parent`](SyntaxToken::parent) is `None` is the file root.
pub trait SyntaxToken: Clone {
    /// Literal source text covered by this token or node.
    fn text(&self) -> &str;

    /// Byte range of [`text`](SyntaxToken::text) within the source file.
    fn text_range(&self) -> Range<usize>;

    /// Returns `true` if this is an indivisible token with no children.
    fn is_leaf(&self) -> bool;

    /// The sibling immediately before this one, if any.
    fn prev_sibling(&self) -> Option<Self>;

    /// The enclosing node, or `None` for the file root.
    fn parent(&self) -> Option<Self>;

    /// First child of a node. Always `None` for leaves.
    fn first_child(&self) -> Option<Self>;

    /// Last child of a node. Always `None` for leaves.
    fn last_child(&self) -> Option<Self>;

    /// Returns `true` if this is the file root.
    fn is_file_root(&self) -> bool {
        self.parent().is_none()
    }
}

/// Iterate over every leaf below `root` in document order.
///
/// Only `last_child` and `prev_sibling` are needed, so any [`SyntaxToken`]
/// implementation can be traversed. If `root` is itself a leaf it is the
/// only item.
pub fn leaves<T: SyntaxToken>(root: T) -> Leaves<T> {
    Leaves { stack: vec![root] }
}

/// Iterator returned by [`leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<T> {
    stack: Vec<T>,
}

impl<T: SyntaxToken> Iterator for Leaves<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(current) = self.stack.pop() {
            if current.is_leaf() {
                return Some(current);
            }
            // Pushed last-to-first so the first child is popped next.
            let mut child = current.last_child();
            while let Some(node) = child {
                child = node.prev_sibling();
                self.stack.push(node);
            }
        }
        None
    }
}
