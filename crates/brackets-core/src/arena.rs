//! In-memory syntax tree for tests and benchmarks.
//!
//! [`TreeBuilder`] builds a tree by hand, one node or leaf at a time, and
//! [`MemoryTree`] exposes it through [`SyntaxToken`]. Leaves and nodes are
//! distinct kinds, as in editor PSI trees: a node with no children is still a
//! node, never a leaf.
//!
//! # Availability
//!
//! This module is available when:
//! - Running tests (`#[cfg(test)]`)
//! - The `test-util` feature is enabled
//!
//! # Example
//!
//! ```rust,ignore
//! use brackets_core::arena::TreeBuilder;
//!
//! let mut builder = TreeBuilder::new();
//! let root = builder.root();
//! let args = builder.node(root);
//! let open = builder.leaf(args, "(");
//! builder.leaf(args, ")");
//! let tree = builder.finish();
//!
//! assert_eq!(tree.token(args).text(), "()");
//! assert_eq!(tree.token(open).text_range(), 0..1);
//! ```

use std::ops::Range;

use crate::tree::SyntaxToken;

/// Identifies a node or leaf added to a [`TreeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(usize);

#[derive(Debug, Clone)]
struct Entry {
    parent: Option<usize>,
    index_in_parent: usize,
    children: Vec<usize>,
    is_leaf: bool,
    text: String,
    range: Range<usize>,
}

/// Builds a [`MemoryTree`] top-down.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    entries: Vec<Entry>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Start a tree containing only the file root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![Entry {
                parent: None,
                index_in_parent: 0,
                children: Vec::new(),
                is_leaf: false,
                text: String::new(),
                range: 0..0,
            }],
        }
    }

    /// The file root.
    #[must_use]
    pub fn root(&self) -> TokenId {
        TokenId(0)
    }

    /// Append an interior node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is a leaf.
    pub fn node(&mut self, parent: TokenId) -> TokenId {
        self.push(parent, false, String::new())
    }

    /// Append a leaf with the given text as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is a leaf.
    pub fn leaf(&mut self, parent: TokenId, text: impl Into<String>) -> TokenId {
        self.push(parent, true, text.into())
    }

    /// Append one leaf per item under `parent`, returning their ids in order.
    pub fn leaves<I>(&mut self, parent: TokenId, texts: I) -> Vec<TokenId>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        texts
            .into_iter()
            .map(|text| self.leaf(parent, text))
            .collect()
    }

    fn push(&mut self, parent: TokenId, is_leaf: bool, text: String) -> TokenId {
        assert!(
            !self.entries[parent.0].is_leaf,
            "cannot add children to a leaf"
        );
        let id = self.entries.len();
        let index_in_parent = self.entries[parent.0].children.len();
        self.entries[parent.0].children.push(id);
        self.entries.push(Entry {
            parent: Some(parent.0),
            index_in_parent,
            children: Vec::new(),
            is_leaf,
            text,
            range: 0..0,
        });
        TokenId(id)
    }

    /// Compute node texts and byte ranges, and freeze the tree.
    #[must_use]
    pub fn finish(mut self) -> MemoryTree {
        let mut offset = 0;
        layout(&mut self.entries, 0, &mut offset);
        MemoryTree {
            entries: self.entries,
        }
    }
}

/// Assign ranges in document order and concatenate leaf text into nodes.
fn layout(entries: &mut [Entry], id: usize, offset: &mut usize) {
    let start = *offset;
    if entries[id].is_leaf {
        *offset += entries[id].text.len();
    } else {
        let mut text = String::new();
        for child in entries[id].children.clone() {
            layout(entries, child, offset);
            text.push_str(&entries[child].text);
        }
        entries[id].text = text;
    }
    entries[id].range = start..*offset;
}

/// A frozen tree built by [`TreeBuilder`].
#[derive(Debug, Clone)]
pub struct MemoryTree {
    entries: Vec<Entry>,
}

impl MemoryTree {
    /// Handle to the file root.
    #[must_use]
    pub fn root(&self) -> MemoryToken<'_> {
        self.token(TokenId(0))
    }

    /// Handle to any node or leaf.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different builder and is out of range.
    #[must_use]
    pub fn token(&self, id: TokenId) -> MemoryToken<'_> {
        assert!(id.0 < self.entries.len(), "token id out of range");
        MemoryToken { tree: self, id: id.0 }
    }
}

/// A [`SyntaxToken`] handle into a [`MemoryTree`].
#[derive(Debug, Clone, Copy)]
pub struct MemoryToken<'t> {
    tree: &'t MemoryTree,
    id: usize,
}

impl MemoryToken<'_> {
    /// The id this handle points at.
    #[must_use]
    pub fn id(&self) -> TokenId {
        TokenId(self.id)
    }

    fn entry(&self) -> &Entry {
        &self.tree.entries[self.id]
    }

    fn at(&self, id: usize) -> Self {
        Self {
            tree: self.tree,
            id,
        }
    }
}

impl PartialEq for MemoryToken<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for MemoryToken<'_> {}

impl SyntaxToken for MemoryToken<'_> {
    fn text(&self) -> &str {
        &self.tree.entries[self.id].text
    }

    fn text_range(&self) -> Range<usize> {
        self.entry().range.clone()
    }

    fn is_leaf(&self) -> bool {
        self.entry().is_leaf
    }

    fn prev_sibling(&self) -> Option<Self> {
        let entry = self.entry();
        let parent = entry.parent?;
        let index = entry.index_in_parent.checked_sub(1)?;
        Some(self.at(self.tree.entries[parent].children[index]))
    }

    fn parent(&self) -> Option<Self> {
        self.entry().parent.map(|id| self.at(id))
    }

    fn first_child(&self) -> Option<Self> {
        self.entry().children.first().map(|&id| self.at(id))
    }

    fn last_child(&self) -> Option<Self> {
        self.entry().children.last().map(|&id| self.at(id))
    }
}
