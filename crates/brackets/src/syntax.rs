//! Tree-sitter adapter for the resolver's tree interface.
//!
//! [`SourceParser`] turns source text into a [`ParsedSource`], and
//! [`TsToken`] exposes its nodes as [`SyntaxToken`]s. Every tree-sitter
//! node is visible to the resolver, including anonymous ones, since that is
//! where punctuation such as `(` and `<` lives.
//!
//! Literals and comments are the exception. A string, character or comment
//! node is reported as a single leaf, so a `(` inside `"("` is never colored
//! and never counted. Code inside an interpolated string stays visible; only
//! its text fragments are hidden.

// Tree-sitter returns usize for positions; columns are reported 1-indexed.
#![allow(clippy::cast_possible_truncation)]

use std::ops::Range;

use brackets_core::SyntaxToken;

use crate::error::{Error, Result};
use crate::grammar::Grammar;

/// Count lines the way an editor document does.
///
/// A trailing newline does not start a new line, and empty text has zero
/// lines.
#[must_use]
pub fn line_count(source: &str) -> usize {
    source.lines().count()
}

/// A 1-indexed line and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1
    pub line: usize,
    /// Byte column within the line, starting at 1
    pub column: usize,
}

/// A tree-sitter parser bound to one grammar.
///
/// Tree-sitter parsers are stateful, so keep one per thread and reuse it.
pub struct SourceParser {
    grammar: Grammar,
    parser: tree_sitter::Parser,
}

impl SourceParser {
    /// Create a parser for `grammar`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parser`] if the grammar has no bundled tree-sitter
    /// language or the language cannot be loaded.
    pub fn new(grammar: Grammar) -> Result<Self> {
        let language = grammar.tree_sitter_language().ok_or_else(|| {
            Error::Parser(format!("no bundled tree-sitter grammar for {grammar}"))
        })?;

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Parser(e.to_string()))?;

        Ok(Self { grammar, parser })
    }

    /// The grammar this parser produces trees for.
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Parse source text into a syntax tree.
    ///
    /// Malformed input still produces a tree; tree-sitter inserts error and
    /// missing nodes rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parser`] if tree-sitter produces no tree at all.
    pub fn parse(&mut self, source: impl Into<String>) -> Result<ParsedSource> {
        let source = source.into();
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| Error::Parser("tree-sitter returned no tree".to_string()))?;

        if tree.root_node().has_error() {
            tracing::debug!(grammar = %self.grammar, "Source contains syntax errors");
        }

        Ok(ParsedSource {
            grammar: self.grammar,
            source,
            tree,
        })
    }
}

/// Source text together with its syntax tree.
pub struct ParsedSource {
    grammar: Grammar,
    source: String,
    tree: tree_sitter::Tree,
}

impl ParsedSource {
    /// The grammar the source was parsed with.
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// The parsed source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of lines in the source. See [`line_count`].
    #[must_use]
    pub fn line_count(&self) -> usize {
        line_count(&self.source)
    }

    /// Returns `true` if tree-sitter had to recover from syntax errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// The file root as a resolver token.
    #[must_use]
    pub fn root_token(&self) -> TsToken<'_> {
        TsToken {
            node: self.tree.root_node(),
            source: &self.source,
        }
    }

    /// Line and column of a byte offset. Offsets past the end clamp to it.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let before = &self.source.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);
        Position {
            line,
            column: offset - line_start + 1,
        }
    }
}

/// Named node kinds, from either grammar, that are reported as one leaf.
const OPAQUE_KINDS: &[&str] = &[
    "string_literal",
    "raw_string_literal",
    "verbatim_string_literal",
    "char_literal",
    "character_literal",
    "comment",
    "line_comment",
    "block_comment",
];

/// Text fragments inside literals, including interpolated strings whose
/// parent stays transparent. They are neither leaves nor nodes with
/// children, so the resolver skips them entirely.
const FRAGMENT_KINDS: &[&str] = &[
    "string_content",
    "string_literal_content",
    "character_literal_content",
    "raw_string_content",
    "interpolated_string_text",
    "interpolated_verbatim_string_text",
    "escape_sequence",
];

fn has_kind(node: tree_sitter::Node<'_>, kinds: &[&str]) -> bool {
    node.is_named() && kinds.contains(&node.kind())
}

/// A tree-sitter node viewed as a [`SyntaxToken`].
#[derive(Debug, Clone, Copy)]
pub struct TsToken<'t> {
    node: tree_sitter::Node<'t>,
    source: &'t str,
}

impl<'t> TsToken<'t> {
    /// The underlying tree-sitter node.
    #[must_use]
    pub fn node(&self) -> tree_sitter::Node<'t> {
        self.node
    }

    /// Tree-sitter node kind, e.g. `type_argument_list`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Returns `true` if this node is a literal or comment whose children
    /// are hidden.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        has_kind(self.node, OPAQUE_KINDS)
    }

    fn wrap(&self, node: tree_sitter::Node<'t>) -> Self {
        Self {
            node,
            source: self.source,
        }
    }
}

impl SyntaxToken for TsToken<'_> {
    fn text(&self) -> &str {
        self.source.get(self.node.byte_range()).unwrap_or_else(|| {
            tracing::trace!(
                byte_range = ?self.node.byte_range(),
                node_kind = %self.node.kind(),
                "Node range is not a valid slice of the source"
            );
            ""
        })
    }

    fn text_range(&self) -> Range<usize> {
        self.node.byte_range()
    }

    fn is_leaf(&self) -> bool {
        if has_kind(self.node, FRAGMENT_KINDS) {
            return false;
        }
        self.node.child_count() == 0 || self.is_opaque()
    }

    fn prev_sibling(&self) -> Option<Self> {
        self.node.prev_sibling().map(|n| self.wrap(n))
    }

    fn parent(&self) -> Option<Self> {
        self.node.parent().map(|n| self.wrap(n))
    }

    fn first_child(&self) -> Option<Self> {
        if self.is_opaque() {
            return None;
        }
        self.node.child(0).map(|n| self.wrap(n))
    }

    fn last_child(&self) -> Option<Self> {
        let count = self.node.child_count();
        if count == 0 || self.is_opaque() {
            return None;
        }
        self.node.child(count - 1).map(|n| self.wrap(n))
    }
}
