//! Bracket level resolution.
//!
//! The level of a bracket is approximated by walking backwards through every
//! sibling that precedes it, then climbing to the parent and doing the same,
//! until the file root is reached. Each left bracket seen on the way adds one
//! level and each right bracket removes one, wrapping within the palette
//! after every step.
//!
//! ```text
//!   (1  (2  (3  )3  )2  )1
//! ```
//!
//! This is a positional count, not bracket matching. The running level is
//! seeded at [`Level::MAX`] for right brackets and [`Level::MIN`] for left
//! brackets, which makes balanced pairs land on the same level. Unbalanced
//! input still gets a level, it just may not match any intuitive depth.
//!
//! Angle tokens (`<` and `>`) are ambiguous: they delimit generic arguments
//! but also appear as comparison operators. They only count as brackets when
//! their parent node both starts and ends with an angle token.

use crate::level::Level;
use crate::set::BracketSet;
use crate::tree::SyntaxToken;

const ANGLES: [&str; 2] = ["<", ">"];

fn is_angle(text: &str) -> bool {
    ANGLES.contains(&text)
}

/// Returns `true` if `token` is an angle token that must not be treated as a
/// bracket.
///
/// A `<` or `>` is kept only when its parent's first and last children are
/// both angle tokens, as in a generic argument list `<T, U>`. Filtered
/// tokens are neither colored nor counted while resolving other brackets.
pub fn is_filtered_angle<T: SyntaxToken>(token: &T) -> bool {
    if !is_angle(token.text()) {
        return false;
    }
    let Some(parent) = token.parent() else {
        return true;
    };
    let bounded = |child: Option<T>| child.is_some_and(|c| is_angle(c.text()));
    !(bounded(parent.first_child()) && bounded(parent.last_child()))
}

/// Compute the color level of `token`, or `None` if it should not be colored.
///
/// `None` is returned for non-leaf tokens, text outside `brackets`, and
/// filtered angle tokens.
pub fn resolve_level<T: SyntaxToken>(token: &T, brackets: &BracketSet) -> Option<Level> {
    if !token.is_leaf() {
        return None;
    }
    let text = token.text();
    if !brackets.contains(text) || is_filtered_angle(token) {
        return None;
    }

    let seed = if brackets.is_right(text) {
        Level::MAX
    } else {
        Level::MIN
    };

    let level = walk_ancestors(token.clone(), seed, brackets);
    tracing::trace!(text, range = ?token.text_range(), level = level.get(), "Resolved bracket level");
    Some(level)
}

/// Count preceding brackets at this depth, then at every enclosing depth.
fn walk_ancestors<T: SyntaxToken>(start: T, seed: Level, brackets: &BracketSet) -> Level {
    let mut level = seed;
    let mut current = start;
    loop {
        if let Some(prev) = current.prev_sibling() {
            level = count_siblings(prev, level, brackets);
        }
        match current.parent() {
            Some(parent) if !parent.is_file_root() => current = parent,
            _ => return level,
        }
    }
}

/// Apply every bracket leaf from `first` backwards through its previous
/// siblings. Interior nodes are skipped without descending into them.
fn count_siblings<T: SyntaxToken>(first: T, mut level: Level, brackets: &BracketSet) -> Level {
    let mut sibling = Some(first);
    while let Some(token) = sibling {
        if token.is_leaf() && !is_filtered_angle(&token) {
            let text = token.text();
            if brackets.is_left(text) {
                level = level.increment();
            } else if brackets.is_right(text) {
                level = level.decrement();
            }
        }
        sibling = token.prev_sibling();
    }
    level
}

/// A [`BracketSet`] paired with the resolution algorithm.
///
/// One resolver is built per grammar and shared. It holds no mutable state,
/// so concurrent calls are safe.
#[derive(Debug, Clone, Default)]
pub struct LevelResolver {
    brackets: BracketSet,
}

impl LevelResolver {
    /// Create a resolver for the given bracket spellings.
    #[must_use]
    pub fn new(brackets: BracketSet) -> Self {
        Self { brackets }
    }

    /// The bracket spellings this resolver recognizes.
    #[must_use]
    pub fn brackets(&self) -> &BracketSet {
        &self.brackets
    }

    /// Compute the color level of `token`. See [`resolve_level`].
    pub fn resolve<T: SyntaxToken>(&self, token: &T) -> Option<Level> {
        resolve_level(token, &self.brackets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{MemoryTree, TokenId, TreeBuilder};
    use rstest::rstest;

    fn levels(tree: &MemoryTree, ids: &[TokenId], resolver: &LevelResolver) -> Vec<Option<u8>> {
        ids.iter()
            .map(|&id| resolver.resolve(&tree.token(id)).map(Level::get))
            .collect()
    }

    fn flat(texts: &[&str]) -> (MemoryTree, Vec<TokenId>) {
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        let ids = builder.leaves(root, texts.iter().copied());
        (builder.finish(), ids)
    }

    #[test]
    fn flat_nested_parens_are_symmetric() {
        let (tree, ids) = flat(&["(", "(", "(", ")", ")", ")"]);

        let got = levels(&tree, &ids, &LevelResolver::default());

        assert_eq!(
            got,
            vec![Some(1), Some(2), Some(3), Some(3), Some(2), Some(1)]
        );
    }

    #[test]
    fn fourth_level_wraps_to_first() {
        let (tree, ids) = flat(&["(", "(", "(", "(", ")", ")", ")", ")"]);

        let got = levels(&tree, &ids, &LevelResolver::default());

        assert_eq!(
            got,
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(1),
                Some(1),
                Some(3),
                Some(2),
                Some(1)
            ]
        );
    }

    #[test]
    fn nested_nodes_count_enclosing_scope() {
        // ( [ ] )  with the inner pair in its own node
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        let open = builder.leaf(root, "(");
        let group = builder.node(root);
        let inner_open = builder.leaf(group, "[");
        let inner_close = builder.leaf(group, "]");
        let close = builder.leaf(root, ")");
        let tree = builder.finish();

        let got = levels(
            &tree,
            &[open, inner_open, inner_close, close],
            &LevelResolver::default(),
        );

        assert_eq!(got, vec![Some(1), Some(2), Some(2), Some(1)]);
    }

    #[test]
    fn sibling_nodes_are_not_descended() {
        // The closing brace sits after a node holding an unbalanced `(`,
        // which must not be counted.
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        let open = builder.leaf(root, "{");
        let body = builder.node(root);
        builder.leaves(body, ["f", "("]);
        let close = builder.leaf(root, "}");
        let tree = builder.finish();

        let got = levels(&tree, &[open, close], &LevelResolver::default());

        assert_eq!(got, vec![Some(1), Some(1)]);
    }

    #[test]
    fn non_leaf_is_skipped() {
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        let group = builder.node(root);
        builder.leaf(group, "(");
        let tree = builder.finish();

        // The node's text is "(" but it is not a leaf.
        assert_eq!(tree.token(group).text(), "(");
        assert_eq!(LevelResolver::default().resolve(&tree.token(group)), None);
        assert_eq!(LevelResolver::default().resolve(&tree.root()), None);
    }

    #[rstest]
    #[case::identifier("foo")]
    #[case::operator("+")]
    #[case::empty("")]
    #[case::compound_without_dialect("[<")]
    fn unrecognized_text_is_skipped(#[case] text: &str) {
        let (tree, ids) = flat(&["(", text, ")"]);
        assert_eq!(LevelResolver::default().resolve(&tree.token(ids[1])), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let (tree, ids) = flat(&["{", "(", "[", "]", ")", "}"]);
        let resolver = LevelResolver::default();

        for &id in &ids {
            let first = resolver.resolve(&tree.token(id));
            let second = resolver.resolve(&tree.token(id));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn generic_angles_are_colored() {
        // List < int >  where the angles bound their own node
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        let open = builder.leaf(root, "{");
        let generic = builder.node(root);
        builder.leaf(generic, "List");
        let args = builder.node(generic);
        let lt = builder.leaf(args, "<");
        builder.leaf(args, "int");
        let gt = builder.leaf(args, ">");
        let close = builder.leaf(root, "}");
        let tree = builder.finish();

        let got = levels(&tree, &[open, lt, gt, close], &LevelResolver::default());

        assert_eq!(got, vec![Some(1), Some(2), Some(2), Some(1)]);
    }

    #[test]
    fn relational_angle_is_filtered() {
        // ( a < b )  where `<` sits inside a binary expression
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        let open = builder.leaf(root, "(");
        let binary = builder.node(root);
        builder.leaf(binary, "a");
        let lt = builder.leaf(binary, "<");
        builder.leaf(binary, "b");
        let close = builder.leaf(root, ")");
        let tree = builder.finish();

        assert!(is_filtered_angle(&tree.token(lt)));
        let got = levels(&tree, &[open, lt, close], &LevelResolver::default());
        assert_eq!(got, vec![Some(1), None, Some(1)]);
    }

    #[test]
    fn filtered_angles_are_not_counted() {
        // ( a > b ) ( ) : the stray `>` must not shift the second pair
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        builder.leaf(root, "(");
        builder.leaves(root, ["a", ">", "b"]);
        builder.leaf(root, ")");
        let open = builder.leaf(root, "(");
        let close = builder.leaf(root, ")");
        let tree = builder.finish();

        let got = levels(&tree, &[open, close], &LevelResolver::default());

        assert_eq!(got, vec![Some(1), Some(1)]);
    }

    #[test]
    fn angle_alone_in_its_node_is_kept() {
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        let group = builder.node(root);
        let lt = builder.leaf(group, "<");
        let tree = builder.finish();

        // Sole child: it is both the first and the last angle of its parent.
        assert!(!is_filtered_angle(&tree.token(lt)));
        assert_eq!(
            LevelResolver::default().resolve(&tree.token(lt)),
            Some(Level::MIN)
        );
    }

    #[test]
    fn non_angle_text_is_never_filtered() {
        let (tree, ids) = flat(&["a", "(", "b"]);
        assert!(!is_filtered_angle(&tree.token(ids[1])));
    }

    #[test]
    fn compound_dialect_brackets_are_counted() {
        let resolver = LevelResolver::new(BracketSet::with_additional(["[<"], [">]"]));
        let (tree, ids) = flat(&["[<", "(", ")", ">]"]);

        let got = levels(&tree, &ids, &resolver);

        assert_eq!(got, vec![Some(1), Some(2), Some(2), Some(1)]);
    }

    #[test]
    fn explicit_set_ignores_defaults() {
        let resolver = LevelResolver::new(BracketSet::with_explicit(["begin"], ["end"]));
        let (tree, ids) = flat(&["begin", "(", "begin", "end", ")", "end"]);

        let got = levels(&tree, &ids, &resolver);

        assert_eq!(got, vec![Some(1), None, Some(2), Some(2), None, Some(1)]);
    }

    #[test]
    fn lone_right_bracket_keeps_seed() {
        let (tree, ids) = flat(&[")"]);
        assert_eq!(
            LevelResolver::default().resolve(&tree.token(ids[0])),
            Some(Level::MAX)
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const PLAIN: [&str; 8] = ["(", ")", "[", "]", "{", "}", "x", ";"];

        fn plain_token() -> impl Strategy<Value = &'static str> {
            prop::sample::select(PLAIN.to_vec())
        }

        proptest! {
            #[test]
            fn levels_stay_in_palette(texts in prop::collection::vec(plain_token(), 1..60)) {
                let (tree, ids) = flat(&texts);
                let resolver = LevelResolver::default();
                for id in ids {
                    if let Some(level) = resolver.resolve(&tree.token(id)) {
                        prop_assert!((1..=crate::PALETTE_SIZE).contains(&level.get()));
                    }
                }
            }

            #[test]
            fn stray_angles_never_shift_other_levels(
                texts in prop::collection::vec(plain_token(), 1..40),
                strays in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..10),
            ) {
                // The leading `x` keeps the root from starting with an angle,
                // so every stray `<`/`>` fails the delimiter test.
                let mut base = vec!["x"];
                base.extend(texts.iter().copied());

                let mut with_strays: Vec<(&str, bool)> = base.iter().map(|&t| (t, true)).collect();
                for (index, less) in strays {
                    let at = 1 + index.index(with_strays.len());
                    with_strays.insert(at, (if less { "<" } else { ">" }, false));
                }

                let resolver = LevelResolver::default();
                let (plain_tree, plain_ids) = flat(&base);
                let expected = levels(&plain_tree, &plain_ids, &resolver);

                let mixed_texts: Vec<&str> = with_strays.iter().map(|(t, _)| *t).collect();
                let (mixed_tree, mixed_ids) = flat(&mixed_texts);
                let mut actual = Vec::new();
                for (id, (_, original)) in mixed_ids.iter().zip(&with_strays) {
                    let level = resolver.resolve(&mixed_tree.token(*id)).map(Level::get);
                    if *original {
                        actual.push(level);
                    } else {
                        prop_assert_eq!(level, None);
                    }
                }

                prop_assert_eq!(actual, expected);
            }
        }
    }
}
