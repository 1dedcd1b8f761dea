//! Recognized bracket spellings.
//!
//! A [`BracketSet`] answers one question: is this token text a left bracket,
//! a right bracket, or neither? Brackets are matched purely by membership.
//! There is no pairing between a particular opener and a particular closer,
//! so the two sides may have different sizes (for instance a dialect adding
//! `[<` without a same-shaped partner elsewhere).

use std::collections::BTreeSet;

/// The four standard opening brackets.
pub const DEFAULT_LEFT: [&str; 4] = ["[", "{", "(", "<"];

/// The four standard closing brackets.
pub const DEFAULT_RIGHT: [&str; 4] = ["]", "}", ")", ">"];

/// Immutable set of left and right bracket spellings.
///
/// Built once per grammar and shared by every resolution for that grammar.
/// The two sides are always disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSet {
    left: BTreeSet<String>,
    right: BTreeSet<String>,
}

impl Default for BracketSet {
    /// The four ASCII pairs: `()`, `[]`, `{}` and `<>`.
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT.iter().map(ToString::to_string).collect(),
            right: DEFAULT_RIGHT.iter().map(ToString::to_string).collect(),
        }
    }
}

impl BracketSet {
    /// Default brackets extended with extra spellings.
    ///
    /// Used for dialects with compound brackets, such as the F# attribute
    /// delimiters `[<` and `>]`.
    #[must_use]
    pub fn with_additional<L, R>(extra_left: L, extra_right: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let defaults = Self::default();
        Self::with_explicit(
            defaults.left.into_iter().chain(extra_left.into_iter().map(Into::into)),
            defaults
                .right
                .into_iter()
                .chain(extra_right.into_iter().map(Into::into)),
        )
    }

    /// Fully caller-specified spellings, ignoring the defaults.
    ///
    /// A spelling given on both sides is kept as a left bracket only.
    #[must_use]
    pub fn with_explicit<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let left: BTreeSet<String> = left.into_iter().map(Into::into).collect();
        let right: BTreeSet<String> = right
            .into_iter()
            .map(Into::into)
            .filter(|spelling| {
                let overlaps = left.contains(spelling);
                if overlaps {
                    tracing::warn!(%spelling, "Bracket spelling is both left and right, keeping it as left");
                }
                !overlaps
            })
            .collect();

        if left.is_empty() || right.is_empty() {
            tracing::warn!(
                left = left.len(),
                right = right.len(),
                "Bracket set has an empty side, levels will not balance"
            );
        }

        Self { left, right }
    }

    /// Returns `true` if `text` opens a bracket pair.
    #[must_use]
    pub fn is_left(&self, text: &str) -> bool {
        self.left.contains(text)
    }

    /// Returns `true` if `text` closes a bracket pair.
    #[must_use]
    pub fn is_right(&self, text: &str) -> bool {
        self.right.contains(text)
    }

    /// Returns `true` if `text` is any recognized bracket.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.is_left(text) || self.is_right(text)
    }

    /// Left spellings in sorted order.
    pub fn left(&self) -> impl Iterator<Item = &str> {
        self.left.iter().map(String::as_str)
    }

    /// Right spellings in sorted order.
    pub fn right(&self) -> impl Iterator<Item = &str> {
        self.right.iter().map(String::as_str)
    }
}
