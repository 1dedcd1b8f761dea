//! Bracket colorization and annotation output.
//!
//! A [`BracketColorizer`] is the per-grammar entry point. It applies the
//! long-file settings, asks the resolver for a level, and hands one
//! [`Annotation`] per colored bracket to an [`AnnotationSink`].

use std::ops::Range;

use brackets_core::{BracketSet, Level, LevelResolver, SyntaxToken, leaves};
use serde::Serialize;

use crate::grammar::Grammar;
use crate::settings::BracketSettings;

/// Severity attached to bracket annotations.
///
/// Bracket colors are purely informational; they never mark a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Styling only, no diagnostic meaning
    Information,
}

/// A style annotation covering exactly one bracket token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Byte range of the bracket in the source file
    pub range: Range<usize>,
    /// Color level of the bracket
    pub level: Level,
    /// Always [`Severity::Information`]
    pub severity: Severity,
}

impl Annotation {
    /// Style key for the renderer, e.g. `BRACKET_LEVEL_1`.
    #[must_use]
    pub fn style_key(&self) -> &'static str {
        self.level.style_key()
    }
}

/// Receives annotations produced by a colorizer.
pub trait AnnotationSink {
    /// Record one annotation.
    fn annotate(&mut self, annotation: Annotation);
}

impl AnnotationSink for Vec<Annotation> {
    fn annotate(&mut self, annotation: Annotation) {
        self.push(annotation);
    }
}

/// Colors bracket tokens for one grammar.
///
/// Obtain shared instances from [`ColorizerRegistry`](crate::ColorizerRegistry)
/// rather than building one per call.
#[derive(Debug, Clone)]
pub struct BracketColorizer {
    grammar: Grammar,
    resolver: LevelResolver,
}

impl BracketColorizer {
    /// Build a colorizer with the grammar's bracket spellings.
    #[must_use]
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            resolver: LevelResolver::new(grammar.bracket_set()),
        }
    }

    /// The grammar this colorizer serves.
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// The bracket spellings this colorizer recognizes.
    #[must_use]
    pub fn brackets(&self) -> &BracketSet {
        self.resolver.brackets()
    }

    /// Color a single token.
    ///
    /// `file_lines` is the line count of the file containing the token;
    /// `None` means the file is unavailable and counts as empty. When the
    /// settings skip the file, the token is not resolved at all.
    ///
    /// Returns the level that was annotated, or `None` if nothing was emitted.
    pub fn colorize<T, S>(
        &self,
        token: &T,
        file_lines: Option<usize>,
        settings: &BracketSettings,
        sink: &mut S,
    ) -> Option<Level>
    where
        T: SyntaxToken,
        S: AnnotationSink + ?Sized,
    {
        if settings.skips_file(file_lines.unwrap_or(0)) {
            return None;
        }
        self.emit(token, sink)
    }

    /// Color every leaf below `root`.
    ///
    /// The settings are checked once for the whole file. Returns the number
    /// of annotations emitted.
    pub fn annotate<T, S>(
        &self,
        root: T,
        file_lines: Option<usize>,
        settings: &BracketSettings,
        sink: &mut S,
    ) -> usize
    where
        T: SyntaxToken,
        S: AnnotationSink + ?Sized,
    {
        let lines = file_lines.unwrap_or(0);
        if settings.skips_file(lines) {
            tracing::debug!(
                grammar = %self.grammar,
                lines,
                threshold = settings.long_file_line_count_threshold,
                "File exceeds line threshold, skipping colorization"
            );
            return 0;
        }

        leaves(root)
            .filter(|leaf| self.emit(leaf, sink).is_some())
            .count()
    }

    fn emit<T, S>(&self, token: &T, sink: &mut S) -> Option<Level>
    where
        T: SyntaxToken,
        S: AnnotationSink + ?Sized,
    {
        let level = self.resolver.resolve(token)?;
        sink.annotate(Annotation {
            range: token.text_range(),
            level,
            severity: Severity::Information,
        });
        Some(level)
    }
}
