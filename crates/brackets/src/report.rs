//! Whole-file colorization.
//!
//! Glues the pieces together for callers that start from a path or a string:
//! detect the grammar, parse with tree-sitter, apply the settings, and
//! collect every annotation. The CLI is built on these functions.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::annotate::Annotation;
use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::registry::ColorizerRegistry;
use crate::settings::BracketSettings;
use crate::syntax::{ParsedSource, SourceParser};

/// A parsed file and its bracket annotations.
pub struct ColoredSource {
    /// Source text and syntax tree
    pub parsed: ParsedSource,
    /// Annotations in document order
    pub annotations: Vec<Annotation>,
    /// `true` if the long-file setting suppressed colorization
    pub skipped: bool,
}

/// One colored bracket, flattened for display or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketRecord {
    /// Line number (1-indexed)
    pub line: usize,
    /// Byte column (1-indexed)
    pub column: usize,
    /// Bracket text
    pub text: String,
    /// Color level
    pub level: u8,
    /// Renderer style key
    pub style: &'static str,
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

/// Colorization result for one file, as emitted by `brackets annotate`.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as given on the command line
    pub path: PathBuf,
    /// Grammar used
    pub grammar: Grammar,
    /// Number of lines in the file
    pub lines: usize,
    /// `true` if the long-file setting suppressed colorization
    pub skipped: bool,
    /// Colored brackets in document order
    pub brackets: Vec<BracketRecord>,
}

impl ColoredSource {
    /// Flatten annotations into display records.
    #[must_use]
    pub fn records(&self) -> Vec<BracketRecord> {
        let source = self.parsed.source();
        self.annotations
            .iter()
            .map(|annotation| {
                let position = self.parsed.position(annotation.range.start);
                BracketRecord {
                    line: position.line,
                    column: position.column,
                    text: source
                        .get(annotation.range.clone())
                        .unwrap_or_default()
                        .to_string(),
                    level: annotation.level.get(),
                    style: annotation.style_key(),
                    start: annotation.range.start,
                    end: annotation.range.end,
                }
            })
            .collect()
    }

    /// Build the report for `path`.
    #[must_use]
    pub fn report(&self, path: &Path) -> FileReport {
        FileReport {
            path: path.to_path_buf(),
            grammar: self.parsed.grammar(),
            lines: self.parsed.line_count(),
            skipped: self.skipped,
            brackets: self.records(),
        }
    }
}

/// Parse `source` and color every bracket in it.
///
/// # Errors
///
/// Returns [`Error::Parser`] if the grammar has no bundled parser.
pub fn colorize_source(
    source: impl Into<String>,
    grammar: Grammar,
    settings: &BracketSettings,
    registry: &ColorizerRegistry,
) -> Result<ColoredSource> {
    let parsed = SourceParser::new(grammar)?.parse(source)?;
    let lines = parsed.line_count();
    let skipped = settings.skips_file(lines);

    let mut annotations = Vec::new();
    registry
        .get(grammar)
        .annotate(parsed.root_token(), Some(lines), settings, &mut annotations);

    tracing::debug!(
        %grammar,
        lines,
        brackets = annotations.len(),
        skipped,
        "Colorized source"
    );

    Ok(ColoredSource {
        parsed,
        annotations,
        skipped,
    })
}

/// Grammar for `path`, from `explicit` or else the file extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] if neither is available.
pub fn detect_grammar(path: &Path, explicit: Option<Grammar>) -> Result<Grammar> {
    if let Some(grammar) = explicit {
        return Ok(grammar);
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Grammar::from_extension)
        .ok_or_else(|| Error::UnsupportedLanguage(path.to_path_buf()))
}

/// Read `path` and color every bracket in it.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] for unknown extensions or grammars
/// without a bundled parser, and [`Error::Io`] if the file cannot be read.
pub fn colorize_file(
    path: &Path,
    grammar: Option<Grammar>,
    settings: &BracketSettings,
    registry: &ColorizerRegistry,
) -> Result<ColoredSource> {
    let grammar = detect_grammar(path, grammar)?;
    if grammar.tree_sitter_language().is_none() {
        return Err(Error::UnsupportedLanguage(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let source = String::from_utf8(bytes).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "File is not valid UTF-8");
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{} is not valid UTF-8", path.display()),
        ))
    })?;

    colorize_source(source, grammar, settings, registry)
}
