//! # Brackets: rainbow bracket colorization
//!
//! Brackets assigns each bracket in a source file one of three colors so that
//! matching pairs at the same nesting depth share a color. Level resolution
//! lives in [`brackets_core`]; this crate supplies everything around it:
//!
//! - **Grammars**: which bracket spellings each language uses
//! - **Registry**: one shared colorizer per grammar, built on first use
//! - **Settings**: the long-file cutoff, persisted as YAML
//! - **Syntax**: a tree-sitter adapter for C# and Rust sources
//! - **Annotations**: the informational style ranges handed to a renderer
//!
//! ## Quick Start
//!
//! ```no_run
//! use brackets::{BracketSettings, ColorizerRegistry, Grammar, colorize_source};
//!
//! let colored = colorize_source(
//!     "class C { List<int> xs; }",
//!     Grammar::CSharp,
//!     &BracketSettings::default(),
//!     ColorizerRegistry::global(),
//! )?;
//!
//! for record in colored.records() {
//!     println!("{}:{} {} -> {}", record.line, record.column, record.text, record.style);
//! }
//! # Ok::<(), brackets::Error>(())
//! ```
//!
//! Hosts with their own syntax tree implement [`brackets_core::SyntaxToken`]
//! and call [`BracketColorizer::colorize`] per token instead.

pub mod annotate;
mod error;
pub mod grammar;
pub mod registry;
pub mod report;
pub mod settings;
pub mod syntax;

pub use annotate::{Annotation, AnnotationSink, BracketColorizer, Severity};
pub use brackets_core::{BracketSet, Level, LevelResolver, SyntaxToken};
pub use error::{Error, Result};
pub use grammar::Grammar;
pub use registry::ColorizerRegistry;
pub use report::{
    BracketRecord, ColoredSource, FileReport, colorize_file, colorize_source, detect_grammar,
};
pub use settings::{BracketSettings, SharedSettings};
pub use syntax::{ParsedSource, Position, SourceParser, TsToken, line_count};
