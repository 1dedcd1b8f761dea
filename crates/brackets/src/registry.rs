//! Lazily built, shared colorizers keyed by grammar.
//!
//! Every grammar gets exactly one [`BracketColorizer`] per registry. The
//! first caller builds it; concurrent first callers block on the same
//! `OnceLock` and all receive that single instance.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::annotate::BracketColorizer;
use crate::grammar::Grammar;

/// Per-grammar colorizer cache.
#[derive(Debug, Default)]
pub struct ColorizerRegistry {
    csharp: OnceLock<BracketColorizer>,
    fsharp: OnceLock<BracketColorizer>,
    rust: OnceLock<BracketColorizer>,
    constructed: AtomicUsize,
}

impl ColorizerRegistry {
    /// An empty registry. Colorizers are built on first use.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            csharp: OnceLock::new(),
            fsharp: OnceLock::new(),
            rust: OnceLock::new(),
            constructed: AtomicUsize::new(0),
        }
    }

    /// The process-wide registry.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: ColorizerRegistry = ColorizerRegistry::new();
        &GLOBAL
    }

    /// The colorizer for `grammar`, building it on first use.
    pub fn get(&self, grammar: Grammar) -> &BracketColorizer {
        self.slot(grammar).get_or_init(|| {
            self.constructed.fetch_add(1, Ordering::Relaxed);
            tracing::info!(%grammar, "Creating bracket colorizer");
            BracketColorizer::new(grammar)
        })
    }

    /// Number of colorizers built so far.
    #[must_use]
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::Relaxed)
    }

    fn slot(&self, grammar: Grammar) -> &OnceLock<BracketColorizer> {
        match grammar {
            Grammar::CSharp => &self.csharp,
            Grammar::FSharp => &self.fsharp,
            Grammar::Rust => &self.rust,
        }
    }
}
