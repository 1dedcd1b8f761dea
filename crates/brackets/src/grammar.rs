//! Supported grammars and their bracket configurations.
//!
//! Each grammar selects one [`BracketSet`]. Most use the defaults; F# adds
//! its attribute delimiters `[<` and `>]`.
//!
//! ## Adding a New Grammar
//!
//! 1. Add the variant to [`Grammar`] and to [`Grammar::ALL`]
//! 2. Map its file extensions in [`Grammar::extensions`] and
//!    [`Grammar::from_extension`]
//! 3. Return its bracket spellings from [`Grammar::bracket_set`]
//! 4. If a tree-sitter grammar crate exists, return it from
//!    [`Grammar::tree_sitter_language`]
//! 5. Add its slot to the registry

use brackets_core::BracketSet;
use serde::{Deserialize, Serialize};

/// Grammars with a bracket configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// C# source files (`.cs`)
    #[value(name = "csharp")]
    CSharp,
    /// F# source files (`.fs`, `.fsi`, `.fsx`)
    #[value(name = "fsharp")]
    FSharp,
    /// Rust source files (`.rs`)
    Rust,
}

impl Grammar {
    /// Every grammar, in declaration order.
    pub const ALL: [Grammar; 3] = [Self::CSharp, Self::FSharp, Self::Rust];

    /// File extensions handled by this grammar.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::CSharp => &["cs"],
            Self::FSharp => &["fs", "fsi", "fsx"],
            Self::Rust => &["rs"],
        }
    }

    /// Detect grammar from file extension.
    ///
    /// # Returns
    ///
    /// `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "cs" => Some(Self::CSharp),
            "fs" | "fsi" | "fsx" => Some(Self::FSharp),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Short lowercase name, as used on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
            Self::FSharp => "fsharp",
            Self::Rust => "rust",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CSharp => "C#",
            Self::FSharp => "F#",
            Self::Rust => "Rust",
        }
    }

    /// Bracket spellings recognized in this grammar.
    #[must_use]
    pub fn bracket_set(&self) -> BracketSet {
        match self {
            Self::CSharp | Self::Rust => BracketSet::default(),
            Self::FSharp => BracketSet::with_additional(["[<"], [">]"]),
        }
    }

    /// Tree-sitter language for parsing, if one is bundled.
    ///
    /// F# has no bundled parser; hosts that already have an F# tree can still
    /// color it through the registry.
    #[must_use]
    pub fn tree_sitter_language(&self) -> Option<tree_sitter::Language> {
        match self {
            Self::CSharp => Some(tree_sitter_c_sharp::LANGUAGE.into()),
            Self::Rust => Some(tree_sitter_rust::LANGUAGE.into()),
            Self::FSharp => None,
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
