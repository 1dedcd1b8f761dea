//! Nesting-level resolution for rainbow bracket colorization.
//!
//! Given a bracket token inside a parsed syntax tree, this crate computes the
//! color level it should be painted with, so that matching pairs at the same
//! depth share a color. The parse tree itself is supplied by the host through
//! the [`SyntaxToken`] capability trait; nothing here parses source text.
//!
//! ## Quick Start
//!
//! ```ignore
//! use brackets_core::{BracketSet, LevelResolver};
//!
//! let resolver = LevelResolver::new(BracketSet::default());
//!
//! // `token` is any host type implementing `SyntaxToken`
//! match resolver.resolve(&token) {
//!     Some(level) => paint(&token, level.style_key()),
//!     None => {} // not a bracket, or an angle used as an operator
//! }
//! ```
//!
//! ## Modules
//!
//! - [`set`]: which spellings count as left and right brackets
//! - [`level`]: the wrapping color level
//! - [`tree`]: the tree-navigation interface the resolver walks
//! - [`resolver`]: the ancestor walk itself

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(test, feature = "test-util"))]
pub mod arena;
pub mod level;
pub mod resolver;
pub mod set;
pub mod tree;

pub use level::{Level, PALETTE_SIZE};
pub use resolver::{LevelResolver, is_filtered_angle, resolve_level};
pub use set::BracketSet;
pub use tree::{Leaves, SyntaxToken, leaves};
