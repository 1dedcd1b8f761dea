//! CLI command implementations.

mod display;

pub mod annotate;
pub mod config;
pub mod render;
