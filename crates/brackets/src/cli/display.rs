//! Common display utilities for CLI commands.

use brackets::Level;
use colored::{ColoredString, Colorize};

/// Paint `text` in the terminal color for `level`.
///
/// Gold, orchid and sky blue, in that order.
pub fn paint(text: &str, level: Level) -> ColoredString {
    match level.get() {
        1 => text.truecolor(255, 215, 0),
        2 => text.truecolor(218, 112, 214),
        _ => text.truecolor(23, 159, 255),
    }
}

/// Load settings for a command, logging where they came from.
pub fn load_settings(
    config: Option<&std::path::Path>,
    cwd: &std::path::Path,
) -> brackets::Result<brackets::BracketSettings> {
    let (settings, source) = brackets::BracketSettings::discover(config, cwd)?;
    match source {
        Some(path) => tracing::debug!(path = %path.display(), "Using settings file"),
        None => tracing::debug!("Using default settings"),
    }
    Ok(settings)
}
