//! `brackets render` command implementation.

use std::path::Path;

use anyhow::Context;
use brackets::{ColoredSource, ColorizerRegistry, Grammar, colorize_file};
use colored::Colorize;

use super::display::{load_settings, paint};

/// Run the render command.
pub fn run(
    file: &Path,
    grammar: Option<Grammar>,
    config: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<()> {
    let settings = load_settings(config, cwd).context("failed to load settings")?;
    let colored = colorize_file(file, grammar, &settings, ColorizerRegistry::global())
        .with_context(|| format!("failed to colorize {}", file.display()))?;

    if colored.skipped {
        eprintln!(
            "{}: {} exceeds the long-file line threshold, printing without colors",
            "note".yellow().bold(),
            file.display()
        );
    }

    print!("{}", paint_source(&colored));
    Ok(())
}

/// Source text with every annotated range painted.
fn paint_source(colored: &ColoredSource) -> String {
    let source = colored.parsed.source();
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;

    for annotation in &colored.annotations {
        let range = annotation.range.clone();
        if range.start < cursor {
            continue;
        }
        out.push_str(&source[cursor..range.start]);
        out.push_str(&paint(&source[range.clone()], annotation.level).to_string());
        cursor = range.end;
    }
    out.push_str(&source[cursor..]);
    out
}
