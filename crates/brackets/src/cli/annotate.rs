//! `brackets annotate` command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use brackets::{ColorizerRegistry, FileReport, Grammar, colorize_file};
use colored::Colorize;
use rayon::prelude::*;

use super::display::{load_settings, paint};

/// Run the annotate command.
///
/// Files are parsed in parallel; results are printed in argument order.
pub fn run(
    files: &[PathBuf],
    grammar: Option<Grammar>,
    json: bool,
    config: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<()> {
    let settings = load_settings(config, cwd).context("failed to load settings")?;
    let registry = ColorizerRegistry::global();

    let results: Vec<(&PathBuf, brackets::Result<FileReport>)> = files
        .par_iter()
        .map(|path| {
            let report = colorize_file(path, grammar, &settings, registry)
                .map(|colored| colored.report(path));
            (path, report)
        })
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (path, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {}: {e}", "error".red().bold(), path.display());
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if failures > 0 {
        bail!("{failures} of {} files could not be colorized", files.len());
    }
    Ok(())
}

fn print_report(report: &FileReport) {
    println!(
        "{} ({}, {} lines)",
        report.path.display().to_string().white().bold(),
        report.grammar,
        report.lines
    );

    if report.skipped {
        println!(
            "  {}",
            "skipped: file exceeds the long-file line threshold".yellow()
        );
        return;
    }

    if report.brackets.is_empty() {
        println!("  {}", "no brackets".dimmed());
        return;
    }

    for record in &report.brackets {
        let level = brackets::Level::new(record.level).unwrap_or(brackets::Level::MIN);
        println!(
            "  {:>5}:{:<4} {} {} {}",
            record.line,
            record.column,
            paint(&format!("{:<3}", record.text), level),
            format!("level {}", record.level).dimmed(),
            record.style.dimmed()
        );
    }
}
