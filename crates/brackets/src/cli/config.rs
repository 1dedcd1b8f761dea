//! `brackets config` command implementations.

use std::path::Path;

use anyhow::{Context, bail};
use brackets::BracketSettings;
use brackets::settings::SETTINGS_FILE_NAME;
use colored::Colorize;

use super::display::load_settings;

/// Print the effective settings as YAML.
pub fn show(config: Option<&Path>, cwd: &Path) -> anyhow::Result<()> {
    let settings = load_settings(config, cwd).context("failed to load settings")?;
    print!("{}", settings.to_yaml()?);
    Ok(())
}

/// Write a settings file with default values.
pub fn init(config: Option<&Path>, cwd: &Path, force: bool) -> anyhow::Result<()> {
    let path = config.map_or_else(|| cwd.join(SETTINGS_FILE_NAME), Path::to_path_buf);

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    BracketSettings::default()
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("{} {}", "Created".green().bold(), path.display());
    Ok(())
}
