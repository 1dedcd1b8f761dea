//! Persisted colorization settings.
//!
//! Two values control whether a file is colored at all:
//!
//! ```yaml
//! disable-for-long-files: true
//! long-file-line-count-threshold: 1000
//! ```
//!
//! Settings live in a YAML file (`brackets.yaml` by default). Callers read
//! them through a [`SharedSettings`] snapshot taken at call time, so a reload
//! never changes the outcome of a colorization already in progress.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the settings file looked up in the working directory.
pub const SETTINGS_FILE_NAME: &str = "brackets.yaml";

/// Line threshold used when none is configured.
pub const DEFAULT_LINE_THRESHOLD: u32 = 1000;

/// Smallest accepted line threshold.
pub const MIN_LINE_THRESHOLD: u32 = 1;

/// Settings controlling when colorization runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct BracketSettings {
    /// Skip files longer than `long_file_line_count_threshold`.
    pub disable_for_long_files: bool,

    /// Line count above which long files are skipped.
    pub long_file_line_count_threshold: u32,
}

impl Default for BracketSettings {
    fn default() -> Self {
        Self {
            disable_for_long_files: false,
            long_file_line_count_threshold: DEFAULT_LINE_THRESHOLD,
        }
    }
}

impl BracketSettings {
    /// Check that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.long_file_line_count_threshold < MIN_LINE_THRESHOLD {
            return Err(Error::Config(format!(
                "long-file-line-count-threshold must be at least {MIN_LINE_THRESHOLD}"
            )));
        }
        Ok(())
    }

    /// Returns `true` if a file with `line_count` lines must not be colored.
    #[must_use]
    pub fn skips_file(&self, line_count: usize) -> bool {
        self.disable_for_long_files
            && line_count > self.long_file_line_count_threshold as usize
    }

    /// Parse and validate settings from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to the defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Render settings as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            Error::Yaml(inner) => Error::Config(format!("{}: {inner}", path.display())),
            other => other,
        })
    }

    /// Save settings to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Load from `explicit` if given, otherwise from [`SETTINGS_FILE_NAME`]
    /// in `dir` if it exists, otherwise fall back to the defaults.
    ///
    /// An explicit path that does not exist is an error.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = dir.join(SETTINGS_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Loading settings");
            return Ok((Self::load(&candidate)?, Some(candidate)));
        }

        tracing::debug!("No settings file found, using defaults");
        Ok((Self::default(), None))
    }
}

/// Process-wide settings, read far more often than written.
#[derive(Debug, Default)]
pub struct SharedSettings {
    inner: RwLock<BracketSettings>,
}

impl SharedSettings {
    /// Wrap an initial set of values.
    #[must_use]
    pub fn new(settings: BracketSettings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    /// Copy of the current values.
    #[must_use]
    pub fn snapshot(&self) -> BracketSettings {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current values after validating them.
    pub fn replace(&self, settings: BracketSettings) -> Result<()> {
        settings.validate()?;
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = settings;
        tracing::debug!(?settings, "Settings updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_editor_defaults() {
        let settings = BracketSettings::default();
        assert!(!settings.disable_for_long_files);
        assert_eq!(settings.long_file_line_count_threshold, 1000);
    }

    #[rstest]
    #[case::disabled_flag(false, 10, 5000, false)]
    #[case::under_threshold(true, 10, 9, false)]
    #[case::at_threshold(true, 10, 10, false)]
    #[case::over_threshold(true, 10, 11, true)]
    #[case::empty_file(true, 1, 0, false)]
    fn skips_only_long_files_when_enabled(
        #[case] disable: bool,
        #[case] threshold: u32,
        #[case] lines: usize,
        #[case] expected: bool,
    ) {
        let settings = BracketSettings {
            disable_for_long_files: disable,
            long_file_line_count_threshold: threshold,
        };
        assert_eq!(settings.skips_file(lines), expected);
    }

    #[test]
    fn parses_kebab_case_yaml() {
        let settings = BracketSettings::from_yaml(
            "disable-for-long-files: true\nlong-file-line-count-threshold: 250\n",
        )
        .expect("valid settings");

        assert!(settings.disable_for_long_files);
        assert_eq!(settings.long_file_line_count_threshold, 250);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let settings = BracketSettings::from_yaml("disable-for-long-files: true\n")
            .expect("partial settings are valid");

        assert!(settings.disable_for_long_files);
        assert_eq!(settings.long_file_line_count_threshold, DEFAULT_LINE_THRESHOLD);
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("  \n\n")]
    fn empty_document_is_default(#[case] content: &str) {
        assert_eq!(
            BracketSettings::from_yaml(content).expect("empty is valid"),
            BracketSettings::default()
        );
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let err = BracketSettings::from_yaml("long-file-line-count-threshold: 0\n")
            .expect_err("zero threshold must fail");

        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = BracketSettings::from_yaml("max-lines: 10\n").expect_err("unknown key");
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn yaml_round_trip() {
        let settings = BracketSettings {
            disable_for_long_files: true,
            long_file_line_count_threshold: 42,
        };
        let yaml = settings.to_yaml().expect("serializes");
        assert!(yaml.contains("disable-for-long-files: true"));
        assert_eq!(BracketSettings::from_yaml(&yaml).expect("parses"), settings);
    }

    #[test]
    fn shared_settings_snapshot_sees_replacement() {
        let shared = SharedSettings::default();
        assert_eq!(shared.snapshot(), BracketSettings::default());

        let updated = BracketSettings {
            disable_for_long_files: true,
            long_file_line_count_threshold: 3,
        };
        shared.replace(updated).expect("valid settings");

        assert_eq!(shared.snapshot(), updated);
    }

    #[test]
    fn shared_settings_rejects_invalid_replacement() {
        let shared = SharedSettings::default();
        let invalid = BracketSettings {
            disable_for_long_files: true,
            long_file_line_count_threshold: 0,
        };

        assert!(shared.replace(invalid).is_err());
        assert_eq!(shared.snapshot(), BracketSettings::default());
    }
}
