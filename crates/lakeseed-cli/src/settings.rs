use std::path::{Path, PathBuf};

use lakeseed_generate::GenerateOptions;
use serde::Deserialize;

use crate::CliError;

/// Settings file picked up from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "lakeseed.toml";

/// Optional overrides read from a TOML settings file.
///
/// Only run mechanics can be set here; volumes and distributions are fixed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub out_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
    pub write_report: Option<bool>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn parse(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply the settings on top of `options`.
    pub fn apply(&self, options: &mut GenerateOptions) {
        if let Some(out_dir) = &self.out_dir {
            options.out_dir = out_dir.clone();
        }
        if let Some(seed) = self.seed {
            options.seed = seed;
        }
        if let Some(parallel) = self.parallel {
            options.parallel = parallel;
        }
        if let Some(write_report) = self.write_report {
            options.write_report = write_report;
        }
    }
}

/// Load an explicit settings file, or the default one if it exists.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, CliError> {
    match explicit {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|err| {
                CliError::InvalidConfig(format!("cannot read {}: {err}", path.display()))
            })?;
            Settings::parse(&content)
        }
        None => {
            let path = Path::new(DEFAULT_SETTINGS_FILE);
            if path.exists() {
                Settings::parse(&std::fs::read_to_string(path)?)
            } else {
                Ok(Settings::default())
            }
        }
    }
}
