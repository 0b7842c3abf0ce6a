//! Settings loading: optional JSON file, then command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use calc_core::{AngleUnit, OutputFormat, Settings};

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub degrees: bool,
    pub json: bool,
    pub log_level: Option<String>,
}

/// Read settings from `path` (defaults when `None`) and apply `overrides`.
pub fn load_settings(path: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file '{}'", path.display()))?;
            Settings::from_json(&text)
                .with_context(|| format!("Invalid settings file '{}'", path.display()))?
        }
        None => Settings::default(),
    };

    if overrides.degrees {
        settings.angle_unit = AngleUnit::Degrees;
    }
    if overrides.json {
        settings.output = OutputFormat::Json;
    }
    if let Some(level) = &overrides.log_level {
        settings.log_level = level.clone();
    }

    Ok(settings)
}
