//! # Session Settings
//!
//! User preferences for a calculator session. Settings serialize to a small
//! JSON document; every field has a default so a partial file is valid.
//!
//! ```json
//! {
//!   "angle_unit": "degrees",
//!   "output": "json",
//!   "log_level": "debug"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::units::AngleUnit;

/// Global session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Unit assumed for trig angles when the user does not choose one
    pub angle_unit: AngleUnit,

    /// How one-shot results are printed
    pub output: OutputFormat,

    /// `tracing` filter directive (e.g. "warn", "calc_core=debug")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            angle_unit: AngleUnit::Radians,
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.angle_unit, AngleUnit::Radians);
        assert_eq!(settings.output, OutputFormat::Text);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_partial_document() {
        let settings = Settings::from_json(r#"{ "angle_unit": "degrees" }"#).unwrap();
        assert_eq!(settings.angle_unit, AngleUnit::Degrees);
        assert_eq!(settings.output, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_document() {
        assert!(Settings::from_json(r#"{ "angle_unit": "gradians" }"#).is_err());
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            angle_unit: AngleUnit::Degrees,
            output: OutputFormat::Json,
            log_level: "debug".to_string(),
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("\"output\": \"json\""));
        let roundtrip = Settings::from_json(&json).unwrap();
        assert_eq!(roundtrip, settings);
    }
}
