use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    policy::{self, COURSES_DEFAULT, TIME_STUDY_DEFAULT},
    predictor::FeatureRecord,
};

/// Optional configuration file looked up in the working directory.
pub const CONFIG_PATH: &str = "marks-predictor.json";

/// Artifact used when the configuration does not name one.
pub const DEFAULT_ARTIFACT_PATH: &str = "ols_model.json";

/// Application settings; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub artifact_path: PathBuf,
    pub number_courses: i64,
    pub time_study: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            number_courses: i64::from(COURSES_DEFAULT),
            time_study: TIME_STUDY_DEFAULT,
        }
    }
}

impl AppConfig {
    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    /// Returns a human-readable string if the file exists but cannot be read
    /// or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no {} found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("cannot read '{}': {e}", path.display())),
        };

        serde_json::from_str(&content).map_err(|e| format!("invalid JSON in '{}': {e}", path.display()))
    }

    /// Initial input values, passed through the input policy.
    pub fn initial_record(&self) -> FeatureRecord {
        policy::sanitize(self.number_courses, self.time_study)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join(CONFIG_PATH)).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.artifact_path, PathBuf::from("ols_model.json"));
        assert_eq!(config.initial_record(), FeatureRecord::new(3, 4.5));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_PATH);
        fs::write(&path, r#"{ "artifact_path": "models/marks.json" }"#).unwrap();

        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.artifact_path, PathBuf::from("models/marks.json"));
        assert_eq!(config.number_courses, 3);
    }

    #[test]
    fn configured_inputs_are_clamped() {
        let config = AppConfig {
            number_courses: 42,
            time_study: 11.3,
            ..AppConfig::default()
        };

        assert_eq!(config.initial_record(), FeatureRecord::new(10, 10.0));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_PATH);
        fs::write(&path, r#"{ "model": "x" }"#).unwrap();

        let err = AppConfig::load_or_default(&path).unwrap_err();
        assert!(err.starts_with("invalid JSON"));
    }
}
