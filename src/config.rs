// src/config.rs

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "DRIVING_QUIZ_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "quiz_config.yaml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    /// CSV o JSON con el banco; sin valor se usa el banco embebido.
    pub question_source: Option<PathBuf>,
    pub question_count: usize,
    pub pass_percentage: f64,
    pub shuffle_questions: bool,
    pub progress_path: PathBuf,
    pub report_log_path: PathBuf,
    pub report_webhook: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_source: None,
            question_count: 20,
            pass_percentage: 80.0,
            shuffle_questions: true,
            progress_path: PathBuf::from("quiz_progress.json"),
            report_log_path: PathBuf::from("error_reports.log"),
            report_webhook: None,
        }
    }
}

impl QuizConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Lee la configuración de `$DRIVING_QUIZ_CONFIG` o de `quiz_config.yaml`.
    /// Si no existe o no se puede leer, se usan los valores por defecto.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_or_default(&path)
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Corrige valores fuera de rango.
    fn sanitized(mut self) -> Self {
        if !(0.0..=100.0).contains(&self.pass_percentage) {
            log::warn!("pass_percentage {} out of range, using 80", self.pass_percentage);
            self.pass_percentage = 80.0;
        }
        if self.question_count == 0 {
            log::warn!("question_count must be at least 1, using 20");
            self.question_count = 20;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = QuizConfig::from_yaml_str("question_count: 40\n").expect("yaml");
        assert_eq!(config.question_count, 40);
        assert_eq!(config.pass_percentage, 80.0);
        assert!(config.shuffle_questions);
        assert_eq!(config.question_source, None);
    }

    #[test]
    fn full_yaml_is_read() {
        let yaml = "question_source: bank.json\n\
                    question_count: 10\n\
                    pass_percentage: 70\n\
                    shuffle_questions: false\n\
                    progress_path: p.json\n\
                    report_log_path: r.log\n\
                    report_webhook: https://example.com/hook\n";
        let config = QuizConfig::from_yaml_str(yaml).expect("yaml");
        assert_eq!(config.question_source, Some(PathBuf::from("bank.json")));
        assert_eq!(config.pass_percentage, 70.0);
        assert!(!config.shuffle_questions);
        assert_eq!(config.report_webhook.as_deref(), Some("https://example.com/hook"));
    }

    #[test]
    fn missing_or_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.yaml");
        assert_eq!(QuizConfig::load_or_default(&missing), QuizConfig::default());

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "question_count: [").expect("write");
        assert_eq!(QuizConfig::load_or_default(&broken), QuizConfig::default());
    }

    #[test]
    fn out_of_range_values_are_corrected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cfg.yaml");
        std::fs::write(&path, "pass_percentage: 140\nquestion_count: 0\n").expect("write");
        let config = QuizConfig::load_or_default(&path);
        assert_eq!(config.pass_percentage, 80.0);
        assert_eq!(config.question_count, 20);
    }
}
