//! Configuration data model.
//!
//! Every field has a default so the quiz runs without a config file. The
//! game rules themselves (questions per session, time limit, scoring) are
//! constants in `quiz::session`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where questions come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    /// TOML question file replacing the built-in pool.
    #[serde(default)]
    pub questions_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds left at which the countdown turns red.
    #[serde(default = "default_low_time_warning")]
    pub low_time_warning_secs: u32,
    /// Show the per-question review on the results screen.
    #[serde(default = "default_true")]
    pub show_review: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            low_time_warning_secs: default_low_time_warning(),
            show_review: true,
        }
    }
}

/// Diagnostic log and results transcript settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Append every finished session to `results_<date>.log`.
    #[serde(default)]
    pub record_results: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_dir: default_log_dir(),
            record_results: false,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_low_time_warning() -> u32 {
    10
}
fn default_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/quizclock".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert!(cfg.quiz.questions_file.is_none());
        assert_eq!(cfg.ui.low_time_warning_secs, 10);
        assert!(cfg.ui.show_review);
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.logging.record_results);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [quiz]
            questions_file = "/tmp/elephants.toml"

            [ui]
            low_time_warning_secs = 5

            [logging]
            record_results = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.quiz.questions_file, Some(PathBuf::from("/tmp/elephants.toml")));
        assert_eq!(cfg.ui.low_time_warning_secs, 5);
        assert!(cfg.ui.show_review);
        assert!(cfg.logging.record_results);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/quizclock");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ui.low_time_warning_secs, 10);
    }
}
