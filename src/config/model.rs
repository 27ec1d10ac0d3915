//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default = "default_ui")]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deck: DeckConfig::default(),
            ui: default_ui(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Where questions come from and how they are ordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Deck file to load when none is given on the command line. The
    /// built-in sample deck is used when this is unset too.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Reorder the questions once at load. The running session always sees
    /// a fixed order.
    #[serde(default)]
    pub shuffle_questions: bool,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Show the question overview panel on the left.
    #[serde(default = "default_true")]
    pub show_question_list: bool,
}

/// Session behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Treat re-selection after submit as a no-op. Navigation stays
    /// available for review either way.
    #[serde(default)]
    pub lock_answers_after_submit: bool,
}

/// Diagnostics and score logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Append submitted scores to a daily log file.
    #[serde(default)]
    pub score_log: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Write tracing diagnostics to a file in `log_dir`. Output never goes
    /// to stdout; the terminal belongs to the TUI.
    #[serde(default)]
    pub diagnostics: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            score_log: false,
            log_dir: default_log_dir(),
            diagnostics: false,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/quizdeck/logs".to_string()
}
fn default_ui() -> UiConfig {
    UiConfig {
        timestamp_format: default_timestamp_format(),
        show_question_list: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.ui.show_question_list);
        assert!(!config.behavior.lock_answers_after_submit);
        assert!(config.deck.path.is_none());
    }

    #[test]
    fn partial_sections_fill_in() {
        let config: AppConfig = toml::from_str(
            r#"
            [behavior]
            lock_answers_after_submit = true

            [deck]
            shuffle_questions = true
            "#,
        )
        .unwrap();
        assert!(config.behavior.lock_answers_after_submit);
        assert!(config.deck.shuffle_questions);
        assert_eq!(config.ui.timestamp_format, "%H:%M");
    }

    #[test]
    fn default_config_round_trips() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.logging.log_dir, config.logging.log_dir);
    }
}
