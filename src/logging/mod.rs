//! Diagnostics and score logging.
//!
//! The terminal is owned by the TUI, so `tracing` output goes to a file
//! under the configured log directory instead of stdout. Submitted scores
//! can additionally be appended to a daily score log, one line per
//! submission: `scores_<date>.log`.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::config::LoggingConfig;
use crate::quiz::model::ScoreResult;

/// Route `tracing` output to `<log_dir>/quizdeck.log`. No-op when
/// diagnostics are disabled.
pub fn init_diagnostics(config: &LoggingConfig) -> Result<()> {
    if !config.diagnostics {
        return Ok(());
    }
    let dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("quizdeck.log"))
        .context("Failed to open diagnostics log")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

/// Writes submitted scores to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct ScoreLog {
    enabled: bool,
    log_dir: String,
    file_handles: HashMap<String, fs::File>,
}

impl ScoreLog {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.score_log,
            log_dir: config.log_dir.clone(),
            file_handles: HashMap::new(),
        }
    }

    /// Append one line for a submission. No-op if the score log is disabled.
    pub fn log_score(&mut self, deck_title: &str, result: &ScoreResult) {
        if !self.enabled {
            return;
        }

        let now = chrono::Local::now();
        let filename = format!("scores_{}.log", now.format("%Y-%m-%d"));
        let line = format!(
            "[{}] {}: {}/{} ({}%)",
            now.format("%H:%M:%S"),
            deck_title,
            result.correct,
            result.total,
            result.percent()
        );

        let log_dir = expand_log_dir(&self.log_dir);
        let filepath = log_dir.join(&filename);

        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a file that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}

fn expand_log_dir(raw: &str) -> PathBuf {
    if raw.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(raw.trim_start_matches("~/"));
        }
    }
    PathBuf::from(raw)
}
