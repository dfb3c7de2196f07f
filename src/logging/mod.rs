//! Diagnostics and the results transcript.
//!
//! The terminal belongs to the TUI, so `tracing` output goes to
//! `<log_dir>/quizclock.log`. When `record_results` is enabled, every
//! finished session is also appended to a daily `results_<date>.log` in the
//! same directory. The transcript is write-only; nothing reads it back.

use crate::config::{expand_home, LoggingConfig};
use crate::quiz::{AnswerRecord, FinishReason, Summary, QUESTIONS_PER_SESSION};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{warn, Level};

/// Install the global `tracing` subscriber writing to the log directory.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let dir = expand_home(&config.log_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join("quizclock.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = config.level.parse::<Level>().ok();
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level.unwrap_or(Level::INFO))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    if level.is_none() {
        warn!(level = %config.level, "unknown log level, using info");
    }
    Ok(())
}

/// Appends finished sessions to daily transcript files.
///
/// File handles are cached for the lifetime of the logger. A file that
/// cannot be opened is reported once through `tracing` and skipped.
pub struct ResultLogger {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, File>,
}

impl ResultLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.record_results,
            log_dir: expand_home(&config.log_dir),
            file_handles: HashMap::new(),
        }
    }

    pub fn record(
        &mut self,
        finished_at: DateTime<Local>,
        summary: &Summary,
        reason: FinishReason,
        answers: &[AnswerRecord],
    ) {
        if !self.enabled {
            return;
        }

        let filename = format!("results_{}.log", finished_at.format("%Y-%m-%d"));
        if !self.file_handles.contains_key(&filename) {
            let path = self.log_dir.join(&filename);
            let opened = fs::create_dir_all(&self.log_dir)
                .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));
            match opened {
                Ok(file) => {
                    self.file_handles.insert(filename.clone(), file);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "results log unavailable, disabling");
                    self.enabled = false;
                    return;
                }
            }
        }

        let Some(handle) = self.file_handles.get_mut(&filename) else {
            return;
        };
        for line in format_entry(finished_at, summary, reason, answers) {
            if let Err(e) = writeln!(handle, "{}", line) {
                warn!(error = %e, "failed to write results log");
                return;
            }
        }
    }
}

fn format_entry(
    finished_at: DateTime<Local>,
    summary: &Summary,
    reason: FinishReason,
    answers: &[AnswerRecord],
) -> Vec<String> {
    let reason = match reason {
        FinishReason::AllAnswered => "all-answered",
        FinishReason::TimeExpired => "time-expired",
    };
    let mut lines = vec![format!(
        "[{}] score={} correct={} incorrect={} unanswered={} finished={}",
        finished_at.format("%Y-%m-%d %H:%M:%S"),
        summary.score,
        summary.correct_count,
        summary.incorrect_count,
        summary.unanswered(QUESTIONS_PER_SESSION),
        reason
    )];
    for (i, answer) in answers.iter().enumerate() {
        lines.push(format!(
            "  {:>2}. [{}] chosen={} correct={} {}",
            i + 1,
            if answer.was_correct { "+" } else { "-" },
            answer.chosen,
            answer.correct,
            answer.question_text
        ));
    }
    lines
}
