use crate::config::AppConfig;
use crate::quiz::clock::{Scheduler, TokioScheduler};
use crate::quiz::{QuizError, SessionController, Status, QUESTIONS_PER_SESSION};
use tracing::warn;

/// Everything the UI reads: the session controller plus view-only state
/// (option highlight, review scroll, status message).
pub struct AppState<S: Scheduler = TokioScheduler> {
    pub config: AppConfig,
    pub quiz: SessionController<S>,
    pub highlighted: usize,
    pub review_scroll: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl<S: Scheduler> AppState<S> {
    pub fn new(config: AppConfig, quiz: SessionController<S>) -> Self {
        Self {
            config,
            quiz,
            highlighted: 0,
            review_scroll: 0,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn status(&self) -> Status {
        self.quiz.status()
    }

    /// Reset per-screen view state after a transition.
    pub fn reset_view(&mut self) {
        self.highlighted = 0;
        self.review_scroll = 0;
        self.status_message = None;
        self.dirty = true;
    }

    pub fn report_error(&mut self, err: &QuizError) {
        warn!(error = %err, status = ?self.quiz.status(), "event rejected");
        self.status_message = Some(err.to_string());
        self.dirty = true;
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = if self.highlighted == 0 { 3 } else { self.highlighted - 1 };
        self.dirty = true;
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % 4;
        self.dirty = true;
    }

    pub fn scroll_review_up(&mut self) {
        self.review_scroll = self.review_scroll.saturating_sub(1);
        self.dirty = true;
    }

    pub fn scroll_review_down(&mut self) {
        let last = self.quiz.session().answer_log.len().saturating_sub(1);
        self.review_scroll = (self.review_scroll + 1).min(last);
        self.dirty = true;
    }

    pub fn low_time(&self) -> bool {
        self.quiz.status() == Status::Playing
            && self.quiz.session().time_remaining <= self.config.ui.low_time_warning_secs
    }

    /// Progress through the session as shown in the header (1-based).
    pub fn progress_label(&self) -> String {
        let shown = (self.quiz.session().current_index + 1).min(QUESTIONS_PER_SESSION);
        format!("{} / {}", shown, QUESTIONS_PER_SESSION)
    }

    pub fn key_hints(&self) -> &'static str {
        match self.quiz.status() {
            Status::Start => "Enter start  q quit",
            Status::Playing => "a-d / 1-4 answer  ↑↓ move  Enter choose  q quit",
            Status::Finished => "r play again  h home  ↑↓ scroll  q quit",
        }
    }
}
