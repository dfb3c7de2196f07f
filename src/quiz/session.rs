//! Session controller: the START → PLAYING → FINISHED state machine, its
//! scoring rules, and ownership of the countdown clock.
//!
//! Every operation either completes its whole transition or returns an
//! error without touching any state. At most one clock is armed, and only
//! while the status is [`Status::Playing`].

use crate::quiz::clock::{ClockHandle, Epoch, Scheduler};
use crate::quiz::error::QuizError;
use crate::quiz::pool::QuestionPool;
use crate::quiz::question::{AnswerLetter, Question};
use crate::quiz::summary::{Breakdown, Summary};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::fmt;
use tracing::{debug, info};

pub const QUESTIONS_PER_SESSION: usize = 10;
pub const TIME_LIMIT_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Start,
    Playing,
    Finished,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Start => "on the start screen",
            Status::Playing => "a quiz is running",
            Status::Finished => "the quiz is finished",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    AllAnswered,
    TimeExpired,
}

/// Snapshot of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_text: String,
    pub chosen: AnswerLetter,
    pub correct: AnswerLetter,
    pub was_correct: bool,
}

/// Mutable per-run data. Empty while on the start screen.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: i32,
    pub time_remaining: u32,
    pub answer_log: Vec<AnswerRecord>,
}

impl Session {
    pub fn unanswered(&self) -> usize {
        self.questions.len().saturating_sub(self.answer_log.len())
    }
}

/// Result of an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continued,
    Finished(FinishReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick from an earlier session, or one that arrived after the clock
    /// stopped. Nothing changed.
    Stale,
    Counted { remaining: u32 },
    Expired,
}

pub struct SessionController<S: Scheduler> {
    pool: QuestionPool,
    scheduler: S,
    rng: StdRng,
    status: Status,
    session: Session,
    summary: Option<Summary>,
    finish_reason: Option<FinishReason>,
    epoch: Epoch,
    clock: Option<S::Handle>,
}

impl<S: Scheduler> SessionController<S> {
    pub fn new(pool: QuestionPool, scheduler: S) -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_rng(pool, scheduler, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(pool: QuestionPool, scheduler: S, rng: StdRng) -> Self {
        Self {
            pool,
            scheduler,
            rng,
            status: Status::Start,
            session: Session::default(),
            summary: None,
            finish_reason: None,
            epoch: 0,
            clock: None,
        }
    }

    /// Begin a fresh session from any state. Also serves as "play again".
    pub fn start(&mut self) -> Result<(), QuizError> {
        let questions = self.pool.sample(&mut self.rng, QUESTIONS_PER_SESSION)?;

        self.cancel_clock();
        self.epoch += 1;
        self.session = Session {
            questions,
            current_index: 0,
            score: 0,
            time_remaining: TIME_LIMIT_SECS,
            answer_log: Vec::new(),
        };
        self.summary = None;
        self.finish_reason = None;
        self.status = Status::Playing;
        self.clock = Some(self.scheduler.arm(self.epoch));

        info!(epoch = self.epoch, pool = self.pool.len(), "session started");
        Ok(())
    }

    /// Answer the open question by option position (0 = A).
    pub fn select_option(&mut self, index: usize) -> Result<Transition, QuizError> {
        let letter = AnswerLetter::from_index(index).ok_or(QuizError::InvalidOption(index))?;
        self.submit_answer(letter)
    }

    pub fn submit_answer(&mut self, letter: AnswerLetter) -> Result<Transition, QuizError> {
        if self.status != Status::Playing || self.session.current_index >= QUESTIONS_PER_SESSION {
            return Err(QuizError::InvalidState {
                operation: "submit an answer",
                status: self.status,
            });
        }

        let question = &self.session.questions[self.session.current_index];
        let was_correct = question.is_correct(letter);
        let record = AnswerRecord {
            question_text: question.text.clone(),
            chosen: letter,
            correct: question.answer,
            was_correct,
        };
        debug!(
            index = self.session.current_index,
            question = question.id,
            chosen = %letter,
            was_correct,
            "answer submitted"
        );

        self.session.answer_log.push(record);
        self.session.score += if was_correct { 1 } else { -1 };
        self.session.current_index += 1;

        if self.session.current_index == QUESTIONS_PER_SESSION {
            self.finish(FinishReason::AllAnswered);
            Ok(Transition::Finished(FinishReason::AllAnswered))
        } else {
            Ok(Transition::Continued)
        }
    }

    /// Count down one second of the clock armed for `epoch`.
    pub fn tick(&mut self, epoch: Epoch) -> TickOutcome {
        if self.status != Status::Playing || epoch != self.epoch {
            debug!(epoch, current = self.epoch, status = ?self.status, "stale tick ignored");
            return TickOutcome::Stale;
        }

        self.session.time_remaining = self.session.time_remaining.saturating_sub(1);
        if self.session.time_remaining == 0 {
            self.finish(FinishReason::TimeExpired);
            TickOutcome::Expired
        } else {
            TickOutcome::Counted {
                remaining: self.session.time_remaining,
            }
        }
    }

    /// Leave the results screen. A no-op on the start screen.
    pub fn return_home(&mut self) -> Result<(), QuizError> {
        match self.status {
            Status::Start => Ok(()),
            Status::Finished => {
                self.session = Session::default();
                self.summary = None;
                self.finish_reason = None;
                self.status = Status::Start;
                info!(epoch = self.epoch, "returned to start screen");
                Ok(())
            }
            Status::Playing => Err(QuizError::InvalidState {
                operation: "return home",
                status: self.status,
            }),
        }
    }

    /// Stop the clock before the controller is torn down. State is kept as
    /// is; only the background ticks end.
    pub fn shutdown(&mut self) {
        self.cancel_clock();
    }

    fn finish(&mut self, reason: FinishReason) {
        self.cancel_clock();
        self.status = Status::Finished;
        self.finish_reason = Some(reason);
        let summary = Summary::compute(self.session.score, &self.session.answer_log);
        info!(
            epoch = self.epoch,
            ?reason,
            score = summary.score,
            correct = summary.correct_count,
            incorrect = summary.incorrect_count,
            answered = summary.total_answered,
            "session finished"
        );
        self.summary = Some(summary);
    }

    fn cancel_clock(&mut self) {
        if let Some(mut clock) = self.clock.take() {
            debug!(epoch = clock.epoch(), "stopping countdown");
            clock.cancel();
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }

    pub fn breakdown(&self) -> Option<Breakdown> {
        self.summary.map(|s| s.breakdown(QUESTIONS_PER_SESSION))
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.status != Status::Playing {
            return None;
        }
        self.session.questions.get(self.session.current_index)
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn clock_armed(&self) -> bool {
        self.clock.as_ref().is_some_and(|c| c.is_armed())
    }

    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }
}

impl<S: Scheduler> Drop for SessionController<S> {
    fn drop(&mut self) {
        self.cancel_clock();
    }
}
