use crate::quiz::session::Status;
use thiserror::Error;

/// Rejections raised by the session controller. None of them leave the
/// controller partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question pool has {available} questions, a session needs {required}")]
    InsufficientQuestions { available: usize, required: usize },

    #[error("cannot {operation} while {status}")]
    InvalidState {
        operation: &'static str,
        status: Status,
    },

    #[error("option {0} does not exist (expected 0..=3)")]
    InvalidOption(usize),
}

/// Problems found while validating a question file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("question {id} has {found} options, expected 4")]
    WrongOptionCount { id: u32, found: usize },

    #[error("question {id} has empty text")]
    EmptyText { id: u32 },

    #[error("question id {0} appears more than once")]
    DuplicateId(u32),
}
