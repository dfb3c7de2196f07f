//! Quiz core: questions, the question pool, the countdown clock, and the
//! session controller that ties them together.

pub mod clock;
pub mod error;
pub mod pool;
pub mod question;
pub mod session;
pub mod summary;

pub use error::QuizError;
pub use pool::QuestionPool;
pub use question::AnswerLetter;
pub use session::{
    AnswerRecord, FinishReason, SessionController, Status, TickOutcome, Transition,
    QUESTIONS_PER_SESSION, TIME_LIMIT_SECS,
};
pub use summary::{Breakdown, Summary};
