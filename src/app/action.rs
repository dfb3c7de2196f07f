use crate::quiz::{AnswerRecord, FinishReason, Summary};

/// Side effects requested by the handler, carried out by the main loop.
#[derive(Debug)]
pub enum Action {
    RecordResult {
        summary: Summary,
        reason: FinishReason,
        answers: Vec<AnswerRecord>,
    },
    Quit,
}
