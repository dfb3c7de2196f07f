use crate::quiz::session::AnswerRecord;

/// End-of-session report. Derived from the answer log and score only, so it
/// can be recomputed at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: i32,
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub total_answered: usize,
}

impl Summary {
    pub fn compute(score: i32, answer_log: &[AnswerRecord]) -> Self {
        let total_answered = answer_log.len();
        let correct_count = answer_log.iter().filter(|r| r.was_correct).count();
        Self {
            score,
            correct_count,
            incorrect_count: total_answered - correct_count,
            total_answered,
        }
    }

    pub fn unanswered(&self, session_size: usize) -> usize {
        session_size.saturating_sub(self.total_answered)
    }

    pub fn breakdown(&self, session_size: usize) -> Breakdown {
        Breakdown {
            correct: self.correct_count,
            incorrect: self.incorrect_count,
            unanswered: self.unanswered(session_size),
        }
    }
}

/// The three slices the results chart draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
}

impl Breakdown {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect + self.unanswered
    }

    /// Whole-number percentage of `part` in the total, 0 for an empty total.
    pub fn percent(&self, part: usize) -> u64 {
        let total = self.total();
        if total == 0 {
            0
        } else {
            (part as u64 * 100 + total as u64 / 2) / total as u64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::AnswerLetter;

    fn record(was_correct: bool) -> AnswerRecord {
        AnswerRecord {
            question_text: "q".into(),
            chosen: if was_correct { AnswerLetter::A } else { AnswerLetter::B },
            correct: AnswerLetter::A,
            was_correct,
        }
    }

    #[test]
    fn test_compute_counts() {
        let log: Vec<_> = [true, true, false, true, false, true]
            .into_iter()
            .map(record)
            .collect();
        let summary = Summary::compute(2, &log);
        assert_eq!(
            summary,
            Summary {
                score: 2,
                correct_count: 4,
                incorrect_count: 2,
                total_answered: 6
            }
        );
        assert_eq!(summary.unanswered(10), 4);
    }

    #[test]
    fn test_empty_log() {
        let summary = Summary::compute(0, &[]);
        assert_eq!(summary.total_answered, 0);
        let breakdown = summary.breakdown(10);
        assert_eq!(breakdown, Breakdown { correct: 0, incorrect: 0, unanswered: 10 });
        assert_eq!(breakdown.percent(breakdown.unanswered), 100);
    }

    #[test]
    fn test_percent_rounding() {
        let b = Breakdown { correct: 1, incorrect: 1, unanswered: 1 };
        assert_eq!(b.percent(1), 33);
        let b = Breakdown { correct: 2, incorrect: 1, unanswered: 0 };
        assert_eq!(b.percent(2), 67);
        let empty = Breakdown { correct: 0, incorrect: 0, unanswered: 0 };
        assert_eq!(empty.percent(0), 0);
    }
}
