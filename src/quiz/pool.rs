//! Question pool: the built-in question set, loading a replacement set from
//! a TOML file, and drawing a session's questions.
//!
//! A question file looks like:
//!
//! ```toml
//! [[questions]]
//! id = 1
//! text = "Which continent do savanna elephants live on?"
//! options = ["Asia", "Africa", "Europe", "South America"]
//! answer = "B"
//! ```

use crate::quiz::error::{PoolError, QuizError};
use crate::quiz::question::{AnswerLetter, Question, OPTION_COUNT};
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct PoolFile {
    #[serde(default)]
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    id: u32,
    text: String,
    options: Vec<String>,
    answer: AnswerLetter,
}

impl TryFrom<QuestionEntry> for Question {
    type Error = PoolError;

    fn try_from(entry: QuestionEntry) -> Result<Self, Self::Error> {
        if entry.text.trim().is_empty() {
            return Err(PoolError::EmptyText { id: entry.id });
        }
        let found = entry.options.len();
        let options: [String; OPTION_COUNT] = entry
            .options
            .try_into()
            .map_err(|_| PoolError::WrongOptionCount { id: entry.id, found })?;
        Ok(Question {
            id: entry.id,
            text: entry.text,
            options,
            answer: entry.answer,
        })
    }
}

/// Immutable list of every available question. Cloning is cheap; the
/// questions themselves are shared.
#[derive(Debug, Clone)]
pub struct QuestionPool {
    questions: Arc<[Question]>,
}

impl QuestionPool {
    pub fn new(questions: Vec<Question>) -> Result<Self, PoolError> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(PoolError::DuplicateId(q.id));
            }
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: PoolFile = toml::from_str(contents).context("Failed to parse question file")?;
        let questions = file
            .questions
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(questions)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read questions from {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid question file {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Draw `count` distinct questions uniformly at random, in random order.
    ///
    /// Shuffles only the drawn prefix of an index list (Fisher–Yates), so
    /// the cost grows with the pool size rather than sorting the whole pool.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<Question>, QuizError> {
        if self.questions.len() < count {
            return Err(QuizError::InsufficientQuestions {
                available: self.questions.len(),
                required: count,
            });
        }
        let mut indices: Vec<usize> = (0..self.questions.len()).collect();
        let (picked, _) = indices.partial_shuffle(rng, count);
        Ok(picked.iter().map(|&i| self.questions[i].clone()).collect())
    }

    /// The question set shipped with the binary.
    pub fn builtin() -> Self {
        use AnswerLetter::*;
        let questions = vec![
            Question::new(1, "Which is the largest living land animal?", ["Giraffe", "Hippopotamus", "African bush elephant", "White rhinoceros"], C),
            Question::new(2, "What are an elephant's tusks made of?", ["Bone", "Ivory (elongated incisor teeth)", "Keratin", "Cartilage"], B),
            Question::new(3, "Roughly how long is an elephant's pregnancy?", ["9 months", "12 months", "16 months", "22 months"], D),
            Question::new(4, "What is a group of related female elephants led by an older female called?", ["A herd led by a matriarch", "A pride", "A pack", "A colony"], A),
            Question::new(5, "Which body part do elephants use to drink, smell, and grab food?", ["Tusks", "Ears", "Trunk", "Tail"], C),
            Question::new(6, "Why do African elephants flap their large ears?", ["To hear better", "To release body heat", "To scare birds", "To signal hunger"], B),
            Question::new(7, "How do elephants communicate over long distances?", ["Low-frequency rumbles", "Ultraviolet signals", "Tail flicks", "Scent trails only"], A),
            Question::new(8, "Which elephant species has smaller, rounded ears?", ["African bush elephant", "African forest elephant", "Asian elephant", "Woolly mammoth"], C),
            Question::new(9, "About how many hours a day can an adult elephant spend feeding?", ["2 hours", "6 hours", "10 hours", "Up to 16 hours"], D),
            Question::new(10, "Elephants are classified as what kind of eaters?", ["Herbivores", "Carnivores", "Omnivores", "Insectivores"], A),
            Question::new(11, "What do elephants often cover themselves with to protect their skin from the sun?", ["Leaves", "Mud and dust", "Tree sap", "Water lilies"], B),
            Question::new(12, "How many fingerlike tips does an African elephant's trunk end in?", ["None", "One", "Two", "Four"], C),
            Question::new(13, "What is the main threat driving illegal elephant hunting?", ["Demand for meat", "Demand for ivory", "Demand for hides", "Sport competitions"], B),
            Question::new(14, "How much can an adult elephant drink in a single day?", ["About 5 liters", "About 20 liters", "Up to about 200 liters", "Over 2,000 liters"], C),
            Question::new(15, "Which sense is especially strong in elephants?", ["Eyesight", "Smell", "Taste", "Echolocation"], B),
            Question::new(16, "What is a baby elephant called?", ["A kid", "A foal", "A pup", "A calf"], D),
            Question::new(17, "Elephants can pick up vibrations through which part of their body?", ["Their feet", "Their tusks", "Their tail", "Their eyelashes"], A),
            Question::new(18, "Male elephants usually leave the family herd at around what age?", ["1 to 2 years", "12 to 15 years", "30 years", "They never leave"], B),
            Question::new(19, "Which behavior shows elephants recognise themselves?", ["Trumpeting", "Passing the mirror test", "Digging wells", "Stacking stones"], B),
            Question::new(20, "What is musth in male elephants?", ["A type of tusk", "A seasonal period of high hormones and aggression", "A greeting ritual", "A skin disease"], B),
        ];
        Self {
            questions: questions.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn numbered(count: u32) -> Vec<Question> {
        (1..=count)
            .map(|id| Question::new(id, &format!("Q{}", id), ["w", "x", "y", "z"], AnswerLetter::A))
            .collect()
    }

    #[test]
    fn test_builtin_pool_is_valid() {
        let pool = QuestionPool::builtin();
        assert_eq!(pool.len(), 20);
        assert!(QuestionPool::new(pool.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn test_sample_is_distinct_and_sized() {
        let pool = QuestionPool::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let drawn = pool.sample(&mut rng, 10).unwrap();
            assert_eq!(drawn.len(), 10);
            let ids: HashSet<u32> = drawn.iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), 10);
        }
    }

    #[test]
    fn test_sample_whole_pool() {
        let pool = QuestionPool::new(numbered(10)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = pool.sample(&mut rng, 10).unwrap();
        let mut ids: Vec<u32> = drawn.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_sample_reaches_every_question() {
        let pool = QuestionPool::new(numbered(12)).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            for q in pool.sample(&mut rng, 10).unwrap() {
                seen.insert(q.id);
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_sample_insufficient() {
        let pool = QuestionPool::new(numbered(9)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            pool.sample(&mut rng, 10),
            Err(QuizError::InsufficientQuestions {
                available: 9,
                required: 10
            })
        );
    }

    #[test]
    fn test_parse_question_file() {
        let toml = r#"
            [[questions]]
            id = 1
            text = "Which continent do savanna elephants live on?"
            options = ["Asia", "Africa", "Europe", "South America"]
            answer = "B"

            [[questions]]
            id = 2
            text = "Are elephants mammals?"
            options = ["Yes", "No", "Only calves", "Only bulls"]
            answer = "A"
        "#;
        let pool = QuestionPool::from_toml_str(toml).unwrap();
        assert_eq!(pool.len(), 2);
        let first = pool.iter().next().unwrap();
        assert_eq!(first.answer, AnswerLetter::B);
        assert_eq!(first.option(AnswerLetter::B), "Africa");
    }

    #[test]
    fn test_reject_wrong_option_count() {
        let toml = r#"
            [[questions]]
            id = 5
            text = "Too few"
            options = ["a", "b", "c"]
            answer = "A"
        "#;
        let err = QuestionPool::from_toml_str(toml).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PoolError>(),
            Some(&PoolError::WrongOptionCount { id: 5, found: 3 })
        );
    }

    #[test]
    fn test_reject_duplicate_ids_and_empty_text() {
        let dup = r#"
            [[questions]]
            id = 1
            text = "one"
            options = ["a", "b", "c", "d"]
            answer = "A"
            [[questions]]
            id = 1
            text = "again"
            options = ["a", "b", "c", "d"]
            answer = "B"
        "#;
        let err = QuestionPool::from_toml_str(dup).unwrap_err();
        assert_eq!(err.downcast_ref::<PoolError>(), Some(&PoolError::DuplicateId(1)));

        let empty = r#"
            [[questions]]
            id = 2
            text = "  "
            options = ["a", "b", "c", "d"]
            answer = "A"
        "#;
        let err = QuestionPool::from_toml_str(empty).unwrap_err();
        assert_eq!(err.downcast_ref::<PoolError>(), Some(&PoolError::EmptyText { id: 2 }));
    }

    #[test]
    fn test_reject_unknown_answer_letter() {
        let toml = r#"
            [[questions]]
            id = 1
            text = "bad key"
            options = ["a", "b", "c", "d"]
            answer = "E"
        "#;
        assert!(QuestionPool::from_toml_str(toml).is_err());
    }
}
