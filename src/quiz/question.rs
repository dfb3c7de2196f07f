use serde::{Deserialize, Serialize};
use std::fmt;

pub const OPTION_COUNT: usize = 4;

/// Answer key of a question. Letters map onto option positions, `A` being
/// the first option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; OPTION_COUNT] = [Self::A, Self::B, Self::C, Self::D];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// Accepts `a`-`d` in either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        (b'A' + self.index() as u8) as char
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub answer: AnswerLetter,
}

impl Question {
    pub fn new(id: u32, text: &str, options: [&str; OPTION_COUNT], answer: AnswerLetter) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: options.map(str::to_string),
            answer,
        }
    }

    pub fn is_correct(&self, letter: AnswerLetter) -> bool {
        self.answer == letter
    }

    pub fn option(&self, letter: AnswerLetter) -> &str {
        &self.options[letter.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_mapping() {
        for (i, letter) in AnswerLetter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(AnswerLetter::from_index(i), Some(*letter));
        }
        assert_eq!(AnswerLetter::from_index(4), None);
    }

    #[test]
    fn test_letter_from_char() {
        assert_eq!(AnswerLetter::from_char('c'), Some(AnswerLetter::C));
        assert_eq!(AnswerLetter::from_char('D'), Some(AnswerLetter::D));
        assert_eq!(AnswerLetter::from_char('e'), None);
        assert_eq!(AnswerLetter::B.to_string(), "B");
    }

    #[test]
    fn test_option_lookup() {
        let q = Question::new(1, "2 + 2?", ["3", "4", "5", "22"], AnswerLetter::B);
        assert_eq!(q.option(AnswerLetter::B), "4");
        assert!(q.is_correct(AnswerLetter::B));
        assert!(!q.is_correct(AnswerLetter::A));
    }
}
