//! Data models for flashcard drill.

use serde::{Deserialize, Serialize};

/// A flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Prompt side, unique within a deck.
    pub term: String,
    /// Answer side, unique within a deck.
    pub definition: String,
    /// Wrong answers recorded against this card.
    pub mistakes: u32,
}

impl Card {
    /// Create a card with no mistakes.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    /// Set the mistake count.
    pub fn with_mistakes(mut self, mistakes: u32) -> Self {
        self.mistakes = mistakes;
        self
    }
}

/// Cards sharing the highest non-zero mistake count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardestCards {
    pub mistakes: u32,
    /// Terms in deck order.
    pub terms: Vec<String>,
}

/// One round of a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub term: String,
    pub definition: String,
}

/// Outcome of grading an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Answer matched the definition.
    Correct,
    /// Answer is the definition of another term.
    CorrectFor(String),
    /// Answer matched nothing in the deck.
    Wrong,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Running score of a quiz batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizScore {
    pub asked: usize,
    pub correct: usize,
}

impl QuizScore {
    /// Record a graded answer.
    pub fn record(&mut self, verdict: &Verdict) {
        self.asked += 1;
        if verdict.is_correct() {
            self.correct += 1;
        }
    }

    /// Get accuracy rate.
    pub fn accuracy(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            self.correct as f64 / self.asked as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("France", "Paris");
        assert_eq!(card.term, "France");
        assert_eq!(card.definition, "Paris");
        assert_eq!(card.mistakes, 0);
        assert_eq!(card.with_mistakes(4).mistakes, 4);
    }

    #[test]
    fn test_score() {
        let mut score = QuizScore::default();
        assert_eq!(score.accuracy(), 0.0);

        score.record(&Verdict::Correct);
        score.record(&Verdict::CorrectFor("B".into()));
        score.record(&Verdict::Wrong);
        score.record(&Verdict::Correct);

        assert_eq!(score.asked, 4);
        assert_eq!(score.correct, 2);
        assert!((score.accuracy() - 0.5).abs() < f64::EPSILON);
    }
}
