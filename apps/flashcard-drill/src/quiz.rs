//! Quiz rounds over a deck.

use crate::error::{FlashcardError, FlashcardResult};
use crate::models::{Question, QuizScore, Verdict};
use crate::store::CardStore;

/// A batch of quiz rounds.
///
/// Questions cycle through the deck in insertion order, wrapping after the
/// last card, until the requested number of rounds has been asked. The deck
/// is snapshotted at start so grading can mutate the store mid-batch.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    next_index: usize,
    remaining: usize,
    score: QuizScore,
}

impl QuizSession {
    /// Start a batch of `rounds` questions.
    pub fn start(store: &CardStore, rounds: usize) -> FlashcardResult<Self> {
        let questions = store
            .all_cards()?
            .iter()
            .map(|c| Question {
                term: c.term.clone(),
                definition: c.definition.clone(),
            })
            .collect();

        Ok(Self {
            questions,
            next_index: 0,
            remaining: rounds,
            score: QuizScore::default(),
        })
    }

    /// Rounds not yet asked.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn score(&self) -> QuizScore {
        self.score
    }

    /// Grade an answer, recording a mistake on the asked card when wrong.
    pub fn grade(
        &mut self,
        store: &mut CardStore,
        question: &Question,
        answer: &str,
    ) -> FlashcardResult<Verdict> {
        let verdict = if answer == question.definition {
            Verdict::Correct
        } else {
            let verdict = match store.find_term_by_definition(answer) {
                Some(other) => Verdict::CorrectFor(other.to_string()),
                None => Verdict::Wrong,
            };
            store.record_mistake(&question.term)?;
            verdict
        };

        self.score.record(&verdict);
        Ok(verdict)
    }
}

impl Iterator for QuizSession {
    type Item = Question;

    fn next(&mut self) -> Option<Question> {
        if self.remaining == 0 {
            return None;
        }
        let question = self.questions.get(self.next_index)?.clone();
        self.remaining -= 1;
        self.next_index = (self.next_index + 1) % self.questions.len();
        Some(question)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Parse the number of rounds typed by the user.
pub fn parse_rounds(input: &str) -> FlashcardResult<usize> {
    input.trim().parse().map_err(|_| FlashcardError::NoInteger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> CardStore {
        let mut store = CardStore::new();
        store.add_new("A", "x");
        store.add_new("B", "y");
        store.add_new("C", "z");
        store
    }

    #[test]
    fn test_cycles_in_insertion_order() {
        let store = deck();
        let terms: Vec<String> = QuizSession::start(&store, 5)
            .unwrap()
            .map(|q| q.term)
            .collect();
        assert_eq!(terms, vec!["A", "B", "C", "A", "B"]);
    }

    #[test]
    fn test_zero_rounds() {
        let store = deck();
        let mut session = QuizSession::start(&store, 0).unwrap();
        assert!(session.next().is_none());
        assert!(store.iter().all(|c| c.mistakes == 0));
    }

    #[test]
    fn test_empty_deck_fails_regardless_of_rounds() {
        let store = CardStore::new();
        assert!(matches!(
            QuizSession::start(&store, 0),
            Err(FlashcardError::NoCards)
        ));
        assert!(matches!(
            QuizSession::start(&store, 3),
            Err(FlashcardError::NoCards)
        ));
    }

    #[test]
    fn test_grading() {
        let mut store = deck();
        let mut session = QuizSession::start(&store, 3).unwrap();

        let q = session.next().unwrap();
        assert_eq!(session.grade(&mut store, &q, "x").unwrap(), Verdict::Correct);
        assert_eq!(store.find_by_term("A").unwrap().mistakes, 0);

        let q = session.next().unwrap();
        assert_eq!(
            session.grade(&mut store, &q, "z").unwrap(),
            Verdict::CorrectFor("C".into())
        );
        assert_eq!(store.find_by_term("B").unwrap().mistakes, 1);
        assert_eq!(store.find_by_term("C").unwrap().mistakes, 0);

        let q = session.next().unwrap();
        assert_eq!(session.grade(&mut store, &q, "nope").unwrap(), Verdict::Wrong);
        assert_eq!(store.find_by_term("C").unwrap().mistakes, 1);

        assert_eq!(session.score(), QuizScore { asked: 3, correct: 1 });
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_answer_for_other_card() {
        let mut store = CardStore::new();
        store.add_new("A", "x");
        store.add_new("B", "y");

        let mut session = QuizSession::start(&store, 1).unwrap();
        let q = session.next().unwrap();
        assert_eq!(q.term, "A");

        let verdict = session.grade(&mut store, &q, "y").unwrap();
        assert_eq!(verdict, Verdict::CorrectFor("B".into()));
        assert_eq!(store.find_by_term("A").unwrap().mistakes, 1);
    }

    #[test]
    fn test_parse_rounds() {
        assert_eq!(parse_rounds("3").unwrap(), 3);
        assert_eq!(parse_rounds(" 0 ").unwrap(), 0);
        assert!(matches!(parse_rounds("three"), Err(FlashcardError::NoInteger)));
        assert!(matches!(parse_rounds("-1"), Err(FlashcardError::NoInteger)));
    }
}
