//! In-memory deck of flashcards.

use crate::error::{FlashcardError, FlashcardResult};
use crate::models::{Card, HardestCards};

/// Cards keyed by term, in insertion order.
///
/// Terms are unique. Definitions are expected to be unique too, but `add`
/// does not check it: the interactive add path pre-checks with
/// [`CardStore::find_by_term`] and [`CardStore::find_term_by_definition`],
/// while importing a deck file overwrites silently.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.term == term)
    }

    /// Get the card for a term.
    pub fn find_by_term(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.term == term)
    }

    /// Get the first term whose definition matches.
    pub fn find_term_by_definition(&self, definition: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.definition == definition)
            .map(|c| c.term.as_str())
    }

    /// Insert a card, replacing any card with the same term in place.
    pub fn add(&mut self, term: impl Into<String>, definition: impl Into<String>, mistakes: u32) {
        let card = Card::new(term, definition).with_mistakes(mistakes);
        match self.position(&card.term) {
            Some(idx) => self.cards[idx] = card,
            None => self.cards.push(card),
        }
    }

    /// Insert a card with no mistakes.
    pub fn add_new(&mut self, term: impl Into<String>, definition: impl Into<String>) {
        self.add(term, definition, 0);
    }

    /// Get all cards, failing if the deck is empty.
    pub fn all_cards(&self) -> FlashcardResult<&[Card]> {
        if self.cards.is_empty() {
            return Err(FlashcardError::NoCards);
        }
        Ok(&self.cards)
    }

    pub fn remove(&mut self, term: &str) -> FlashcardResult<Card> {
        let idx = self
            .position(term)
            .ok_or_else(|| FlashcardError::RemoveCard(term.to_string()))?;
        Ok(self.cards.remove(idx))
    }

    /// Get every card tied at the highest mistake count.
    ///
    /// Returns `None` when the deck is empty or nobody has made a mistake.
    pub fn hardest_cards(&self) -> Option<HardestCards> {
        let max = self.cards.iter().map(|c| c.mistakes).max()?;
        if max == 0 {
            return None;
        }

        let terms = self
            .cards
            .iter()
            .filter(|c| c.mistakes == max)
            .map(|c| c.term.clone())
            .collect();

        Some(HardestCards {
            mistakes: max,
            terms,
        })
    }

    pub fn record_mistake(&mut self, term: &str) -> FlashcardResult<()> {
        let idx = self
            .position(term)
            .ok_or_else(|| FlashcardError::UnknownCard(term.to_string()))?;
        let card = &mut self.cards[idx];
        card.mistakes = card.mistakes.saturating_add(1);
        Ok(())
    }

    pub fn reset_all_mistakes(&mut self) {
        for card in &mut self.cards {
            card.mistakes = 0;
        }
    }
}
