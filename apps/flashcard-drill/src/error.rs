//! Error types for flashcard drill.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by deck operations and the command loop.
#[derive(Debug, Error)]
pub enum FlashcardError {
    /// Input did not match any command.
    #[error("Not a valid command.")]
    CommandDoesntExist,

    /// Term is already in the deck.
    #[error("The card \"{0}\" already exists.")]
    CardExists(String),

    /// Definition is already used by another card.
    #[error("The definition \"{0}\" already exists.")]
    DefinitionExists(String),

    /// Removal of a term that is not in the deck.
    #[error("Can't remove \"{0}\": there is no such card.")]
    RemoveCard(String),

    /// Operation needs at least one card.
    #[error("There are no cards in the deck.")]
    NoCards,

    /// Input expected to be an integer was not.
    #[error("That is not an integer.")]
    NoInteger,

    /// Mistake recorded against a term that is not in the deck.
    #[error("No card with term \"{0}\".")]
    UnknownCard(String),

    /// Deck file does not exist.
    #[error("File not found.")]
    FileNotFound(PathBuf),

    /// Deck file row could not be parsed.
    #[error("Malformed deck file at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl FlashcardError {
    /// Whether this is a recoverable mistake in what the user typed.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::CommandDoesntExist
                | Self::CardExists(_)
                | Self::DefinitionExists(_)
                | Self::RemoveCard(_)
                | Self::NoCards
                | Self::NoInteger
        )
    }
}

/// Result type for deck operations.
pub type FlashcardResult<T> = Result<T, FlashcardError>;
