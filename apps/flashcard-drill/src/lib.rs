//! Flashcard Drill - Quiz yourself on term/definition cards from the terminal.

pub mod app;
pub mod command;
pub mod config;
pub mod console;
pub mod deck_file;
pub mod error;
pub mod logging;
pub mod models;
pub mod quiz;
pub mod store;
pub mod ui;

pub use app::App;
pub use error::{FlashcardError, FlashcardResult};
pub use store::CardStore;
