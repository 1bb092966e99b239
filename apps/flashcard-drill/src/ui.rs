//! Text rendering for flashcard drill.

use crate::command::Command;
use crate::models::{HardestCards, QuizScore, Verdict};

pub fn menu() -> String {
    let names: Vec<&str> = Command::ALL.iter().map(Command::keyword).collect();
    format!("Input the action ({}):", names.join(", "))
}

pub fn card_added(term: &str, definition: &str) -> String {
    format!("The pair (\"{}\":\"{}\") has been added.", term, definition)
}

pub fn try_again(error: impl std::fmt::Display) -> String {
    format!("{} Try again:", error)
}

pub fn question(term: &str) -> String {
    format!("Print the definition of \"{}\":", term)
}

pub fn verdict(verdict: &Verdict, definition: &str) -> String {
    match verdict {
        Verdict::Correct => "Correct!".to_string(),
        Verdict::CorrectFor(other) => format!(
            "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
            definition, other
        ),
        Verdict::Wrong => format!("Wrong. The right answer is \"{}\".", definition),
    }
}

pub fn score(score: &QuizScore) -> String {
    format!(
        "{}/{} correct ({:.0}%).",
        score.correct,
        score.asked,
        score.accuracy() * 100.0
    )
}

pub fn hardest(hardest: Option<&HardestCards>) -> String {
    let Some(hardest) = hardest else {
        return "There are no cards with errors.".to_string();
    };

    match hardest.terms.as_slice() {
        [term] => format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            term, hardest.mistakes
        ),
        terms => {
            let joined: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
            format!(
                "The hardest cards are {}. You have {} errors answering them.",
                joined.join(", "),
                hardest.mistakes
            )
        }
    }
}

pub fn cards_loaded(count: usize) -> String {
    format!("{} cards have been loaded.", count)
}

pub fn cards_saved(count: usize) -> String {
    format!("{} cards have been saved.", count)
}
