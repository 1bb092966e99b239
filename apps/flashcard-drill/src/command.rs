//! Commands accepted by the main loop.

use crate::error::FlashcardError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Command {
    /// All commands, in menu order.
    pub const ALL: [Command; 9] = [
        Self::Add,
        Self::Remove,
        Self::Import,
        Self::Export,
        Self::Ask,
        Self::Exit,
        Self::Log,
        Self::HardestCard,
        Self::ResetStats,
    ];

    /// Text the user types.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Import => "import",
            Self::Export => "export",
            Self::Ask => "ask",
            Self::Exit => "exit",
            Self::Log => "log",
            Self::HardestCard => "hardest card",
            Self::ResetStats => "reset stats",
        }
    }
}

impl FromStr for Command {
    type Err = FlashcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.keyword() == s)
            .ok_or(FlashcardError::CommandDoesntExist)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_match() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("hardest card".parse::<Command>().unwrap(), Command::HardestCard);
        assert_eq!("reset stats".parse::<Command>().unwrap(), Command::ResetStats);
    }

    #[test]
    fn test_unknown_command() {
        for input in ["", "Add", "hardest  card", "quit"] {
            assert!(matches!(
                input.parse::<Command>(),
                Err(FlashcardError::CommandDoesntExist)
            ));
        }
    }

    #[test]
    fn test_keywords_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(cmd.to_string().parse::<Command>().unwrap(), cmd);
        }
    }
}
