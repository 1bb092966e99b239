//! Application state and command loop.

use crate::command::Command;
use crate::config::Config;
use crate::console::Console;
use crate::deck_file;
use crate::error::FlashcardError;
use crate::quiz::{parse_rounds, QuizSession};
use crate::store::CardStore;
use crate::ui;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, error, info};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<R, W> {
    store: CardStore,
    config: Config,
    console: Console<R, W>,
    delimiter: u8,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: Config, console: Console<R, W>) -> Self {
        let delimiter = config.files.delimiter_byte();
        Self {
            store: CardStore::new(),
            config,
            console,
            delimiter,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Run commands until `exit` or end of input.
    ///
    /// Deck errors are printed and the loop continues. Only console failures
    /// are returned.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let Some(line) = self.console.ask(ui::menu())? else {
                debug!("End of input");
                return Ok(());
            };
            debug!(command = %line, "Command read");

            match self.dispatch(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err) => match err.downcast::<FlashcardError>() {
                    Ok(e) => self.report(&e)?,
                    Err(fatal) => return Err(fatal),
                },
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> anyhow::Result<Flow> {
        let command: Command = line.parse()?;
        match command {
            Command::Add => self.add_card(),
            Command::Remove => self.remove_card(),
            Command::Import => self.import_cards(),
            Command::Export => self.export_cards(),
            Command::Ask => self.ask(),
            Command::Exit => {
                self.console.say("Bye bye!")?;
                Ok(Flow::Exit)
            }
            Command::Log => self.save_log(),
            Command::HardestCard => {
                let hardest = self.store.hardest_cards();
                self.console.say(ui::hardest(hardest.as_ref()))?;
                Ok(Flow::Continue)
            }
            Command::ResetStats => {
                self.store.reset_all_mistakes();
                info!("Mistake counts reset");
                self.console.say("Card statistics have been reset.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn report(&mut self, err: &FlashcardError) -> std::io::Result<()> {
        if !err.is_input_error() {
            error!(error = ?err, "Command failed");
        }
        self.console.say(err)
    }

    fn add_card(&mut self) -> anyhow::Result<Flow> {
        self.console.say("Card:")?;
        let term = loop {
            let Some(term) = self.console.read_line()? else {
                return Ok(Flow::Exit);
            };
            if self.store.find_by_term(&term).is_none() {
                break term;
            }
            self.console
                .say(ui::try_again(FlashcardError::CardExists(term)))?;
        };

        self.console.say("Definition:")?;
        let definition = loop {
            let Some(definition) = self.console.read_line()? else {
                return Ok(Flow::Exit);
            };
            if self.store.find_term_by_definition(&definition).is_none() {
                break definition;
            }
            self.console
                .say(ui::try_again(FlashcardError::DefinitionExists(definition)))?;
        };

        self.console.say(ui::card_added(&term, &definition))?;
        info!(term = %term, "Card added");
        self.store.add_new(term, definition);
        Ok(Flow::Continue)
    }

    fn remove_card(&mut self) -> anyhow::Result<Flow> {
        let Some(term) = self.console.ask("Which card?")? else {
            return Ok(Flow::Exit);
        };
        self.store.remove(&term)?;
        info!(term = %term, "Card removed");
        self.console.say("The card has been removed.")?;
        Ok(Flow::Continue)
    }

    fn import_cards(&mut self) -> anyhow::Result<Flow> {
        let Some(file_name) = self.console.ask("File name:")? else {
            return Ok(Flow::Exit);
        };
        self.import_file(Path::new(&file_name))?;
        Ok(Flow::Continue)
    }

    fn export_cards(&mut self) -> anyhow::Result<Flow> {
        let Some(file_name) = self.console.ask("File name:")? else {
            return Ok(Flow::Exit);
        };
        self.export_file(Path::new(&file_name))?;
        Ok(Flow::Continue)
    }

    /// Load a deck file and report how many cards it held.
    pub fn import_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let count = deck_file::import_into(&mut self.store, path, self.delimiter)?;
        self.console.say(ui::cards_loaded(count))?;
        Ok(())
    }

    /// Save the deck and report how many cards were written.
    pub fn export_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let count = deck_file::export_from(&self.store, path, self.delimiter)?;
        self.console.say(ui::cards_saved(count))?;
        Ok(())
    }

    /// Like [`App::import_file`], but deck errors are printed instead of returned.
    pub fn try_import_file(&mut self, path: &Path) -> anyhow::Result<()> {
        self.recover(|app| app.import_file(path))
    }

    /// Like [`App::export_file`], but deck errors are printed instead of returned.
    pub fn try_export_file(&mut self, path: &Path) -> anyhow::Result<()> {
        self.recover(|app| app.export_file(path))
    }

    fn recover(&mut self, action: impl FnOnce(&mut Self) -> anyhow::Result<()>) -> anyhow::Result<()> {
        match action(self) {
            Ok(()) => Ok(()),
            Err(err) => match err.downcast::<FlashcardError>() {
                Ok(e) => Ok(self.report(&e)?),
                Err(fatal) => Err(fatal),
            },
        }
    }

    fn ask(&mut self) -> anyhow::Result<Flow> {
        let Some(amount) = self.console.ask("How many times to ask?")? else {
            return Ok(Flow::Exit);
        };
        let rounds = parse_rounds(&amount)?;
        let mut session = QuizSession::start(&self.store, rounds)?;
        debug!(rounds, cards = self.store.len(), "Quiz started");

        while let Some(question) = session.next() {
            let Some(answer) = self.console.ask(ui::question(&question.term))? else {
                return Ok(Flow::Exit);
            };
            let verdict = session.grade(&mut self.store, &question, &answer)?;
            self.console.say(ui::verdict(&verdict, &question.definition))?;
        }

        let score = session.score();
        info!(asked = score.asked, correct = score.correct, "Quiz finished");
        if self.config.quiz.show_score && score.asked > 0 {
            self.console.say(ui::score(&score))?;
        }
        Ok(Flow::Continue)
    }

    fn save_log(&mut self) -> anyhow::Result<Flow> {
        let Some(file_name) = self.console.ask("File name:")? else {
            return Ok(Flow::Exit);
        };
        info!(path = %file_name, "Saving session log");
        self.console
            .transcript()
            .save(Path::new(&file_name))
            .map_err(FlashcardError::from)?;
        self.console.say("The log has been saved.")?;
        Ok(Flow::Continue)
    }
}
