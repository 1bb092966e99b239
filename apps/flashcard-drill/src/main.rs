//! Flashcard Drill - Quiz yourself on term/definition cards from the terminal.

use clap::Parser;
use flashcard_drill::config::Config;
use flashcard_drill::console::{Console, Transcript};
use flashcard_drill::{logging, App};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashcard-drill", about = "Flashcard drill with mistake tracking", version)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Import a deck file before the first command
    #[arg(long)]
    import_from: Option<PathBuf>,

    /// Export the deck when the session ends
    #[arg(long)]
    export_to: Option<PathBuf>,

    /// Write the effective configuration to the default location and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if cli.write_config {
        config.save()?;
        if let Some(path) = Config::config_path() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let transcript = Transcript::new();
    logging::init(&config.logging.filter, transcript.clone());

    if let Err(err) = run_app(&cli, config, transcript) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(cli: &Cli, config: Config, transcript: Transcript) -> anyhow::Result<()> {
    let console = Console::new(io::stdin().lock(), io::stdout().lock(), transcript);
    let mut app = App::new(config, console);

    if let Some(path) = &cli.import_from {
        app.try_import_file(path)?;
    }

    app.run()?;

    if let Some(path) = &cli.export_to {
        app.try_export_file(path)?;
    }

    Ok(())
}
