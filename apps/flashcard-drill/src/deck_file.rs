//! Deck file import and export.
//!
//! One card per line, `term|definition|mistakes`, no header row. Fields that
//! contain the delimiter or quotes are quoted CSV-style.

use crate::error::{FlashcardError, FlashcardResult};
use crate::models::Card;
use crate::store::CardStore;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Default field separator.
pub const DEFAULT_DELIMITER: u8 = b'|';

/// Read every card from a deck file.
///
/// Fails on the first malformed row, before anything is returned.
pub fn read_cards(path: &Path, delimiter: u8) -> FlashcardResult<Vec<Card>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FlashcardError::FileNotFound(path.to_path_buf()),
        _ => FlashcardError::Io(e),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut cards = Vec::new();
    for result in reader.deserialize::<Card>() {
        cards.push(result.map_err(malformed)?);
    }
    Ok(cards)
}

/// Write cards to a deck file, in the order given.
pub fn write_cards<'a>(
    path: &Path,
    delimiter: u8,
    cards: impl IntoIterator<Item = &'a Card>,
) -> FlashcardResult<usize> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)?;

    let mut count = 0;
    for card in cards {
        writer.serialize(card)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Load a deck file into the store, overwriting cards with the same term.
///
/// No duplicate-definition check is made. Returns the number of rows read.
pub fn import_into(store: &mut CardStore, path: &Path, delimiter: u8) -> FlashcardResult<usize> {
    info!(path = %path.display(), "Loading cards from file");
    let cards = read_cards(path, delimiter)?;
    info!(count = cards.len(), "Cards found");

    let count = cards.len();
    for card in cards {
        debug!(term = %card.term, definition = %card.definition, mistakes = card.mistakes, "Adding card");
        store.add(card.term, card.definition, card.mistakes);
    }
    Ok(count)
}

/// Save the whole store. Fails with `NoCards` on an empty store.
pub fn export_from(store: &CardStore, path: &Path, delimiter: u8) -> FlashcardResult<usize> {
    let cards = store.all_cards()?;
    let count = write_cards(path, delimiter, cards)?;
    info!(path = %path.display(), count, "Saved cards to file");
    Ok(count)
}

fn malformed(err: csv::Error) -> FlashcardError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. } => {
            FlashcardError::MalformedRow {
                line,
                reason: err.to_string(),
            }
        }
        _ => FlashcardError::Csv(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.txt");

        let mut store = CardStore::new();
        store.add("A", "defA", 1);
        store.add("B", "defB", 0);
        assert_eq!(export_from(&store, &path, DEFAULT_DELIMITER).unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "A|defA|1\nB|defB|0\n");

        let mut fresh = CardStore::new();
        assert_eq!(import_into(&mut fresh, &path, DEFAULT_DELIMITER).unwrap(), 2);
        let cards: Vec<_> = fresh.iter().cloned().collect();
        assert_eq!(
            cards,
            vec![
                Card::new("A", "defA").with_mistakes(1),
                Card::new("B", "defB"),
            ]
        );
    }

    #[test]
    fn test_export_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.txt");
        assert!(matches!(
            export_from(&CardStore::new(), &path, DEFAULT_DELIMITER),
            Err(FlashcardError::NoCards)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_delimiter_in_field_is_quoted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.txt");

        let cards = vec![Card::new("pipe", "a|b")];
        write_cards(&path, DEFAULT_DELIMITER, &cards).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "pipe|\"a|b\"|0\n");
        assert_eq!(read_cards(&path, DEFAULT_DELIMITER).unwrap(), cards);
    }

    #[test]
    fn test_import_overwrites_without_checks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.txt");
        fs::write(&path, "A|new|4\nC|x|0\n").unwrap();

        let mut store = CardStore::new();
        store.add("A", "old", 0);
        store.add("B", "x", 2);

        import_into(&mut store, &path, DEFAULT_DELIMITER).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_term("A").unwrap().definition, "new");
        assert_eq!(store.find_by_term("A").unwrap().mistakes, 4);
        // Duplicate definition is accepted on import
        assert_eq!(store.find_by_term("C").unwrap().definition, "x");
    }

    #[test]
    fn test_import_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let mut store = CardStore::new();
        assert!(matches!(
            import_into(&mut store, &path, DEFAULT_DELIMITER),
            Err(FlashcardError::FileNotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_import_rejects_bad_mistakes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.txt");

        for content in ["A|a|0\nB|b|-2\n", "A|a|lots\n", "A|a\n"] {
            fs::write(&path, content).unwrap();
            let mut store = CardStore::new();
            let err = import_into(&mut store, &path, DEFAULT_DELIMITER).unwrap_err();
            assert!(
                matches!(err, FlashcardError::MalformedRow { .. }),
                "{content:?} gave {err:?}"
            );
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_custom_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.tsv");

        let mut store = CardStore::new();
        store.add("dog", "perro", 2);
        export_from(&store, &path, b'\t').unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "dog\tperro\t2\n");
    }
}
