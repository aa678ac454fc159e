//! Quote store module
//!
//! Loads quotes from a line-delimited text file at startup and hands out
//! uniformly random entries. The store never changes after load, so it can be
//! shared across connection tasks without locking.

use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("failed to read quote file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("quote file '{}' contains no usable lines", path.display())]
    Empty { path: PathBuf },

    #[error("quote store is empty")]
    EmptyStore,
}

#[derive(Debug)]
pub struct QuoteStore {
    quotes: Vec<String>,
}

impl QuoteStore {
    /// Load quotes from `path`, one quote per line.
    ///
    /// Lines that are empty after trimming are skipped; surviving lines are
    /// kept verbatim in file order. Fails when the file is unreadable or no
    /// usable line remains.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| QuoteError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let quotes: Vec<String> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToString::to_string)
            .collect();

        if quotes.is_empty() {
            return Err(QuoteError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { quotes })
    }

    /// Build a store from an already-collected list of quotes.
    pub fn from_quotes(quotes: Vec<String>) -> Result<Self, QuoteError> {
        if quotes.is_empty() {
            return Err(QuoteError::EmptyStore);
        }
        Ok(Self { quotes })
    }

    /// Pick a uniformly random quote.
    ///
    /// The startup guard in `main` makes the empty case unreachable, but the
    /// call stays safe against it.
    pub fn pick_random(&self) -> Result<&str, QuoteError> {
        if self.quotes.is_empty() {
            return Err(QuoteError::EmptyStore);
        }
        let index = rand::thread_rng().gen_range(0..self.quotes.len());
        Ok(&self.quotes[index])
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    fn write_quote_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_keeps_lines_verbatim() {
        let file = write_quote_file("Be yourself.\nStay hungry, stay foolish.\n");
        let store = QuoteStore::load(file.path()).expect("load should succeed");
        assert_eq!(store.len(), 2);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(store.pick_random().expect("non-empty store").to_string());
        }
        assert!(seen.contains("Be yourself."));
        assert!(seen.contains("Stay hungry, stay foolish."));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_load_filters_blank_lines() {
        let file = write_quote_file("first\n\n   \n\t\nsecond\n\n");
        let store = QuoteStore::load(file.path()).expect("load should succeed");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("no-such-quotes.txt");
        match QuoteStore::load(&missing) {
            Err(QuoteError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let file = write_quote_file("");
        match QuoteStore::load(file.path()) {
            Err(QuoteError::Empty { .. }) => {}
            other => panic!("expected Empty error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_blank_only_file() {
        let file = write_quote_file("\n   \n\n");
        assert!(matches!(
            QuoteStore::load(file.path()),
            Err(QuoteError::Empty { .. })
        ));
    }

    #[test]
    fn test_pick_random_is_member() {
        let quotes = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let store = QuoteStore::from_quotes(quotes.clone()).expect("non-empty");
        for _ in 0..100 {
            let picked = store.pick_random().expect("non-empty store");
            assert!(quotes.iter().any(|q| q == picked));
        }
    }

    #[test]
    fn test_pick_random_covers_all_quotes() {
        let quotes: Vec<String> = (0..5).map(|i| format!("quote {i}")).collect();
        let store = QuoteStore::from_quotes(quotes.clone()).expect("non-empty");
        let mut seen = HashSet::new();
        // 1000 draws over 5 entries miss one with probability (4/5)^1000
        for _ in 0..1000 {
            seen.insert(store.pick_random().expect("non-empty store").to_string());
        }
        assert_eq!(seen.len(), quotes.len());
    }

    #[test]
    fn test_pick_random_on_empty_store_is_safe() {
        let store = QuoteStore { quotes: Vec::new() };
        assert!(matches!(store.pick_random(), Err(QuoteError::EmptyStore)));
    }

    #[test]
    fn test_from_quotes_rejects_empty() {
        assert!(matches!(
            QuoteStore::from_quotes(Vec::new()),
            Err(QuoteError::EmptyStore)
        ));
    }
}
