//! Dictionary of playable words
//!
//! Validates guesses and picks secrets.

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// A deduplicated set of valid words with stable ordering
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates but keeping first-seen order
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashMap::default();
        let mut unique = Vec::new();
        for word in words {
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), unique.len());
                unique.push(word);
            }
        }

        Self {
            words: unique,
            index,
        }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// Load a newline-delimited word file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let dictionary = Self::new(load_from_file(path)?);
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Membership test, case-insensitive
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Find the dictionary entry for a word, case-insensitive
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&Word> {
        self.index
            .get(&word.to_lowercase())
            .map(|&position| &self.words[position])
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a secret uniformly at random
    ///
    /// Returns `None` only for an empty dictionary.
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::new(words_from_slice(&["crane", "slate", "crane", "audio"]))
    }

    #[test]
    fn duplicates_removed_order_kept() {
        let dict = small();
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "audio"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dict = small();
        assert!(dict.contains("crane"));
        assert!(dict.contains("SLATE"));
        assert!(!dict.contains("zebra"));
        assert!(!dict.contains("cranes"));
        assert_eq!(dict.lookup("Audio").map(Word::text), Some("audio"));
    }

    #[test]
    fn secret_comes_from_dictionary() {
        let dict = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let secret = dict.choose_secret(&mut rng).unwrap();
            assert!(dict.contains(secret.text()));
        }
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let dict = Dictionary::embedded();
        let a = dict
            .choose_secret(&mut StdRng::seed_from_u64(42))
            .cloned();
        let b = dict
            .choose_secret(&mut StdRng::seed_from_u64(42))
            .cloned();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dictionary_has_no_secret() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(dict.choose_secret(&mut rand::rng()).is_none());
    }

    #[test]
    fn embedded_dictionary_has_game_words() {
        let dict = Dictionary::embedded();
        for word in ["crane", "allot", "books", "speed", "erase", "abbey", "ebbed"] {
            assert!(dict.contains(word), "{word} missing");
        }
    }
}
