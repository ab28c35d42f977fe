use std::fs;

use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;

/// Where target words for new matches come from.
///
/// `Fixed` always hands out the same configured word. `List` picks
/// uniformly from a loaded word list. Words are uppercased at load so
/// evaluation can compare normalized guesses against the stored word
/// without touching it.
#[derive(Debug)]
pub enum WordSource {
    Fixed(String),
    List(Vec<String>),
}

impl WordSource {
    /// Source that always yields the given word
    pub fn fixed(word: &str) -> Self {
        WordSource::Fixed(word.trim().to_uppercase())
    }

    /// Parse a word list, skipping blank lines and `#` comments
    pub fn from_list(word_list: &str) -> Result<Self> {
        let words: Vec<String> = word_list
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|word| word.to_uppercase())
            .collect();

        if words.is_empty() {
            return Err(anyhow!("Word list contains no usable words"));
        }

        Ok(WordSource::List(words))
    }

    /// Load a word list file from disk
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_list(&contents)
    }

    /// Pick the target word for a new match
    pub fn pick(&self) -> Result<String> {
        match self {
            WordSource::Fixed(word) => Ok(word.clone()),
            WordSource::List(words) => words
                .choose(&mut rand::thread_rng())
                .cloned()
                .ok_or_else(|| anyhow!("No words available in word list")),
        }
    }

    /// Number of distinct words this source can yield
    pub fn word_count(&self) -> usize {
        match self {
            WordSource::Fixed(_) => 1,
            WordSource::List(words) => words.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_uppercases() {
        let source = WordSource::fixed("flutter");
        assert_eq!(source.pick().unwrap(), "FLUTTER");
        assert_eq!(source.word_count(), 1);

        // Same word every time
        for _ in 0..5 {
            assert_eq!(source.pick().unwrap(), "FLUTTER");
        }
    }

    #[test]
    fn test_list_parsing_skips_comments_and_blanks() {
        let word_list = "# common words\napple\nbanana\n\n  cherry  \n  # indented comment\n";
        let source = WordSource::from_list(word_list).unwrap();

        assert_eq!(source.word_count(), 3);
        for _ in 0..10 {
            let word = source.pick().unwrap();
            assert!(["APPLE", "BANANA", "CHERRY"].contains(&word.as_str()));
        }
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let result = WordSource::from_list("# only comments\n\n   \n");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("no usable words"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(WordSource::from_file("/nonexistent/words.txt").is_err());
    }
}
