use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::tf_idf::types::Token;
use regex::Regex;

pub const DEFAULT_MIN_LENGTH: usize = 2;

pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r"[\p{L}\p{N}_]+")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Lowercases `text` and returns every maximal run of word characters in it.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.regex
            .find_iter(&text.to_lowercase())
            .map(|token| token.as_str().to_string())
            .collect()
    }
}

/// Case-folded stop-word set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TokenFilter<'a> {
    pub stop_words: Option<&'a StopWords>,
    pub min_length: usize,
}

impl<'a> TokenFilter<'a> {
    pub const fn new(stop_words: Option<&'a StopWords>, min_length: usize) -> Self {
        Self {
            stop_words,
            min_length,
        }
    }

    /// Drops stop words and tokens shorter than `min_length` characters, keeping order.
    pub fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| self.keeps(token))
            .collect()
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= self.min_length
            && !self.stop_words.is_some_and(|stop| stop.contains(token))
    }
}

impl Default for TokenFilter<'_> {
    fn default() -> Self {
        Self::new(None, DEFAULT_MIN_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new().expect("Failed to create tokenizer")
    }

    #[test]
    fn lowercases_and_splits_on_non_word_characters() {
        assert_eq!(
            tokenizer().tokenize("Hello, World! rust_lang 2024... C++"),
            vec!["hello", "world", "rust_lang", "2024", "c"]
        );
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert!(tokenizer().tokenize("").is_empty());
        assert!(tokenizer().tokenize("  --- !!! ??? ").is_empty());
    }

    #[test]
    fn unicode_word_characters() {
        assert_eq!(
            tokenizer().tokenize("Café ÜBER naïve"),
            vec!["café", "über", "naïve"]
        );
    }

    #[test]
    fn marks_and_connectors_split_words() {
        assert_eq!(
            tokenizer().tokenize("cafe\u{301} x ½ a‿b"),
            vec!["cafe", "x", "½", "a", "b"]
        );
    }

    #[test]
    fn filter_removes_stop_words() {
        let stop_words = StopWords::new(["the", "a"]);
        let filter = TokenFilter::new(Some(&stop_words), DEFAULT_MIN_LENGTH);

        let tokens = tokenizer().tokenize("The cat sat on a mat");

        assert_eq!(filter.filter(tokens), vec!["cat", "sat", "on", "mat"]);
    }

    #[test]
    fn filter_min_length_counts_characters() {
        let filter = TokenFilter::new(None, 3);
        let tokens = vec!["ab".to_string(), "été".to_string(), "x".to_string()];

        assert_eq!(filter.filter(tokens), vec!["été"]);
    }

    #[test]
    fn stop_words_are_case_insensitive() {
        let stop_words = StopWords::new(["  The ", "", "AND"]);

        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("And"));
        assert!(!stop_words.contains("cat"));
    }
}
