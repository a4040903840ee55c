use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type Token = String;
pub type TF = f64;
pub type IDF = f64;
pub type TFIDF = f64;

/// Occurrence counts in first-occurrence order.
pub type TermCounts = IndexMap<Token, u64>;

/// Relative frequency of each distinct token of one document, in first-occurrence order.
pub type TermFrequencyMap = IndexMap<Token, TF>;

pub type InverseDocumentFrequencyMap = HashMap<Token, IDF>;

pub type ResultSet = IndexMap<String, Vec<ScoredWord>>;

/// Serialized as a `[word, score]` pair.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(into = "(Token, TFIDF)", from = "(Token, TFIDF)")]
pub struct ScoredWord {
    pub word: Token,
    pub score: TFIDF,
}

impl ScoredWord {
    pub const fn new(word: Token, score: TFIDF) -> Self {
        Self { word, score }
    }
}

impl From<ScoredWord> for (Token, TFIDF) {
    fn from(scored: ScoredWord) -> Self {
        (scored.word, scored.score)
    }
}

impl From<(Token, TFIDF)> for ScoredWord {
    fn from((word, score): (Token, TFIDF)) -> Self {
        Self::new(word, score)
    }
}
