use super::types::{TermCounts, TermFrequencyMap, Token, TF};

pub fn count_terms(tokens: &[Token]) -> TermCounts {
    let mut word_count = TermCounts::new();

    for token in tokens {
        *word_count.entry(token.clone()).or_insert(0) += 1;
    }

    word_count
}

/// Divides each token's count by the document's total token count.
///
/// An empty document has no terms and yields an empty map.
#[allow(clippy::cast_precision_loss)]
pub fn compute_tf(tokens: &[Token]) -> TermFrequencyMap {
    let word_count = count_terms(tokens);
    let total_words: u64 = word_count.values().sum();

    word_count
        .into_iter()
        .map(|(word, count)| (word, count as TF / total_words as TF))
        .collect()
}
