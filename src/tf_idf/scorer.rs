use std::cmp::Ordering;

use super::types::{InverseDocumentFrequencyMap, ScoredWord, TermFrequencyMap};
use crate::error::{Error, Result};

/// TF-IDF of every word the document contains, in the document's term order.
pub fn compute_tfidf(
    tf: &TermFrequencyMap,
    idf: &InverseDocumentFrequencyMap,
) -> Result<Vec<ScoredWord>> {
    tf.iter()
        .map(|(word, tf)| {
            idf.get(word)
                .map(|idf| ScoredWord::new(word.clone(), tf * idf))
                .ok_or_else(|| Error::UnknownTerm(word.clone()))
        })
        .collect()
}

/// Ranks by signed score, highest first, and keeps the first `top_n`.
///
/// Equal scores keep their term order.
pub fn score(
    tf: &TermFrequencyMap,
    idf: &InverseDocumentFrequencyMap,
    top_n: usize,
) -> Result<Vec<ScoredWord>> {
    if top_n == 0 {
        return Ok(Vec::new());
    }

    let mut scores = compute_tfidf(tf, idf)?;
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scores.truncate(top_n);

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(entries: &[(&str, f64)]) -> TermFrequencyMap {
        entries
            .iter()
            .map(|(word, tf)| ((*word).to_string(), *tf))
            .collect()
    }

    fn idf(entries: &[(&str, f64)]) -> InverseDocumentFrequencyMap {
        entries
            .iter()
            .map(|(word, idf)| ((*word).to_string(), *idf))
            .collect()
    }

    fn words(scores: &[ScoredWord]) -> Vec<&str> {
        scores.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn ranks_by_signed_score() {
        let tf = tf(&[("cat", 0.5), ("dog", 0.25), ("fish", 0.25)]);
        let idf = idf(&[("cat", -0.4), ("dog", 0.0), ("fish", 1.2), ("bird", 3.0)]);

        let ranked = score(&tf, &idf, 10).expect("Failed to score");

        assert_eq!(words(&ranked), vec!["fish", "dog", "cat"]);
        assert!((ranked[0].score - 0.3).abs() < 1e-12);
        assert!((ranked[2].score + 0.2).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_term_order() {
        let tf = tf(&[("b", 0.25), ("a", 0.25), ("c", 0.25), ("d", 0.25)]);
        let idf = idf(&[("a", 0.0), ("b", 0.0), ("c", 1.0), ("d", 0.0)]);

        let ranked = score(&tf, &idf, 10).expect("Failed to score");

        assert_eq!(words(&ranked), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn truncates_to_top_n() {
        let tf = tf(&[("a", 0.5), ("b", 0.3), ("c", 0.2)]);
        let idf = idf(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]);

        assert_eq!(words(&score(&tf, &idf, 2).expect("Failed to score")), vec!["a", "b"]);
        assert_eq!(score(&tf, &idf, 5).expect("Failed to score").len(), 3);
        assert!(score(&tf, &idf, 0).expect("Failed to score").is_empty());
    }

    #[test]
    fn word_without_idf_is_an_error() {
        let tf = tf(&[("a", 1.0)]);

        assert!(matches!(
            score(&tf, &idf(&[]), 1),
            Err(Error::UnknownTerm(word)) if word == "a"
        ));
    }
}
