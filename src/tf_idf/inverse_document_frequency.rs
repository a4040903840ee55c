use std::collections::HashSet;

use indexmap::IndexMap;

use super::types::{InverseDocumentFrequencyMap, Token, IDF};
use crate::error::{Error, Result};

/// Number of documents each token appears in at least once.
pub fn document_frequencies<D>(corpus: &[D]) -> IndexMap<&str, u64>
where
    D: AsRef<[Token]>,
{
    let mut frequencies = IndexMap::new();

    for document in corpus {
        let mut seen = HashSet::new();

        for token in document.as_ref() {
            if seen.insert(token.as_str()) {
                *frequencies.entry(token.as_str()).or_insert(0) += 1;
            }
        }
    }

    frequencies
}

/// `ln(N / (1 + df))` for every token in the corpus.
///
/// Tokens present in every document get a negative weight. An empty corpus
/// has no defined IDF and is rejected.
#[allow(clippy::cast_precision_loss)]
pub fn compute_idf<D>(corpus: &[D]) -> Result<InverseDocumentFrequencyMap>
where
    D: AsRef<[Token]>,
{
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let total_docs = corpus.len() as IDF;

    Ok(document_frequencies(corpus)
        .into_iter()
        .map(|(token, doc_count)| {
            (
                token.to_string(),
                calculate_idf(total_docs, doc_count as IDF),
            )
        })
        .collect())
}

fn calculate_idf(n: IDF, df: IDF) -> IDF {
    (n / (1.0 + df)).ln()
}
