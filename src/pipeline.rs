use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    loader::{self, RawDocument},
    tf_idf::{
        compute_idf, compute_tf, score,
        types::{ResultSet, ScoredWord, Token},
    },
    tokenizer::{StopWords, TokenFilter, Tokenizer, DEFAULT_MIN_LENGTH},
};

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub top_n: usize,
    /// Forces the filter stage even without stop words.
    pub min_length: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_length: None,
        }
    }
}

pub struct Pipeline {
    tokenizer: Tokenizer,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            config,
        })
    }

    fn token_filter<'a>(&self, stop_words: Option<&'a StopWords>) -> Option<TokenFilter<'a>> {
        let stop_words = stop_words.filter(|stop| !stop.is_empty());

        match (stop_words, self.config.min_length) {
            (None, None) => None,
            (stop_words, min_length) => Some(TokenFilter::new(
                stop_words,
                min_length.unwrap_or(DEFAULT_MIN_LENGTH),
            )),
        }
    }

    pub fn tokenize(&self, text: &str, stop_words: Option<&StopWords>) -> Vec<Token> {
        let tokens = self.tokenizer.tokenize(text);

        match self.token_filter(stop_words) {
            Some(filter) => filter.filter(tokens),
            None => tokens,
        }
    }

    /// Tokenizes every input, computes IDF over the whole corpus, then ranks
    /// each input's words against it.
    ///
    /// Results keep input order. An input id seen twice counts twice towards
    /// IDF but keeps only its last ranking.
    pub fn run(&self, inputs: &[RawDocument], stop_words: Option<&StopWords>) -> Result<ResultSet> {
        if inputs.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let corpus: Vec<Vec<Token>> = inputs
            .par_iter()
            .map(|input| self.tokenize(&input.text, stop_words))
            .collect();

        let total_tokens: usize = corpus.iter().map(Vec::len).sum();
        info!(
            documents = corpus.len(),
            tokens = total_tokens,
            "Tokenized corpus"
        );

        let idf = compute_idf(&corpus)?;
        info!(vocabulary = idf.len(), "Computed IDF");

        let top_n = self.config.top_n;
        let ranked = inputs
            .par_iter()
            .zip(corpus.par_iter())
            .map(|(input, tokens)| {
                let tf = compute_tf(tokens);

                if tf.is_empty() {
                    warn!(id = %input.id, "Document has no words to score");
                } else {
                    debug!(id = %input.id, distinct = tf.len(), "Scoring document");
                }

                score(&tf, &idf, top_n).map(|scores| (input.id.clone(), scores))
            })
            .collect::<Result<Vec<(String, Vec<ScoredWord>)>>>()?;

        Ok(ranked.into_iter().collect())
    }

    /// Expands, loads and ranks listing files. Any unreadable or malformed
    /// input aborts the whole batch.
    pub fn run_files(&self, inputs: &[PathBuf], stop_words: Option<&Path>) -> Result<ResultSet> {
        let stop_words = stop_words.map(loader::load_stop_words).transpose()?;
        if let Some(stop_words) = &stop_words {
            info!(count = stop_words.len(), "Loaded stop words");
        }

        let paths = loader::expand_inputs(inputs)?;
        let documents = loader::load_documents(&paths)?;
        info!(documents = documents.len(), "Loaded documents");

        self.run(&documents, stop_words.as_ref())
    }
}

/// Ranks the `top_n` most distinctive words of each input with default settings.
pub fn run(
    inputs: &[RawDocument],
    stop_words: Option<&StopWords>,
    top_n: usize,
) -> Result<ResultSet> {
    Pipeline::new(PipelineConfig {
        top_n,
        ..PipelineConfig::default()
    })?
    .run(inputs, stop_words)
}
