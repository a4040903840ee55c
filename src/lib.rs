pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod tf_idf;
pub mod tokenizer;

pub use error::{Error, Result};
pub use pipeline::{run, Pipeline, PipelineConfig};
pub use tf_idf::types::{ResultSet, ScoredWord};
