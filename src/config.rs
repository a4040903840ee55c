use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::{Error, Result},
    output::OutputFormat,
    pipeline::{PipelineConfig, DEFAULT_TOP_N},
};

/// Compute TF-IDF scores for the title words of listing files.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Output JSON file to store results ("-" for stdout)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Optional stop-word file, one word per line
    #[arg(short, long)]
    pub stopwords: Option<PathBuf>,

    /// Number of top-ranked words kept per input
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Drop tokens shorter than this many characters, even without stop words
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Write single-line JSON
    #[arg(long, default_value = "false")]
    pub compact: bool,

    /// Worker threads for tokenizing and scoring
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Input JSON files or directories of them
    #[arg(required = true)]
    pub input_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub stop_words: Option<PathBuf>,
    pub pipeline: PipelineConfig,
    pub format: OutputFormat,
    pub threads: Option<usize>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        if args.threads == Some(0) {
            return Err(Error::InvalidConfig(
                "--threads must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            inputs: args.input_files,
            output: args.output,
            stop_words: args.stopwords,
            pipeline: PipelineConfig {
                top_n: args.top_n,
                min_length: args.min_length,
            },
            format: if args.compact {
                OutputFormat::Compact
            } else {
                OutputFormat::Pretty
            },
            threads: args.threads,
        })
    }
}
