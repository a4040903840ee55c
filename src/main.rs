use anyhow::{Context, Result};
use clap::Parser;
use title_tfidf::{
    config::{Args, Config},
    output::save_results,
    pipeline::Pipeline,
};
use tracing::info;

fn main() -> Result<()> {
    // Logs go to stderr so `--output -` stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("title_tfidf=info")),
        )
        .init();

    let config = Config::from_args(Args::parse())?;

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    // Time the run
    let start = std::time::Instant::now();

    let pipeline = Pipeline::new(config.pipeline)?;
    let results = pipeline
        .run_files(&config.inputs, config.stop_words.as_deref())
        .context("Failed to compute TF-IDF scores")?;

    save_results(&config.output, &results, config.format)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!(
        documents = results.len(),
        output = %config.output.display(),
        elapsed = ?start.elapsed(),
        "Wrote results"
    );

    Ok(())
}
