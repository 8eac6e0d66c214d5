mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use textsentiment_core::{AnalyzerConfig, ConfigError};
use tracing_subscriber::EnvFilter;

use crate::pipeline::AnalyzeRequest;

#[derive(Debug, Parser)]
#[command(name = "textsentiment")]
#[command(about = "Analyze the sentiment of a text file using Azure AI Language")]
struct Cli {
    /// Path to input text file
    file: PathBuf,

    /// Path to output text file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Language of the document as an ISO 639-1 code
    #[arg(long, default_value = "en")]
    language: String,
}

impl Cli {
    fn analyze_request(&self) -> AnalyzeRequest<'_> {
        AnalyzeRequest {
            file: &self.file,
            out: self.out.as_deref(),
            language: &self.language,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let load_config = || -> Result<AnalyzerConfig, ConfigError> {
        let config = textsentiment_core::load_analyzer_config()?;
        init_tracing(&config.log_level);
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    };

    let mut stdout = std::io::stdout().lock();
    pipeline::run(load_config, &cli.analyze_request(), &mut stdout).await?;

    Ok(())
}

/// Logs go to stderr; stdout carries only the report.
fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
