//! The analyze pipeline: read the document, call the service, print, save.
//!
//! Runs strictly in sequence. The console result is written before the
//! optional output file, so a failed save still leaves the printed result.

use std::io::Write;
use std::path::{Path, PathBuf};

use textsentiment_core::{
    config::ENDPOINT_VAR, format_result, read_document, write_result, AnalyzerConfig,
    ConfigError, DocumentError,
};
use textsentiment_language::{LanguageClient, LanguageError};
use thiserror::Error;

/// Inputs for one invocation, taken from the command line.
#[derive(Debug)]
pub(crate) struct AnalyzeRequest<'a> {
    pub(crate) file: &'a Path,
    pub(crate) out: Option<&'a Path>,
    pub(crate) language: &'a str,
}

#[derive(Debug, Error)]
pub(crate) enum PipelineError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("text file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("text file {} is empty; nothing to analyze", path.display())]
    Validation { path: PathBuf },

    #[error("sentiment analysis failed: {0}")]
    Remote(#[from] LanguageError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<DocumentError> for PipelineError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NotFound { path } => PipelineError::NotFound(path),
            DocumentError::Read { path, source } => PipelineError::Io { path, source },
        }
    }
}

/// Loads configuration with `load_config`, then runs [`run_analyze`].
///
/// # Errors
///
/// Returns [`PipelineError::Configuration`] without touching the network when
/// `load_config` fails; otherwise whatever [`run_analyze`] returns.
pub(crate) async fn run<C, W>(
    load_config: C,
    request: &AnalyzeRequest<'_>,
    stdout: &mut W,
) -> Result<(), PipelineError>
where
    C: FnOnce() -> Result<AnalyzerConfig, ConfigError>,
    W: Write,
{
    let config = load_config()?;
    run_analyze(&config, request, stdout).await
}

/// Runs one analysis and writes the report to `stdout` (and `request.out`, if set).
///
/// # Errors
///
/// Returns the [`PipelineError`] for the first step that fails. No request is
/// sent when the endpoint is invalid, the file is missing, or the file is empty.
/// The output file is only touched after a successful analysis.
pub(crate) async fn run_analyze<W: Write>(
    config: &AnalyzerConfig,
    request: &AnalyzeRequest<'_>,
    stdout: &mut W,
) -> Result<(), PipelineError> {
    let client = LanguageClient::new(&config.credentials, config.request_timeout_secs).map_err(
        |e| match e {
            LanguageError::InvalidEndpoint { reason, .. } => {
                PipelineError::Configuration(ConfigError::InvalidEnvVar {
                    var: ENDPOINT_VAR.to_string(),
                    reason,
                })
            }
            other => PipelineError::Remote(other),
        },
    )?;

    let document = read_document(request.file)?;
    if document.is_empty() {
        return Err(PipelineError::Validation {
            path: request.file.to_path_buf(),
        });
    }

    tracing::info!(file = %request.file.display(), "analyzing sentiment");
    let result = client
        .analyze_sentiment(&document, request.language)
        .await?;
    tracing::info!(label = %result.label(), "sentiment received");

    let text = format_result(&result);
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(stdout_error)?;

    if let Some(out) = request.out {
        write_result(&text, out).map_err(|source| PipelineError::Io {
            path: out.to_path_buf(),
            source,
        })?;
        writeln!(stdout, "Results saved → {}", out.display()).map_err(stdout_error)?;
    }

    Ok(())
}

fn stdout_error(source: std::io::Error) -> PipelineError {
    PipelineError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
