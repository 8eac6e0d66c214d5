//! Azure AI Language `analyze-text` request and response types.
//!
//! Only the sentiment-analysis kind is modelled. Fields the tool never reads
//! (sentence breakdowns, opinion targets, statistics) are left out and ignored
//! during deserialization.

use serde::{Deserialize, Serialize};
use textsentiment_core::SentimentLabel;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of `POST /language/:analyze-text` for a sentiment task.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextRequest<'a> {
    pub kind: &'static str,
    pub parameters: SentimentParameters,
    pub analysis_input: AnalysisInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentParameters {
    pub model_version: &'static str,
    pub opinion_mining: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalysisInput<'a> {
    pub documents: Vec<TextDocument<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TextDocument<'a> {
    pub id: &'a str,
    pub language: &'a str,
    pub text: &'a str,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Top-level success envelope: `{ "kind": "SentimentAnalysisResults", "results": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextResponse {
    pub kind: String,
    pub results: SentimentResults,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResults {
    #[serde(default)]
    pub documents: Vec<DocumentSentiment>,
    #[serde(default)]
    pub errors: Vec<DocumentErrorEntry>,
    #[serde(default)]
    pub model_version: Option<String>,
}

/// Sentiment for one submitted document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSentiment {
    pub id: String,
    pub sentiment: SentimentLabel,
    pub confidence_scores: ConfidenceScores,
    #[serde(default)]
    pub warnings: Vec<ServiceWarning>,
}

#[derive(Debug, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Deserialize)]
pub struct ServiceWarning {
    pub code: String,
    pub message: String,
}

/// Per-document failure inside an otherwise successful response.
#[derive(Debug, Deserialize)]
pub struct DocumentErrorEntry {
    pub id: String,
    pub error: ServiceError,
}

/// Non-2xx error envelope: `{ "error": { "code": ..., "message": ... } }`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ServiceError,
}

#[derive(Debug, Deserialize)]
pub struct ServiceError {
    pub code: String,
    pub message: String,
    #[serde(default, alias = "innerError")]
    pub innererror: Option<InnerError>,
}

#[derive(Debug, Deserialize)]
pub struct InnerError {
    pub code: String,
    pub message: String,
}

impl ServiceError {
    /// The most specific `(code, message)` pair available.
    ///
    /// The outer code is often a generic `InvalidArgument`; the inner error
    /// says what was actually wrong with the request.
    #[must_use]
    pub fn into_detail(self) -> (String, String) {
        match self.innererror {
            Some(inner) => (inner.code, inner.message),
            None => (self.code, self.message),
        }
    }
}
