//! HTTP client for the Azure AI Language `analyze-text` REST endpoint.
//!
//! Wraps `reqwest` with key-header authentication, endpoint normalisation, and
//! typed response handling. Each call submits exactly one document and makes
//! exactly one request; failures are returned to the caller as-is.

use std::time::Duration;

use reqwest::{Client, Url};
use textsentiment_core::{Credentials, SentimentResult};

use crate::error::LanguageError;
use crate::types::{
    AnalysisInput, AnalyzeTextRequest, AnalyzeTextResponse, ErrorResponse, SentimentParameters,
    TextDocument,
};

const API_VERSION: &str = "2023-04-01";
const ANALYZE_TEXT_PATH: &str = "language/:analyze-text";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const DOCUMENT_ID: &str = "1";

/// Client for the Azure AI Language sentiment API.
///
/// Holds the HTTP client, subscription key, and the fully-built
/// `analyze-text` URL derived from the configured endpoint.
pub struct LanguageClient {
    client: Client,
    key: String,
    analyze_url: Url,
}

impl LanguageClient {
    /// Creates a client for the endpoint and key in `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageError::InvalidEndpoint`] if the endpoint is not an
    /// absolute http(s) URL, or [`LanguageError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(credentials: &Credentials, timeout_secs: u64) -> Result<Self, LanguageError> {
        let analyze_url = build_analyze_url(credentials.endpoint())?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("textsentiment/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            key: credentials.key().to_string(),
            analyze_url,
        })
    }

    /// The URL sentiment requests are posted to.
    #[must_use]
    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }

    /// Analyzes `text` as a single-document batch and returns its sentiment.
    ///
    /// `language` is the ISO 639-1 hint sent with the document (for example `"en"`).
    ///
    /// # Errors
    ///
    /// - [`LanguageError::Http`] on network failure or timeout.
    /// - [`LanguageError::Api`] / [`LanguageError::UnexpectedStatus`] on a
    ///   non-2xx response (bad key, throttling, service outage).
    /// - [`LanguageError::DocumentRejected`] if the service reports an error
    ///   for the document.
    /// - [`LanguageError::Deserialize`], [`LanguageError::MissingResult`], or
    ///   [`LanguageError::Malformed`] if the response is unusable.
    pub async fn analyze_sentiment(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SentimentResult, LanguageError> {
        let request = AnalyzeTextRequest {
            kind: "SentimentAnalysis",
            parameters: SentimentParameters {
                model_version: "latest",
                opinion_mining: false,
            },
            analysis_input: AnalysisInput {
                documents: vec![TextDocument {
                    id: DOCUMENT_ID,
                    language,
                    text,
                }],
            },
        };

        tracing::debug!(
            url = %self.analyze_url,
            chars = text.chars().count(),
            language,
            "submitting document for sentiment analysis"
        );

        let response = self
            .client
            .post(self.analyze_url.clone())
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "Language API responded");

        if !status.is_success() {
            return Err(self.status_error(status.as_u16(), &body));
        }

        let parsed: AnalyzeTextResponse =
            serde_json::from_str(&body).map_err(|e| LanguageError::Deserialize {
                context: "analyze-text sentiment response".to_string(),
                source: e,
            })?;

        Self::extract_result(parsed)
    }

    /// Maps a non-2xx response to the most descriptive error available.
    fn status_error(&self, status: u16, body: &str) -> LanguageError {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(envelope) => {
                let (code, message) = envelope.error.into_detail();
                LanguageError::Api {
                    status,
                    code,
                    message,
                }
            }
            Err(_) => LanguageError::UnexpectedStatus {
                status,
                url: self.analyze_url.to_string(),
            },
        }
    }

    /// Pulls the single document's sentiment out of a parsed response.
    fn extract_result(response: AnalyzeTextResponse) -> Result<SentimentResult, LanguageError> {
        let results = response.results;
        if let Some(model_version) = results.model_version.as_deref() {
            tracing::debug!(kind = %response.kind, model_version, "sentiment model");
        }

        if let Some(entry) = results.errors.into_iter().next() {
            let (code, message) = entry.error.into_detail();
            return Err(LanguageError::DocumentRejected { code, message });
        }

        let mut documents = results.documents;
        if documents.is_empty() {
            return Err(LanguageError::MissingResult);
        }
        let index = documents
            .iter()
            .position(|d| d.id == DOCUMENT_ID)
            .unwrap_or(0);
        let document = documents.swap_remove(index);

        for warning in &document.warnings {
            tracing::warn!(code = %warning.code, "Language API warning: {}", warning.message);
        }

        let scores = document.confidence_scores;
        SentimentResult::new(
            document.sentiment,
            scores.positive,
            scores.neutral,
            scores.negative,
        )
        .map_err(|e| LanguageError::Malformed(e.to_string()))
    }
}

/// Turns a resource endpoint such as `https://name.cognitiveservices.azure.com/`
/// into the `analyze-text` URL with the pinned `api-version` query parameter.
fn build_analyze_url(endpoint: &str) -> Result<Url, LanguageError> {
    let invalid = |reason: String| LanguageError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    // Exactly one trailing slash, so `join` appends instead of replacing the
    // last path segment.
    let normalised = format!("{}/", endpoint.trim().trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }

    let mut url = base
        .join(ANALYZE_TEXT_PATH)
        .map_err(|e| invalid(e.to_string()))?;
    url.query_pairs_mut().append_pair("api-version", API_VERSION);
    Ok(url)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
