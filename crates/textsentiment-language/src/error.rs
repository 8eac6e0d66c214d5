use thiserror::Error;

/// Errors returned by the Azure AI Language client.
#[derive(Debug, Error)]
pub enum LanguageError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured endpoint could not be turned into a request URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The service answered with a non-2xx status and a structured error body.
    #[error("Language API error (HTTP {status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The service answered with a non-2xx status and no recognisable error body.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The request succeeded but the document itself was rejected.
    #[error("document rejected by the Language API {code}: {message}")]
    DocumentRejected { code: String, message: String },

    /// The response carried neither a result nor an error for the document.
    #[error("Language API response contained no sentiment result")]
    MissingResult,

    /// The response parsed but its values are unusable.
    #[error("malformed sentiment result: {0}")]
    Malformed(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
