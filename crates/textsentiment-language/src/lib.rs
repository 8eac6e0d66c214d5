//! Client for the Azure AI Language sentiment-analysis API.

pub mod client;
pub mod error;
pub mod types;

pub use client::LanguageClient;
pub use error::LanguageError;
