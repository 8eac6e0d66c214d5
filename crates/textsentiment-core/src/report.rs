//! Sentiment result model and its plain-text rendering.

use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Overall sentiment classification returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    Mixed,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("{category} confidence score {value} is outside [0, 1]")]
    OutOfRange { category: &'static str, value: f64 },
}

/// Label plus the three per-category confidence scores.
///
/// Scores are each within `[0, 1]`; they are not required to sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    label: SentimentLabel,
    positive: f64,
    neutral: f64,
    negative: f64,
}

impl SentimentResult {
    /// Builds a result, rejecting scores that are not finite or fall outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::OutOfRange`] for the first offending score.
    pub fn new(
        label: SentimentLabel,
        positive: f64,
        neutral: f64,
        negative: f64,
    ) -> Result<Self, ScoreError> {
        for (category, value) in [
            ("positive", positive),
            ("neutral", neutral),
            ("negative", negative),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoreError::OutOfRange { category, value });
            }
        }

        Ok(Self {
            label,
            positive,
            neutral,
            negative,
        })
    }

    #[must_use]
    pub fn label(&self) -> SentimentLabel {
        self.label
    }

    #[must_use]
    pub fn positive(&self) -> f64 {
        self.positive
    }

    #[must_use]
    pub fn neutral(&self) -> f64 {
        self.neutral
    }

    #[must_use]
    pub fn negative(&self) -> f64 {
        self.negative
    }
}

/// Renders the four-line report printed to stdout and written to `--out`.
///
/// Every line, including the last, ends with `\n`.
#[must_use]
pub fn format_result(result: &SentimentResult) -> String {
    format!(
        "Overall sentiment: {}\nPositive: {:.2}\nNeutral: {:.2}\nNegative: {:.2}\n",
        result.label, result.positive, result.neutral, result.negative
    )
}

/// Writes `text` to `path`, creating or truncating the file.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be created or written.
pub fn write_result(text: &str, path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}
