//! Integration tests for `LanguageClient` using wiremock HTTP mocks.

use textsentiment_core::{Credentials, SentimentLabel};
use textsentiment_language::{LanguageClient, LanguageError};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> LanguageClient {
    let credentials =
        Credentials::new(base_url, "test-key").expect("credentials should be valid");
    LanguageClient::new(&credentials, 5).expect("client construction should not fail")
}

fn sentiment_body(label: &str, positive: f64, neutral: f64, negative: f64) -> serde_json::Value {
    serde_json::json!({
        "kind": "SentimentAnalysisResults",
        "results": {
            "documents": [{
                "id": "1",
                "sentiment": label,
                "confidenceScores": {
                    "positive": positive,
                    "neutral": neutral,
                    "negative": negative
                },
                "sentences": [{
                    "sentiment": label,
                    "confidenceScores": {
                        "positive": positive,
                        "neutral": neutral,
                        "negative": negative
                    },
                    "offset": 0,
                    "length": 21,
                    "text": "The hotel was lovely."
                }],
                "warnings": []
            }],
            "errors": [],
            "modelVersion": "2022-11-01"
        }
    })
}

#[tokio::test]
async fn analyze_sentiment_returns_parsed_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/language/:analyze-text"))
        .and(query_param("api-version", "2023-04-01"))
        .and(header("Ocp-Apim-Subscription-Key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sentiment_body("positive", 0.87, 0.10, 0.03)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .analyze_sentiment("The hotel was lovely.", "en")
        .await
        .expect("should parse sentiment");

    assert_eq!(result.label(), SentimentLabel::Positive);
    assert!((result.positive() - 0.87).abs() < f64::EPSILON);
    assert!((result.neutral() - 0.10).abs() < f64::EPSILON);
    assert!((result.negative() - 0.03).abs() < f64::EPSILON);
}

#[tokio::test]
async fn analyze_sentiment_parses_result_carrying_warnings() {
    let server = MockServer::start().await;

    let mut body = sentiment_body("negative", 0.05, 0.15, 0.80);
    body["results"]["documents"][0]["warnings"] = serde_json::json!([{
        "code": "LongWordsInDocument",
        "message": "The document contains very long words (longer than 64 characters)."
    }]);

    Mock::given(method("POST"))
        .and(path("/language/:analyze-text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .analyze_sentiment("text", "en")
        .await
        .expect("warnings should not fail the analysis");

    assert_eq!(result.label(), SentimentLabel::Negative);
    assert!((result.negative() - 0.80).abs() < f64::EPSILON);
}

#[tokio::test]
async fn analyze_sentiment_sends_single_document_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/language/:analyze-text"))
        .and(body_partial_json(serde_json::json!({
            "kind": "SentimentAnalysis",
            "parameters": { "modelVersion": "latest", "opinionMining": false },
            "analysisInput": {
                "documents": [
                    { "id": "1", "language": "fr", "text": "C'est magnifique." }
                ]
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sentiment_body("mixed", 0.4, 0.2, 0.4)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .analyze_sentiment("C'est magnifique.", "fr")
        .await
        .expect("should parse sentiment");

    assert_eq!(result.label(), SentimentLabel::Mixed);
}

#[tokio::test]
async fn analyze_sentiment_surfaces_auth_failure() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": {
            "code": "401",
            "message": "Access denied due to invalid subscription key or wrong API endpoint."
        }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .analyze_sentiment("text", "en")
        .await
        .expect_err("should fail with 401");

    assert!(
        matches!(
            err,
            LanguageError::Api { status: 401, ref message, .. } if message.starts_with("Access denied")
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn analyze_sentiment_does_not_retry_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .analyze_sentiment("text", "en")
        .await
        .expect_err("should fail with 503");

    assert!(
        matches!(err, LanguageError::UnexpectedStatus { status: 503, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn analyze_sentiment_surfaces_document_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "kind": "SentimentAnalysisResults",
        "results": {
            "documents": [],
            "errors": [{
                "id": "1",
                "error": {
                    "code": "InvalidArgument",
                    "message": "Invalid Language Code.",
                    "innererror": {
                        "code": "UnsupportedLanguageCode",
                        "message": "Invalid language code 'xx'."
                    }
                }
            }],
            "modelVersion": "2022-11-01"
        }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .analyze_sentiment("text", "xx")
        .await
        .expect_err("document error should propagate");

    assert!(
        matches!(err, LanguageError::DocumentRejected { ref code, .. } if code == "UnsupportedLanguageCode"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn analyze_sentiment_rejects_unknown_label() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sentiment_body("ecstatic", 0.9, 0.1, 0.0)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .analyze_sentiment("text", "en")
        .await
        .expect_err("unknown label should fail");

    assert!(
        matches!(err, LanguageError::Deserialize { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn analyze_sentiment_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy login</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .analyze_sentiment("text", "en")
        .await
        .expect_err("html body should fail");

    assert!(
        matches!(err, LanguageError::Deserialize { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn analyze_sentiment_surfaces_transport_error() {
    let client = test_client("http://127.0.0.1:1");
    let err = client
        .analyze_sentiment("text", "en")
        .await
        .expect_err("connection should be refused");

    assert!(matches!(err, LanguageError::Http(_)), "got: {err:?}");
}
