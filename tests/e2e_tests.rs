//! End-to-end HTTP tests.

mod common;

use std::sync::Arc;

use xai::XAI_STATUS_HEADER;
use xai::explain::MockExplainer;

use common::{spawn_mock_server, spawn_test_server};

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
}

fn status_header(resp: &reqwest::Response) -> String {
    resp.headers()
        .get(XAI_STATUS_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let server = spawn_mock_server("ok").await;

    let resp = client()
        .get(format!("{}/healthz", server.url()))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(status_header(&resp), "healthy");
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_endpoint_reports_corpus() {
    let server = spawn_mock_server("ok").await;

    let resp = client()
        .get(format!("{}/ready", server.url()))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(status_header(&resp), "ready");
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["passages"], 2);
    assert_eq!(body["backend"], "mock");
}

#[tokio::test]
async fn test_explain_over_http() {
    let server = spawn_mock_server("TF-IDF weights terms by rarity.").await;

    let resp = client()
        .post(format!("{}/v1/explain", server.url()))
        .json(&serde_json::json!({
            "question": "What is TF-IDF?",
            "student_answer": "A term weighting scheme",
            "correct_answer": "A term weighting scheme"
        }))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(status_header(&resp), "generated");

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "correct");
    assert_eq!(body["classification"]["category"], "EXACT_MATCH");
    assert_eq!(body["classification"]["confidence"], 1.0);
    assert_eq!(body["passages"][0]["passage_id"], 0);
    assert_eq!(body["explanation"]["text"], "TF-IDF weights terms by rarity.");
}

#[tokio::test]
async fn test_explain_fallback_over_http() {
    let server = spawn_test_server(Arc::new(MockExplainer::failing("provider down")))
        .await
        .unwrap();

    let resp = client()
        .post(format!("{}/v1/explain", server.url()))
        .json(&serde_json::json!({
            "question": "What is TF-IDF?",
            "student_answer": "A neural network",
            "correct_answer": "A term weighting scheme"
        }))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(status_header(&resp), "fallback");

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "incorrect");
    assert_eq!(body["classification"]["category"], "UNRELATED");
    assert_eq!(body["explanation"]["source"], "fallback");
}

#[tokio::test]
async fn test_corpus_update_over_http() {
    let server = spawn_mock_server("ok").await;
    let client = client();

    let resp = client
        .put(format!("{}/v1/corpus", server.url()))
        .json(&serde_json::json!({
            "passages": ["Stemming reduces words to their root form."]
        }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let resp = client
        .post(format!("{}/v1/explain", server.url()))
        .json(&serde_json::json!({
            "question": "What does stemming do?",
            "student_answer": "reduces words to roots",
            "correct_answer": "reduces words to their root form"
        }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["passages"][0]["passage_id"], 0);
    assert!(
        body["passages"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("Stemming")
    );
}

#[tokio::test]
async fn test_bad_request_over_http() {
    let server = spawn_mock_server("ok").await;

    let resp = client()
        .post(format!("{}/v1/explain", server.url()))
        .json(&serde_json::json!({"question": "What is TF-IDF?", "student_answer": 5}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(status_header(&resp), "invalid_request");
}
