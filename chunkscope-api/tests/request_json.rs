//! JSON wire shapes of requests, responses and the catalog
#![cfg(feature = "serde")]

use chunkscope_api::*;
use serde_json::{json, Value};

#[test]
fn test_json_request_round_trip() {
    let request = json!({
        "text": "abcdefghijklmnopqrstuvwxyz",
        "strategy": "fixed",
        "chunk_size": 10,
        "chunk_overlap": 2
    });

    let response: Value = serde_json::from_str(&process_request_json(&request.to_string())).unwrap();

    assert_eq!(response["strategy"], "fixed");
    assert_eq!(response["total_chunks"], 3);
    assert_eq!(response["chunks"][1]["content"], "ijklmnopqr");
    assert_eq!(response["chunks"][1]["start_index"], 8);
    assert_eq!(response["chunks"][1]["end_index"], 18);
    assert_eq!(response["chunks"][1]["overlap_with_previous"], 2);
    assert_eq!(
        response["chunks"][0]["metadata"],
        json!({"target_size": 10, "method": "fixed", "step": 8})
    );
    assert!(response["strategy_explanation"]
        .as_str()
        .unwrap()
        .starts_with("Fixed chunking"));

    let typed: ChunkResponse = serde_json::from_value(response).unwrap();
    assert_eq!(typed.reconstruct(), "abcdefghijklmnopqrstuvwxyz");
}

#[test]
fn test_json_request_defaults() {
    let response: Value =
        serde_json::from_str(&process_request_json(r#"{"text": "Short text."}"#)).unwrap();
    assert_eq!(response["strategy"], "recursive");
    assert_eq!(response["chunks"][0]["metadata"]["target_size"], 1000);
}

#[test]
fn test_json_errors() {
    let cases = [
        (
            json!({"text": "x", "strategy": "sliding"}).to_string(),
            "unsupported_strategy",
        ),
        (
            json!({"text": "x", "chunk_size": -10, "chunk_overlap": 0}).to_string(),
            "invalid_configuration",
        ),
        (
            json!({"text": "x", "chunk_size": 10, "chunk_overlap": 10}).to_string(),
            "invalid_configuration",
        ),
        ("not json".to_string(), "serde"),
    ];

    for (request, kind) in cases {
        let response: ErrorResponse =
            serde_json::from_str(&process_request_json(&request)).unwrap();
        assert_eq!(response.kind, kind, "{request}");
        assert!(!response.detail.is_empty());
    }
}

#[test]
fn test_semantic_metadata_shape() {
    let request = json!({
        "text": "Cats purr softly. Cats purr loudly. Rockets launch quickly. Rockets launch daily.",
        "strategy": "semantic"
    });
    let response: Value = serde_json::from_str(&process_request_json(&request.to_string())).unwrap();

    let metadata = &response["chunks"][0]["metadata"];
    assert_eq!(metadata["method"], "semantic");
    assert_eq!(metadata["sentence_count"], 2);
    assert_eq!(metadata["split_reason"], "topic_shift");
    assert!(metadata["similarity_threshold"].is_f64());
}

#[test]
fn test_catalog_json_is_keyed_by_id() {
    let catalog = serde_json::to_value(strategy_catalog()).unwrap();
    assert_eq!(catalog["semantic"]["name"], "Semantic Chunking");
    assert_eq!(catalog["fixed"]["advantages"].as_array().unwrap().len(), 3);
    assert_eq!(catalog.as_object().unwrap().len(), 4);
}
