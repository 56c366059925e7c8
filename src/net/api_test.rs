use super::*;
use crate::net::http::ApiError;
use crate::net::types::{HistoryRecord, Tip, TipListResponse};

#[test]
fn delete_tip_payload_keys_on_crop_name() {
    assert_eq!(delete_tip_payload("wheat"), serde_json::json!({ "crop_name": "wheat" }));
}

#[test]
fn delete_disease_payload_keys_on_disease_name() {
    assert_eq!(
        delete_disease_payload("rust"),
        serde_json::json!({ "disease_name": "rust" })
    );
}

#[test]
fn delete_news_payload_keys_on_title() {
    assert_eq!(
        delete_news_payload("Harvest outlook"),
        serde_json::json!({ "title": "Harvest outlook" })
    );
}

#[test]
fn login_payload_carries_both_credentials() {
    assert_eq!(
        login_payload("admin", "hunter2"),
        serde_json::json!({ "username": "admin", "password": "hunter2" })
    );
}

#[test]
fn encode_tip_produces_wire_body() {
    let tip = Tip { crop_name: "wheat".to_owned(), crop_tips: "water daily".to_owned() };
    assert_eq!(
        encode(&tip).unwrap(),
        serde_json::json!({ "crop_name": "wheat", "crop_tips": "water daily" })
    );
}

#[test]
fn decode_rejects_wrong_shape_with_decode_error() {
    let result: Result<TipListResponse, ApiError> = decode(serde_json::json!({ "nope": [] }));
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_accepts_history_array() {
    let data = serde_json::json!([{
        "image_id": 1,
        "username": "u",
        "summary": "s",
        "model_chosen": "m",
        "crop_name": "c",
        "created_at": "2025-01-01T00:00:00Z"
    }]);
    let records: Vec<HistoryRecord> = decode(data).unwrap();
    assert_eq!(records.len(), 1);
}
