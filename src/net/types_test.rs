use super::*;

#[test]
fn tip_list_envelope_deserializes() {
    let body = serde_json::json!({
        "tips": [
            { "crop_name": "wheat", "crop_tips": "water daily" },
            { "crop_name": "maize", "crop_tips": "full sun" }
        ]
    });
    let parsed: TipListResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.tips.len(), 2);
    assert_eq!(parsed.tips[0].crop_name, "wheat");
    assert_eq!(parsed.tips[0].crop_tips, "water daily");
}

#[test]
fn disease_list_envelope_deserializes() {
    let body = serde_json::json!({
        "diseases": [{
            "disease_name": "rust",
            "crop_name": "wheat",
            "cure": "fungicide",
            "commonness": "common"
        }]
    });
    let parsed: DiseaseListResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.diseases[0].disease_name, "rust");
    assert_eq!(parsed.diseases[0].commonness, "common");
}

#[test]
fn news_article_tolerates_missing_timestamp() {
    let body = serde_json::json!({
        "news": [{
            "title": "Harvest outlook",
            "subtitle": "A good year",
            "content": "...",
            "author_name": "admin"
        }]
    });
    let parsed: NewsListResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.news[0].timestamp, "");
}

#[test]
fn news_draft_serializes_without_timestamp() {
    let draft = NewsDraft {
        title: "t".to_owned(),
        subtitle: "s".to_owned(),
        content: "c".to_owned(),
        author_name: "a".to_owned(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("timestamp").is_none());
    assert_eq!(value["title"], "t");
}

#[test]
fn history_record_without_image_url_is_none() {
    let body = serde_json::json!([{
        "image_id": 7,
        "username": "farmer1",
        "summary": "2 weeds detected",
        "model_chosen": "yolo",
        "crop_name": "maize",
        "created_at": "2025-03-05T14:30:00Z"
    }]);
    let parsed: Vec<HistoryRecord> = serde_json::from_value(body).unwrap();
    assert_eq!(parsed[0].image_id, 7);
    assert_eq!(parsed[0].processed_image_url, None);
}

#[test]
fn admin_user_ignores_extra_fields() {
    let body = serde_json::json!({
        "username": "admin",
        "is_admin": true,
        "message": "User is authenticated"
    });
    let parsed: AdminUser = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.username, "admin");
    assert!(parsed.is_admin);
}
