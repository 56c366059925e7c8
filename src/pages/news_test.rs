use super::*;

#[test]
fn validate_news_input_builds_draft_without_timestamp() {
    let draft = validate_news_input(" Harvest ", " Outlook ", " Body text ", " admin ").unwrap();
    assert_eq!(draft.title, "Harvest");
    assert_eq!(draft.subtitle, "Outlook");
    assert_eq!(draft.content, "Body text");
    assert_eq!(draft.author_name, "admin");
    let wire = serde_json::to_value(&draft).unwrap();
    assert!(wire.get("timestamp").is_none());
}

#[test]
fn validate_news_input_rejects_any_empty_field() {
    assert!(validate_news_input("", "s", "c", "a").is_err());
    assert!(validate_news_input("t", " ", "c", "a").is_err());
    assert!(validate_news_input("t", "s", "", "a").is_err());
    assert!(validate_news_input("t", "s", "c", " ").is_err());
}
