use super::*;

fn tip(name: &str) -> Tip {
    Tip { crop_name: name.to_owned(), crop_tips: "t".to_owned() }
}

#[test]
fn join_counts_reports_all_three_lengths() {
    let stats = join_counts(
        Ok(vec![tip("wheat"), tip("maize")]),
        Ok(Vec::new()),
        Ok(Vec::new()),
    )
    .unwrap();
    assert_eq!(stats.total_tips, 2);
    assert_eq!(stats.total_diseases, 0);
    assert_eq!(stats.total_news, 0);
}

#[test]
fn one_failed_list_aborts_the_whole_join() {
    let err = ApiError::Http { status: 500, body: serde_json::Value::Null };
    let result = join_counts(Ok(vec![tip("wheat")]), Err(err.clone()), Ok(Vec::new()));
    assert_eq!(result, Err(err));
}

#[test]
fn auth_failure_propagates_unchanged() {
    let err = ApiError::AuthRequired { status: 401, body: serde_json::Value::Null };
    let result = join_counts(Err(err.clone()), Ok(Vec::new()), Ok(Vec::new()));
    assert_eq!(result, Err(err));
}
