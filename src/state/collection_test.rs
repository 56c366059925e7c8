use super::*;

fn ready_with(items: &[&str]) -> CollectionState<String> {
    let mut state = CollectionState::default();
    state.apply(CollectionAction::FetchStarted);
    state.apply(CollectionAction::FetchSucceeded(
        items.iter().map(|s| (*s).to_owned()).collect(),
    ));
    state
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = CollectionState::<String>::default();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.items.is_empty());
    assert_eq!(state.error, None);
}

#[test]
fn fetch_cycle_reaches_ready_with_items() {
    let state = ready_with(&["wheat", "maize"]);
    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.items, vec!["wheat".to_owned(), "maize".to_owned()]);
    assert!(!state.is_loading());
}

#[test]
fn fetch_started_enters_loading_and_clears_error() {
    let mut state = ready_with(&["wheat"]);
    state.error = Some("stale".to_owned());
    state.apply(CollectionAction::FetchStarted);
    assert_eq!(state.phase, Phase::Loading);
    assert!(state.is_loading());
    assert_eq!(state.error, None);
}

#[test]
fn fetch_failure_empties_the_collection() {
    let mut state = ready_with(&["wheat"]);
    state.apply(CollectionAction::FetchStarted);
    state.apply(CollectionAction::FetchFailed("network error".to_owned()));
    assert_eq!(state.phase, Phase::Failed);
    assert!(state.items.is_empty());
    assert_eq!(state.error, Some("network error".to_owned()));
}

#[test]
fn refetch_replaces_items_wholesale() {
    let mut state = ready_with(&["wheat", "maize"]);
    state.apply(CollectionAction::FetchStarted);
    state.apply(CollectionAction::FetchSucceeded(vec!["maize".to_owned()]));
    assert_eq!(state.items, vec!["maize".to_owned()]);
}

#[test]
fn identical_refetch_yields_identical_state() {
    let first = ready_with(&["wheat", "maize"]);
    let mut second = first.clone();
    second.apply(CollectionAction::FetchStarted);
    second.apply(CollectionAction::FetchSucceeded(first.items.clone()));
    assert_eq!(first, second);
}

#[test]
fn mutation_keeps_previous_items_while_loading() {
    let mut state = ready_with(&["wheat"]);
    state.apply(CollectionAction::MutationStarted);
    assert_eq!(state.phase, Phase::Loading);
    assert_eq!(state.items, vec!["wheat".to_owned()]);
}

#[test]
fn failed_mutation_returns_to_ready_with_previous_items() {
    let mut state = ready_with(&["wheat"]);
    state.apply(CollectionAction::MutationStarted);
    state.apply(CollectionAction::MutationFailed("authentication required (status 403)".to_owned()));
    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.items, vec!["wheat".to_owned()]);
    assert!(state.error.is_some());
}

#[test]
fn successful_mutation_leaves_items_for_the_refetch() {
    let mut state = ready_with(&["wheat"]);
    state.apply(CollectionAction::MutationStarted);
    state.apply(CollectionAction::MutationSucceeded);
    // Still the old items; the follow-up FetchSucceeded replaces them.
    assert_eq!(state.items, vec!["wheat".to_owned()]);
    state.apply(CollectionAction::FetchSucceeded(vec![
        "wheat".to_owned(),
        "barley".to_owned(),
    ]));
    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.items.len(), 2);
}
