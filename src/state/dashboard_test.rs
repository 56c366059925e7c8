use super::*;

const STATS: DashboardStats = DashboardStats { total_tips: 3, total_diseases: 5, total_news: 2 };

#[test]
fn default_dashboard_has_no_stats() {
    let state = DashboardState::default();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.stats, None);
}

#[test]
fn successful_join_stores_all_three_counts() {
    let mut state = DashboardState::default();
    state.apply(DashboardAction::FetchStarted);
    assert!(state.is_loading());
    state.apply(DashboardAction::FetchSucceeded(STATS));
    assert_eq!(state.phase, Phase::Ready);
    assert_eq!(state.stats, Some(STATS));
}

#[test]
fn failed_join_clears_stats_rather_than_showing_zeroes() {
    let mut state = DashboardState::default();
    state.apply(DashboardAction::FetchStarted);
    state.apply(DashboardAction::FetchSucceeded(STATS));
    state.apply(DashboardAction::FetchStarted);
    state.apply(DashboardAction::FetchFailed("request failed with status 500".to_owned()));
    assert_eq!(state.phase, Phase::Failed);
    assert_eq!(state.stats, None);
    assert!(state.error.is_some());
}
