//! Dashboard stats state: joined counts of the three collections.
//!
//! DESIGN
//! ======
//! The three list calls are joined before any state update. Stats are
//! all-or-nothing: if one call fails the whole update is aborted and
//! `stats` stays `None`, which renders as a placeholder rather than a
//! false "0 records".

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::collection::Phase;

/// Record counts shown on the dashboard cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_tips: usize,
    pub total_diseases: usize,
    pub total_news: usize,
}

/// Events dispatched by the dashboard's joined fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    FetchStarted,
    FetchSucceeded(DashboardStats),
    FetchFailed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub phase: Phase,
    pub stats: Option<DashboardStats>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::FetchStarted => {
                self.phase = Phase::Loading;
                self.error = None;
            }
            DashboardAction::FetchSucceeded(stats) => {
                self.phase = Phase::Ready;
                self.stats = Some(stats);
            }
            DashboardAction::FetchFailed(message) => {
                self.phase = Phase::Failed;
                self.stats = None;
                self.error = Some(message);
            }
        }
    }
}
