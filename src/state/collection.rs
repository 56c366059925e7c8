//! Generic fetch/render/act state machine shared by every CRUD view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tips, diseases, news, and history all follow the same cycle: mount
//! fetches the list, a mutation re-enters Loading and then re-runs the
//! list fetch, and the in-memory collection is replaced wholesale after
//! every successful fetch (re-fetch-on-write). A failed mutation returns
//! to Ready with the previous data intact; a failed fetch leaves the
//! collection empty.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

/// Lifecycle phase of a collection view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Events dispatched by a view as its gateway calls progress.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectionAction<T> {
    FetchStarted,
    FetchSucceeded(Vec<T>),
    FetchFailed(String),
    MutationStarted,
    MutationSucceeded,
    MutationFailed(String),
}

/// The latest fetched collection plus where the view is in its cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState<T> {
    pub phase: Phase,
    pub items: Vec<T>,
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self { phase: Phase::Idle, items: Vec::new(), error: None }
    }
}

impl<T> CollectionState<T> {
    /// True while a fetch or mutation is outstanding; the triggering
    /// controls stay disabled so no two mutating calls overlap.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Reduce one action into the next state.
    pub fn apply(&mut self, action: CollectionAction<T>) {
        match action {
            CollectionAction::FetchStarted | CollectionAction::MutationStarted => {
                self.phase = Phase::Loading;
                self.error = None;
            }
            CollectionAction::FetchSucceeded(items) => {
                self.phase = Phase::Ready;
                self.items = items;
            }
            CollectionAction::FetchFailed(message) => {
                self.phase = Phase::Failed;
                self.items = Vec::new();
                self.error = Some(message);
            }
            CollectionAction::MutationSucceeded => {
                // The caller re-runs the list fetch; nothing to patch here.
                self.error = None;
            }
            CollectionAction::MutationFailed(message) => {
                self.phase = Phase::Ready;
                self.error = Some(message);
            }
        }
    }
}
