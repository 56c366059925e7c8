//! Per-view state machines, independent of the rendering layer.
//!
//! DESIGN
//! ======
//! Each view reduces dispatched actions into its next state instead of
//! mutating ad-hoc flags, so the Idle/Loading/Ready/Failed cycle is the
//! same across every resource and can be tested without a browser.

pub mod auth;
pub mod collection;
pub mod dashboard;
pub mod ui;
