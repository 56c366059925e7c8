//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one resource collection's fetch/render/act cycle and
//! delegates chrome to `components`. All of them follow the same
//! Idle -> Loading -> Ready | Failed machine from `state::collection`.

pub mod dashboard;
pub mod diseases;
pub mod history;
pub mod login;
pub mod news;
pub mod tips;
