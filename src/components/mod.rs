//! Shared chrome and presentation components.

pub mod header;
pub mod notice;
pub mod sidebar;
pub mod stat_card;
