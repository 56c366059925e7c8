//! Small shared helpers with no domain state of their own.

pub mod auth;
pub mod dark_mode;
pub mod format;
