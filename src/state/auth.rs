//! Auth-session state for the current admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the header read this to coordinate login redirects
//! and identity display. The session itself lives in the browser cookie
//! store; this is only the client's view of who is signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AdminUser;

/// Current admin plus whether the `/auth/me` bootstrap is still running.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AdminUser>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
