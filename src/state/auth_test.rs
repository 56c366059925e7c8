use super::*;

#[test]
fn default_auth_state_is_anonymous() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn setting_a_user_authenticates() {
    let state = AuthState {
        user: Some(AdminUser { username: "admin".to_owned(), is_admin: true }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
