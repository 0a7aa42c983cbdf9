use super::*;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Dana Smith".to_owned(),
        email: "dana@example.com".to_owned(),
        phone: None,
        role,
        active: true,
        created_at: None,
    }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn sign_in_stores_token_and_user() {
    let mut state = AuthState::default();
    state.sign_in(AuthResponse { token: "tok".into(), user: user(Role::Customer) });
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok"));
    assert_eq!(state.display_name(), Some("Dana Smith"));
}

#[test]
fn role_helpers_follow_user_role() {
    let mut state = AuthState::default();
    state.resolve(Some("t".into()), Some(user(Role::Employee)));
    assert!(state.is_staff());
    assert!(!state.is_admin());
    state.resolve(Some("t".into()), Some(user(Role::Admin)));
    assert!(state.is_staff());
    assert!(state.is_admin());
    state.resolve(Some("t".into()), Some(user(Role::Customer)));
    assert!(!state.is_staff());
}

#[test]
fn resolve_without_user_drops_token() {
    let mut state = AuthState::default();
    state.resolve(Some("stale".into()), None);
    assert!(!state.loading);
    assert_eq!(state.token, None);
    assert!(!state.is_authenticated());
}

#[test]
fn sign_out_clears_everything() {
    let mut state = AuthState::default();
    state.sign_in(AuthResponse { token: "tok".into(), user: user(Role::Admin) });
    let revoked = state.sign_out();
    assert_eq!(revoked.as_deref(), Some("tok"));
    assert_eq!(state, AuthState { user: None, token: None, loading: false });
}

#[test]
fn sign_out_without_session_has_nothing_to_revoke() {
    let mut state = AuthState::default();
    assert_eq!(state.sign_out(), None);
}

#[test]
fn logout_token_prefers_session_then_storage() {
    assert_eq!(logout_token(Some("live".into()), Some("disk".into())).as_deref(), Some("live"));
    assert_eq!(logout_token(None, Some("disk".into())).as_deref(), Some("disk"));
    assert_eq!(logout_token(None, None), None);
}
