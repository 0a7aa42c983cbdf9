use super::*;
use crate::net::types::{Role, User};

fn signed_in(role: Role) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            phone: None,
            role,
            active: true,
            created_at: None,
        }),
        token: Some("tok".to_owned()),
        loading: false,
    }
}

fn signed_out() -> AuthState {
    AuthState { user: None, token: None, loading: false }
}

#[test]
fn pending_while_loading() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state, GuardRequirement::Authenticated, "/dashboard"), GuardOutcome::Pending);
    assert_eq!(evaluate(&state, GuardRequirement::Guest, "/login"), GuardOutcome::Pending);
}

#[test]
fn unauthenticated_redirects_to_login_with_next() {
    assert_eq!(
        evaluate(&signed_out(), GuardRequirement::Authenticated, "/dashboard/orders"),
        GuardOutcome::Redirect("/login?next=/dashboard/orders".to_owned())
    );
    assert_eq!(
        evaluate(&signed_out(), GuardRequirement::Admin, "/admin/users"),
        GuardOutcome::Redirect("/login?next=/admin/users".to_owned())
    );
}

#[test]
fn customer_allowed_on_dashboard() {
    assert_eq!(evaluate(&signed_in(Role::Customer), GuardRequirement::Authenticated, "/dashboard"), GuardOutcome::Allow);
}

#[test]
fn customer_kept_out_of_back_office() {
    assert_eq!(
        evaluate(&signed_in(Role::Customer), GuardRequirement::Staff, "/admin"),
        GuardOutcome::Redirect("/dashboard".to_owned())
    );
}

#[test]
fn employee_reaches_staff_but_not_admin_routes() {
    let state = signed_in(Role::Employee);
    assert_eq!(evaluate(&state, GuardRequirement::Staff, "/admin/tasks"), GuardOutcome::Allow);
    assert_eq!(evaluate(&state, GuardRequirement::Admin, "/admin/users"), GuardOutcome::Redirect("/admin".to_owned()));
}

#[test]
fn admin_reaches_everything() {
    let state = signed_in(Role::Admin);
    assert_eq!(evaluate(&state, GuardRequirement::Admin, "/admin/users"), GuardOutcome::Allow);
    assert_eq!(evaluate(&state, GuardRequirement::Staff, "/admin/orders"), GuardOutcome::Allow);
    assert_eq!(evaluate(&state, GuardRequirement::Authenticated, "/checkout"), GuardOutcome::Allow);
}

#[test]
fn guest_routes_send_signed_in_users_home() {
    assert_eq!(evaluate(&signed_out(), GuardRequirement::Guest, "/login"), GuardOutcome::Allow);
    assert_eq!(
        evaluate(&signed_in(Role::Customer), GuardRequirement::Guest, "/login"),
        GuardOutcome::Redirect("/dashboard".to_owned())
    );
    assert_eq!(
        evaluate(&signed_in(Role::Employee), GuardRequirement::Guest, "/register"),
        GuardOutcome::Redirect("/admin".to_owned())
    );
}

#[test]
fn sanitize_next_accepts_local_paths() {
    assert_eq!(sanitize_next(Some("/dashboard/orders"), "/dashboard"), "/dashboard/orders");
    assert_eq!(sanitize_next(Some(" /checkout "), "/dashboard"), "/checkout");
}

#[test]
fn sanitize_next_rejects_foreign_or_loop_targets() {
    for bad in ["//evil.example", "https://evil.example", "/\\evil", "dashboard", "/login?next=/x", "/register", ""] {
        assert_eq!(sanitize_next(Some(bad), "/dashboard"), "/dashboard", "accepted {bad:?}");
    }
    assert_eq!(sanitize_next(None, "/admin"), "/admin");
}

#[test]
fn after_login_prefers_safe_next() {
    let state = signed_in(Role::Customer);
    assert_eq!(after_login(&state, Some("/checkout")), "/checkout");
    assert_eq!(after_login(&state, Some("//evil.example")), "/dashboard");
    assert_eq!(after_login(&signed_in(Role::Admin), None), "/admin");
}
