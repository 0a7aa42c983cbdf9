//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::guard::RequireAuth` and the guest-only auth pages apply these
//! rules so every protected route redirects the same way. The decision is a
//! pure function of `AuthState` for testability.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardRequirement {
    /// Any signed-in account.
    Authenticated,
    /// Employees and admins.
    Staff,
    /// Admins only.
    Admin,
    /// Only visitors who are not signed in (login, register).
    Guest,
}

/// What a guard should do right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving; render a placeholder.
    Pending,
    Allow,
    Redirect(String),
}

/// Landing page for a signed-in account.
#[must_use]
pub fn home_for(state: &AuthState) -> &'static str {
    if state.is_staff() { "/admin" } else { "/dashboard" }
}

/// Decide access to `path` under `requirement`.
#[must_use]
pub fn evaluate(state: &AuthState, requirement: GuardRequirement, path: &str) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    if requirement == GuardRequirement::Guest {
        return if state.is_authenticated() {
            GuardOutcome::Redirect(home_for(state).to_owned())
        } else {
            GuardOutcome::Allow
        };
    }
    if !state.is_authenticated() {
        return GuardOutcome::Redirect(crate::net::api::login_redirect_path(path));
    }
    let allowed = match requirement {
        GuardRequirement::Authenticated | GuardRequirement::Guest => true,
        GuardRequirement::Staff => state.is_staff(),
        GuardRequirement::Admin => state.is_admin(),
    };
    if allowed { GuardOutcome::Allow } else { GuardOutcome::Redirect(home_for(state).to_owned()) }
}

/// Accept a post-login `next` target only if it is a same-origin path.
#[must_use]
pub fn sanitize_next(next: Option<&str>, fallback: &str) -> String {
    match next.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.starts_with("/login")
                && !path.starts_with("/register") =>
        {
            path.to_owned()
        }
        _ => fallback.to_owned(),
    }
}

/// Where a guest-only page sends a user who is (now) signed in: the
/// requested `next` page when safe, else the account's home.
#[must_use]
pub fn after_login(state: &AuthState, next: Option<&str>) -> String {
    sanitize_next(next, home_for(state))
}
