//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the site header and the dashboards to decide what
//! to render and where to redirect. The bearer token itself lives in
//! `localStorage` (see `net::api`); this state mirrors it for rendering.
//!
//! Starts in `loading` on both server and browser so SSR output matches the
//! first hydrated frame; `restore_session` resolves it after mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{AuthResponse, Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.role().is_some_and(Role::is_staff)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Display name for the header, if signed in.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// Record a successful login or registration.
    pub fn sign_in(&mut self, resp: AuthResponse) {
        self.token = Some(resp.token);
        self.user = Some(resp.user);
        self.loading = false;
    }

    /// Forget the session, handing back its token for the logout call.
    pub fn sign_out(&mut self) -> Option<String> {
        self.user = None;
        self.loading = false;
        self.token.take()
    }

    /// Finish the boot check with the user (or not) that the token resolved to.
    pub fn resolve(&mut self, token: Option<String>, user: Option<User>) {
        if user.is_some() {
            self.token = token;
        } else {
            self.token = None;
        }
        self.user = user;
        self.loading = false;
    }
}

/// Resolve the stored token into a user. Runs once after hydration.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let Some(token) = api::stored_token() else {
        auth.update(|a| a.resolve(None, None));
        return;
    };
    crate::util::task::spawn_browser(async move {
        match crate::net::auth::fetch_me().await {
            Ok(user) => auth.update(|a| a.resolve(Some(token), Some(user))),
            Err(_) => {
                api::clear_token();
                auth.update(|a| a.resolve(None, None));
            }
        }
    });
}

/// Store the token and mark the user signed in.
pub fn complete_sign_in(auth: RwSignal<AuthState>, resp: AuthResponse) {
    api::store_token(&resp.token);
    auth.update(|a| a.sign_in(resp));
}

/// Drop the session locally and tell the backend.
pub fn sign_out(auth: RwSignal<AuthState>) {
    let token = logout_token(auth.try_update(AuthState::sign_out).flatten(), api::stored_token());
    api::clear_token();
    crate::util::task::spawn_browser(crate::net::auth::logout(token));
}

/// Token to revoke: the one the session held, else whatever is still stored.
fn logout_token(session: Option<String>, stored: Option<String>) -> Option<String> {
    session.or(stored)
}
