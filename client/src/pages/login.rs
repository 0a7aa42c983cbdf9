//! Sign-in and registration pages.
//!
//! Both sit behind a guest-only guard: once `AuthState` holds a user the
//! guard navigates to `?next=` (when safe) or the account's home, so these
//! pages only store the session and never navigate themselves.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::form::TextInput;
use crate::components::page_hero::PageHero;
use crate::i18n::use_i18n;
use crate::net::api::ApiError;
use crate::state::auth::{AuthState, complete_sign_in};
use crate::state::toast::{ToastKind, error_text, notify, use_toasts};
use crate::util::task::spawn_browser;
use crate::util::validate::{self, RegisterInput};

/// Message key for a failed sign-in. A 401 here means bad credentials, not
/// an expired session.
#[must_use]
pub fn login_error_key(err: &ApiError) -> Option<&'static str> {
    match err {
        ApiError::Unauthorized | ApiError::NotFound => Some("auth.invalid_credentials"),
        ApiError::Forbidden => Some("auth.account_disabled"),
        _ => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate::login(&email.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match crate::net::auth::login(&email_value, &password_value).await {
                Ok(resp) => complete_sign_in(auth, resp),
                Err(err) => {
                    let text = match login_error_key(&err) {
                        Some(key) => i18n.t_untracked(key).to_owned(),
                        None => error_text(&err, |key| i18n.t_untracked(key)),
                    };
                    notify(toasts, ToastKind::Error, text);
                    password.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <PageHero title_key="auth.login_title"/>
        <section class="section auth-card">
            <form class="form" on:submit=on_submit>
                <TextInput label_key="form.email" value=email kind="email" required=true/>
                <TextInput label_key="form.password" value=password kind="password" required=true/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || i18n.t("auth.login")}
                </button>
            </form>
            <p>
                {move || i18n.t("auth.no_account")}
                " "
                <A href="/register">{move || i18n.t("nav.register")}</A>
            </p>
        </section>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = RegisterInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        let request = match validate::register(&input) {
            Ok(request) => request,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match crate::net::auth::register(&request).await {
                Ok(resp) => {
                    complete_sign_in(auth, resp);
                    notify(toasts, ToastKind::Success, i18n.t_untracked("auth.welcome"));
                }
                Err(err) => notify(toasts, ToastKind::Error, error_text(&err, |key| i18n.t_untracked(key))),
            }
            busy.set(false);
        });
    };

    view! {
        <PageHero title_key="auth.register_title"/>
        <section class="section auth-card">
            <form class="form" on:submit=on_submit>
                <TextInput label_key="form.name" value=name required=true/>
                <TextInput label_key="form.email" value=email kind="email" required=true/>
                <TextInput label_key="form.phone" value=phone kind="tel"/>
                <TextInput label_key="form.password" value=password kind="password" required=true/>
                <TextInput label_key="form.confirm_password" value=confirm kind="password" required=true/>
                <p class="form__hint">{move || i18n.t("auth.password_hint")}</p>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || i18n.t("auth.register")}
                </button>
            </form>
            <p>
                {move || i18n.t("auth.have_account")}
                " "
                <A href="/login">{move || i18n.t("nav.login")}</A>
            </p>
        </section>
    }
}
