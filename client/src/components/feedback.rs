//! Loading, empty and error placeholders.

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::net::api::ApiError;
use crate::state::remote::Remote;
use crate::state::toast::error_text;

#[component]
pub fn Loading() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="loading" role="status">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span>{move || i18n.t("common.loading")}</span>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(default = "common.empty")] message_key: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! { <p class="empty-state">{move || i18n.t(message_key)}</p> }
}

/// Inline error with an optional retry action.
#[component]
pub fn ErrorNotice(error: ApiError, #[prop(default = None)] on_retry: Option<Callback<()>>) -> impl IntoView {
    let i18n = use_i18n();
    let text = move || error_text(&error, |key| i18n.t(key));
    view! {
        <div class="error-notice" role="alert">
            <p>{text}</p>
            {on_retry
                .map(|retry| {
                    view! {
                        <button class="btn" on:click=move |_| retry.run(())>
                            {move || i18n.t("common.retry")}
                        </button>
                    }
                })}
        </div>
    }
}

/// Spinner or error for a fetch with nothing to show yet; `None` once data
/// has arrived.
pub fn remote_placeholder<T>(state: &Remote<T>, on_retry: Option<Callback<()>>) -> Option<AnyView> {
    if state.data.is_some() {
        return None;
    }
    match &state.error {
        Some(error) => Some(view! { <ErrorNotice error=error.clone() on_retry=on_retry/> }.into_any()),
        None => Some(view! { <Loading/> }.into_any()),
    }
}
