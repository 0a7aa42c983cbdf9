//! Toast notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::i18n::I18n;
use crate::net::api::ApiError;

/// Toasts kept on screen at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;
/// Auto-dismiss delay in the browser.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, text: text.into() });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, text: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, text));
    crate::util::task::spawn_browser(async move {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
}

/// Translated success toast.
pub fn notify_success(toasts: RwSignal<ToastState>, i18n: I18n, key: &'static str) {
    notify(toasts, ToastKind::Success, i18n.t_untracked(key));
}

/// Error toast for a failed request. Session expiry is handled by the
/// redirect in `net::api`, so it gets no toast.
pub fn notify_api_error(toasts: RwSignal<ToastState>, i18n: I18n, err: &ApiError) {
    if *err == ApiError::Unauthorized {
        return;
    }
    let text = error_text(err, |key| i18n.t_untracked(key));
    notify(toasts, ToastKind::Error, text);
}

/// Message shown for `err`: backend validation text, else the translated key.
pub fn error_text(err: &ApiError, translate: impl Fn(&'static str) -> &'static str) -> String {
    err.toast_text().map_or_else(|| translate(err.toast_key()).to_owned(), str::to_owned)
}

/// Fetch the toast queue from context.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}
