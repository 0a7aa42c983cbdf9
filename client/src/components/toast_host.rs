//! Fixed-position stack of toast notifications.

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::state::toast::use_toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <div class=toast.kind.class() role="status">
                    <span class="toast__text">{toast.text.clone()}</span>
                    <button
                        class="toast__close"
                        aria-label=move || i18n.t("common.dismiss")
                        on:click=move |_| toasts.update(|t| t.dismiss(toast.id))
                    >
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
