//! Modal yes/no confirmation for destructive actions.

use leptos::prelude::*;

use crate::i18n::use_i18n;

/// Shown while `open` is true. Confirm runs `on_confirm` and closes.
#[component]
pub fn ConfirmDialog(open: RwSignal<bool>, message_key: &'static str, on_confirm: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div class="dialog" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                    <p>{move || i18n.t(message_key)}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| open.set(false)>
                            {move || i18n.t("common.cancel")}
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            {move || i18n.t("common.confirm")}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
