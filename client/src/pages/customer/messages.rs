//! Message thread between the customer and the shop.

use leptos::prelude::*;

use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::i18n::use_i18n;
use crate::net::customer;
use crate::net::types::Message;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, notify_api_error, use_toasts};
use crate::util::task::spawn_browser;
use crate::util::{format, validate};

#[component]
pub fn MessagesPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let messages = RwSignal::new(Remote::<Vec<Message>>::default());
    let draft = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let reload = Callback::new(move |()| load(messages, customer::my_messages()));
    reload.run(());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match validate::required(&draft.get_untracked()) {
            Ok(body) => body,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match customer::send_message(&body).await {
                Ok(sent) => {
                    messages.update(|r| r.edit(|list| list.push(sent)));
                    draft.set(String::new());
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="panel messages">
            <header class="panel__header">
                <h2>{move || i18n.t("dash.messages")}</h2>
                <button class="btn btn--ghost" on:click=move |_| reload.run(())>
                    {move || i18n.t("common.refresh")}
                </button>
            </header>
            <div class="messages__thread">
                {move || {
                    let state = messages.get();
                    if let Some(placeholder) = remote_placeholder(&state, Some(reload)) {
                        return placeholder;
                    }
                    let items = state.data.unwrap_or_default();
                    if items.is_empty() {
                        return view! { <EmptyState message_key="messages.none"/> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|m| {
                            view! {
                                <div class="message" class:message--staff=m.from_staff>
                                    <p class="message__meta">
                                        <strong>{m.sender_name}</strong>
                                        " · "
                                        {format::date_time(m.created_at.as_deref().unwrap_or_default())}
                                    </p>
                                    <p class="message__body">{m.body}</p>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <form class="form messages__compose" on:submit=on_send>
                <textarea
                    rows="3"
                    placeholder=move || i18n.t("messages.placeholder")
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || i18n.t("messages.send")}
                </button>
            </form>
        </section>
    }
}
