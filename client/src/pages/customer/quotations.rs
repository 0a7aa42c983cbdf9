//! Customer quotations: request with drawings, answer quoted prices.
//!
//! Attachments are `web_sys::File` handles, so the picked list is a
//! local-storage signal and the upload runs on the browser task that owns
//! it. Progress from the XHR upload feeds the `FileField` bar.

use leptos::prelude::*;

use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::file_field::FileField;
use crate::components::form::{TextArea, TextInput};
use crate::components::status_badge::StatusBadge;
use crate::i18n::use_i18n;
use crate::net::customer;
use crate::net::types::Quotation;
use crate::net::upload::{self, PickedFile, UploadProgress};
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::format;
use crate::util::task::spawn_browser;
use crate::util::validate::{self, QuotationInput};

#[component]
pub fn QuotationsPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let quotations = RwSignal::new(Remote::<Vec<Quotation>>::default());
    load(quotations, customer::my_quotations());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let material = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());
    let files = RwSignal::new_local(Vec::<PickedFile>::new());
    let progress = RwSignal::new(None::<UploadProgress>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = QuotationInput {
            title: title.get_untracked(),
            description: description.get_untracked(),
            material: material.get_untracked(),
            quantity: quantity.get_untracked(),
            deadline: deadline.get_untracked(),
        };
        let draft = match validate::quotation(&input) {
            Ok(draft) => draft,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        let attachments = files.get_untracked();
        if let Err(rejection) = upload::check_files(&attachments, upload::DOCUMENT_EXTENSIONS) {
            notify(toasts, ToastKind::Error, i18n.t_untracked(rejection.key()));
            return;
        }
        busy.set(true);
        progress.set(Some(UploadProgress::default()));
        spawn_browser(async move {
            let on_progress = move |p: UploadProgress| progress.set(Some(p));
            match customer::request_quotation(draft, attachments, on_progress).await {
                Ok(created) => {
                    let id = created.id.clone();
                    quotations.update(|r| r.upsert(created, |q| q.id == id));
                    notify_success(toasts, i18n, "quotations.sent");
                    for field in [title, description, material, quantity, deadline] {
                        field.set(String::new());
                    }
                    files.set(Vec::new());
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            progress.set(None);
            busy.set(false);
        });
    };

    let respond = move |id: String, accept: bool| {
        spawn_browser(async move {
            match customer::respond_quotation(&id, accept).await {
                Ok(updated) => {
                    quotations.update(|r| r.upsert(updated, |q| q.id == id));
                    notify_success(toasts, i18n, if accept { "quotations.accepted" } else { "quotations.rejected" });
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    };

    view! {
        <section class="panel">
            <h2>{move || i18n.t("quotations.request_title")}</h2>
            <form class="form" on:submit=on_submit>
                <TextInput label_key="form.title" value=title required=true/>
                <TextArea label_key="form.description" value=description/>
                <TextInput label_key="quotations.material" value=material/>
                <TextInput label_key="quotations.quantity" value=quantity kind="number"/>
                <TextInput label_key="quotations.deadline" value=deadline kind="date"/>
                <FileField
                    label_key="quotations.attachments"
                    files=files
                    allowed=upload::DOCUMENT_EXTENSIONS
                    progress=progress
                    multiple=true
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || i18n.t("quotations.submit")}
                </button>
            </form>
        </section>
        <section class="panel">
            <h2>{move || i18n.t("dash.quotations")}</h2>
            {move || {
                let state = quotations.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let items = state.data.unwrap_or_default();
                if items.is_empty() {
                    return view! { <EmptyState message_key="quotations.none"/> }.into_any();
                }
                items
                    .into_iter()
                    .map(|q| {
                        let awaiting = q.status.awaits_customer();
                        let accept_id = q.id.clone();
                        let reject_id = q.id.clone();
                        view! {
                            <article class="card quotation-card">
                                <header class="quotation-card__header">
                                    <h3>{q.title}</h3>
                                    <StatusBadge badge=q.status/>
                                </header>
                                <p>{q.description}</p>
                                <ul class="attachment-list">
                                    {q
                                        .attachments
                                        .into_iter()
                                        .map(|a| {
                                            view! {
                                                <li>
                                                    <a href=a.url target="_blank" rel="noopener">
                                                        {a.name}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                {q
                                    .price_cents
                                    .map(|cents| {
                                        view! {
                                            <p class="quotation-card__price">
                                                {move || i18n.t("quotations.price")}
                                                ": "
                                                {format::money(cents)}
                                            </p>
                                        }
                                    })}
                                {q.admin_notes.map(|notes| view! { <p class="quotation-card__notes">{notes}</p> })}
                                <small>{format::date_or_dash(q.created_at.as_deref())}</small>
                                {awaiting
                                    .then(|| {
                                        view! {
                                            <div class="quotation-card__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| respond(accept_id.clone(), true)
                                                >
                                                    {move || i18n.t("quotations.accept")}
                                                </button>
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| respond(reject_id.clone(), false)
                                                >
                                                    {move || i18n.t("quotations.reject")}
                                                </button>
                                            </div>
                                        }
                                    })}
                            </article>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
