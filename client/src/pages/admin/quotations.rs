//! Back-office quotation queue: price a request, move it through review.

use leptos::prelude::*;

use super::{RowStatusSelect, TableFilter, TableToolbar};
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::form::{TextArea, TextInput};
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::{Quotation, QuotationStatus};
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::format;
use crate::util::table::{choice_options, filter_rows, parse_choice};
use crate::util::task::spawn_browser;
use crate::util::validate;

#[component]
pub fn AdminQuotationsPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let quotations = RwSignal::new(Remote::<Vec<Quotation>>::default());
    let filter = TableFilter::new();
    let quoting = RwSignal::new(None::<String>);
    let price = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    load(quotations, admin::all_quotations());

    let rows = Memo::new(move |_| {
        let status = parse_choice(&QuotationStatus::ALL, &filter.status.get(), QuotationStatus::as_str);
        quotations.with(|r| {
            filter_rows(
                r.data.as_deref().unwrap_or_default(),
                &filter.query.get(),
                status,
                |q: &Quotation| vec![q.title.as_str(), q.customer_name.as_deref().unwrap_or_default()],
                |q: &Quotation| q.status,
            )
        })
    });

    let replace = move |updated: Quotation| {
        let id = updated.id.clone();
        quotations.update(|r| r.upsert(updated, |q| q.id == id));
    };

    let open_quote = move |q: &Quotation| {
        price.set(q.price_cents.map(format::decimal).unwrap_or_default());
        notes.set(q.admin_notes.clone().unwrap_or_default());
        quoting.set(Some(q.id.clone()));
    };

    let on_quote = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = quoting.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        let cents = match validate::price(&price.get_untracked()) {
            Ok(cents) => cents,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        let notes = validate::optional(&notes.get_untracked());
        busy.set(true);
        spawn_browser(async move {
            match admin::quote(&id, cents, notes).await {
                Ok(updated) => {
                    replace(updated);
                    quoting.set(None);
                    notify_success(toasts, i18n, "quotations.quote_sent");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            busy.set(false);
        });
    };

    let set_status = move |id: String, status: QuotationStatus| {
        spawn_browser(async move {
            match admin::set_quotation_status(&id, status).await {
                Ok(updated) => {
                    replace(updated);
                    notify_success(toasts, i18n, "common.saved");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    };

    view! {
        <h2>{move || i18n.t("admin.quotations")}</h2>
        <Show when=move || quoting.with(Option::is_some)>
            <form class="form panel" on:submit=on_quote>
                <h3>{move || i18n.t("quotations.send_quote")}</h3>
                <TextInput label_key="quotations.price" value=price required=true/>
                <TextArea label_key="form.notes" value=notes rows=3/>
                <div class="form__actions">
                    <button type="button" class="btn" on:click=move |_| quoting.set(None)>
                        {move || i18n.t("common.cancel")}
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || i18n.t("quotations.send_quote")}
                    </button>
                </div>
            </form>
        </Show>
        <TableToolbar
            filter=filter
            status_options=choice_options(&QuotationStatus::ALL, QuotationStatus::as_str, QuotationStatus::label_key)
            rows=Signal::derive(move || rows.with(Vec::len))
        >
            {move || {
                let state = quotations.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let visible = filter.page_of(&rows.get());
                if visible.is_empty() {
                    return view! { <EmptyState/> }.into_any();
                }
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("form.title")}</th>
                                <th>{move || i18n.t("common.customer")}</th>
                                <th>{move || i18n.t("quotations.attachments")}</th>
                                <th>{move || i18n.t("quotations.price")}</th>
                                <th>{move || i18n.t("common.date")}</th>
                                <th>{move || i18n.t("common.status")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|q| {
                                    let status_id = q.id.clone();
                                    let editing = q.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <strong>{q.title}</strong>
                                                <p class="table__sub">{q.description}</p>
                                            </td>
                                            <td>{q.customer_name.unwrap_or_default()}</td>
                                            <td>
                                                {q
                                                    .attachments
                                                    .into_iter()
                                                    .map(|a| {
                                                        view! {
                                                            <a href=a.url target="_blank" rel="noopener">
                                                                {a.name}
                                                            </a>
                                                            " "
                                                        }
                                                    })
                                                    .collect_view()}
                                            </td>
                                            <td>{q.price_cents.map(format::money).unwrap_or_else(|| "—".to_owned())}</td>
                                            <td>{format::date_or_dash(q.created_at.as_deref())}</td>
                                            <td>
                                                <RowStatusSelect
                                                    all=&QuotationStatus::ALL
                                                    current=q.status
                                                    name=QuotationStatus::as_str
                                                    label=QuotationStatus::label_key
                                                    on_change=Callback::new(move |next| set_status(status_id.clone(), next))
                                                />
                                            </td>
                                            <td>
                                                <button class="btn btn--ghost" on:click=move |_| open_quote(&editing)>
                                                    {move || i18n.t("quotations.send_quote")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </TableToolbar>
    }
}
