//! Every shop order, with fulfilment status changes.

use leptos::prelude::*;

use super::{RowStatusSelect, TableFilter, TableToolbar};
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::{Order, OrderStatus};
use crate::pages::customer::orders::order_detail;
use crate::state::remote::{Remote, load};
use crate::state::toast::{notify_api_error, notify_success, use_toasts};
use crate::util::format;
use crate::util::table::{choice_options, filter_rows, parse_choice};
use crate::util::task::spawn_browser;

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let orders = RwSignal::new(Remote::<Vec<Order>>::default());
    let filter = TableFilter::new();
    let expanded = RwSignal::new(None::<String>);
    load(orders, admin::all_orders());

    let rows = Memo::new(move |_| {
        let status = parse_choice(&OrderStatus::ALL, &filter.status.get(), OrderStatus::as_str);
        orders.with(|r| {
            filter_rows(
                r.data.as_deref().unwrap_or_default(),
                &filter.query.get(),
                status,
                |o: &Order| vec![o.id.as_str(), o.customer_name.as_deref().unwrap_or_default(), o.shipping.city.as_str()],
                |o: &Order| o.status,
            )
        })
    });

    let set_status = move |id: String, status: OrderStatus| {
        spawn_browser(async move {
            match admin::set_order_status(&id, status).await {
                Ok(updated) => {
                    orders.update(|r| r.upsert(updated, |o| o.id == id));
                    notify_success(toasts, i18n, "common.saved");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    };

    view! {
        <h2>{move || i18n.t("admin.orders")}</h2>
        <TableToolbar
            filter=filter
            status_options=choice_options(&OrderStatus::ALL, OrderStatus::as_str, OrderStatus::label_key)
            rows=Signal::derive(move || rows.with(Vec::len))
        >
            {move || {
                let state = orders.get();
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
                                <th>"#"</th>
                                <th>{move || i18n.t("common.customer")}</th>
                                <th>{move || i18n.t("common.date")}</th>
                                <th>{move || i18n.t("cart.total")}</th>
                                <th>{move || i18n.t("common.status")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|order| {
                                    let status_id = order.id.clone();
                                    let toggle_id = order.id.clone();
                                    let open_id = order.id.clone();
                                    let is_open = move || expanded.with(|e| e.as_deref() == Some(open_id.as_str()));
                                    let is_open_label = is_open.clone();
                                    let detail = order.clone();
                                    view! {
                                        <tr>
                                            <td>{order.id}</td>
                                            <td>{order.customer_name.unwrap_or_default()}</td>
                                            <td>{format::date_or_dash(order.created_at.as_deref())}</td>
                                            <td>{format::money(order.total_cents)}</td>
                                            <td>
                                                <RowStatusSelect
                                                    all=&OrderStatus::ALL
                                                    current=order.status
                                                    name=OrderStatus::as_str
                                                    label=OrderStatus::label_key
                                                    on_change=Callback::new(move |next| set_status(status_id.clone(), next))
                                                />
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| {
                                                        let id = toggle_id.clone();
                                                        expanded.update(|e| *e = if e.as_deref() == Some(id.as_str()) { None } else { Some(id) });
                                                    }
                                                >
                                                    {move || i18n.t(if is_open_label() { "common.hide" } else { "common.details" })}
                                                </button>
                                            </td>
                                        </tr>
                                        <Show when=is_open>
                                            <tr class="table__detail">
                                                <td colspan="6">{order_detail(i18n, detail.clone())}</td>
                                            </tr>
                                        </Show>
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
