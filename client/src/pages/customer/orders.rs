//! Customer order history with expandable line items.

use leptos::prelude::*;

use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::status_badge::StatusBadge;
use crate::i18n::{I18n, use_i18n};
use crate::net::customer;
use crate::net::types::Order;
use crate::state::remote::{Remote, load};
use crate::util::format;

/// Line items, totals and shipping address of one order.
pub(crate) fn order_detail(i18n: I18n, order: Order) -> impl IntoView {
    let shipping = order.shipping;
    view! {
        <div class="order-detail">
            <table class="table table--compact">
                <tbody>
                    {order
                        .items
                        .into_iter()
                        .map(|line| {
                            let total = format::money(line.line_total_cents());
                            view! {
                                <tr>
                                    <td>{line.name}</td>
                                    <td>{format!("{} × {}", line.quantity, format::money(line.unit_price_cents))}</td>
                                    <td>{total}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <dl class="totals">
                <dt>{move || i18n.t("cart.subtotal")}</dt>
                <dd>{format::money(order.subtotal_cents)}</dd>
                <dt>{move || i18n.t("cart.tax")}</dt>
                <dd>{format::money(order.tax_cents)}</dd>
                <dt>{move || i18n.t("cart.shipping")}</dt>
                <dd>{format::money(order.shipping_cents)}</dd>
                <dt class="totals__grand">{move || i18n.t("cart.total")}</dt>
                <dd class="totals__grand">{format::money(order.total_cents)}</dd>
            </dl>
            <address>
                {shipping.full_name}
                <br/>
                {shipping.address}
                <br/>
                {format!("{} {}, {}", shipping.postal_code, shipping.city, shipping.country)}
                <br/>
                {shipping.phone}
            </address>
        </div>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let i18n = use_i18n();
    let orders = RwSignal::new(Remote::<Vec<Order>>::default());
    let expanded = RwSignal::new(None::<String>);
    load(orders, customer::my_orders());

    view! {
        <section class="panel">
            <h2>{move || i18n.t("dash.orders")}</h2>
            {move || {
                let state = orders.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let items = state.data.unwrap_or_default();
                if items.is_empty() {
                    return view! { <EmptyState message_key="orders.none"/> }.into_any();
                }
                items
                    .into_iter()
                    .map(|order| {
                        let id = order.id.clone();
                        let toggle_id = id.clone();
                        let open_id = id.clone();
                        let detail = order.clone();
                        view! {
                            <article class="card order-card">
                                <button
                                    class="order-card__summary"
                                    on:click=move |_| {
                                        expanded
                                            .update(|e| {
                                                *e = if e.as_deref() == Some(toggle_id.as_str()) {
                                                    None
                                                } else {
                                                    Some(toggle_id.clone())
                                                };
                                            });
                                    }
                                >
                                    <span class="order-card__id">{format!("#{id}")}</span>
                                    <span>{format::date_or_dash(order.created_at.as_deref())}</span>
                                    <StatusBadge badge=order.status/>
                                    <strong>{format::money(order.total_cents)}</strong>
                                </button>
                                <Show when=move || expanded.get().as_deref() == Some(open_id.as_str())>
                                    {order_detail(i18n, detail.clone())}
                                </Show>
                            </article>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
