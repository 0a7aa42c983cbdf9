//! Cart review page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_hero::PageHero;
use crate::i18n::{I18n, use_i18n};
use crate::state::cart::{CartState, Totals, parse_quantity};
use crate::util::format;

/// Subtotal, tax, shipping and total rows.
pub(crate) fn totals_view(i18n: I18n, totals: Totals) -> impl IntoView {
    let shipping = if totals.shipping_cents == 0 && totals.subtotal_cents > 0 {
        None
    } else {
        Some(format::money(totals.shipping_cents))
    };
    view! {
        <dl class="totals">
            <dt>{move || i18n.t("cart.subtotal")}</dt>
            <dd>{format::money(totals.subtotal_cents)}</dd>
            <dt>{move || i18n.t("cart.tax")}</dt>
            <dd>{format::money(totals.tax_cents)}</dd>
            <dt>{move || i18n.t("cart.shipping")}</dt>
            <dd>
                {match shipping {
                    Some(amount) => amount.into_any(),
                    None => view! { <span>{move || i18n.t("cart.free_shipping")}</span> }.into_any(),
                }}
            </dd>
            <dt class="totals__grand">{move || i18n.t("cart.total")}</dt>
            <dd class="totals__grand">{format::money(totals.total_cents)}</dd>
        </dl>
    }
}

/// Put the last good quantity back into an input the user garbled.
fn restore_quantity(ev: &leptos::ev::Event, quantity: u32) {
    #[cfg(feature = "hydrate")]
    event_target::<web_sys::HtmlInputElement>(ev).set_value(&quantity.to_string());
    #[cfg(not(feature = "hydrate"))]
    let _ = (ev, quantity);
}

#[component]
pub fn CartPage() -> impl IntoView {
    let i18n = use_i18n();
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <PageHero title_key="cart.title"/>
        <section class="section">
            <Show
                when=move || !cart.with(CartState::is_empty)
                fallback=move || {
                    view! {
                        <p class="empty-state">{move || i18n.t("cart.empty")}</p>
                        <A href="/shop" attr:class="btn btn--primary">
                            {move || i18n.t("cart.continue")}
                        </A>
                    }
                }
            >
                <table class="table cart-table">
                    <thead>
                        <tr>
                            <th>{move || i18n.t("cart.product")}</th>
                            <th>{move || i18n.t("cart.price")}</th>
                            <th>{move || i18n.t("cart.quantity")}</th>
                            <th>{move || i18n.t("cart.line_total")}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || cart.get().lines key=|line| (line.product_id.clone(), line.quantity) let:line>
                            {
                                let id = line.product_id.clone();
                                let remove_id = id.clone();
                                let href = format!("/shop/{id}");
                                let name = line.name.clone();
                                let unit_price = format::money(line.unit_price_cents);
                                let line_total = format::money(line.line_total_cents());
                                let max = line.stock.to_string();
                                let current = line.quantity;
                                view! {
                                    <tr>
                                        <td>
                                            <A href=href>{name}</A>
                                        </td>
                                        <td>{unit_price}</td>
                                        <td>
                                            <input
                                                type="number"
                                                min="0"
                                                max=max
                                                value=current.to_string()
                                                on:change=move |ev| {
                                                    match parse_quantity(&event_target_value(&ev)) {
                                                        Some(qty) => cart.update(|c| c.set_quantity(&id, qty)),
                                                        None => restore_quantity(&ev, current),
                                                    }
                                                }
                                            />
                                        </td>
                                        <td>{line_total}</td>
                                        <td>
                                            <button
                                                class="btn btn--ghost"
                                                on:click=move |_| cart.update(|c| c.remove(&remove_id))
                                            >
                                                {move || i18n.t("common.remove")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
                {move || totals_view(i18n, cart.with(CartState::totals))}
                <div class="cart-actions">
                    <button class="btn btn--ghost" on:click=move |_| cart.update(CartState::clear)>
                        {move || i18n.t("cart.clear")}
                    </button>
                    <A href="/shop" attr:class="btn">
                        {move || i18n.t("cart.continue")}
                    </A>
                    <A href="/checkout" attr:class="btn btn--primary">
                        {move || i18n.t("cart.checkout")}
                    </A>
                </div>
            </Show>
        </section>
    }
}
