//! Checkout: shipping details and order placement.
//!
//! The order carries a client reference generated once per visit, so a
//! resubmitted form (double click, flaky network) can be deduplicated by the
//! backend. A successful order empties the cart and opens the order list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::cart::totals_view;
use crate::components::form::{TextArea, TextInput};
use crate::components::page_hero::PageHero;
use crate::i18n::use_i18n;
use crate::net::customer;
use crate::net::types::{NewOrder, ShippingAddress};
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::task::spawn_browser;
use crate::util::{format, validate};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let cart = expect_context::<RwSignal<CartState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let client_ref = uuid::Uuid::new_v4().to_string();
    let user = auth.get_untracked().user;
    let full_name = RwSignal::new(user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let phone = RwSignal::new(user.and_then(|u| u.phone).unwrap_or_default());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || cart.with_untracked(CartState::is_empty) {
            return;
        }
        let raw = ShippingAddress {
            full_name: full_name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            city: city.get_untracked(),
            postal_code: postal_code.get_untracked(),
            country: country.get_untracked(),
        };
        let shipping = match validate::shipping(&raw) {
            Ok(shipping) => shipping,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        let order = NewOrder {
            client_ref: client_ref.clone(),
            items: cart.with_untracked(CartState::order_lines),
            shipping,
            notes: validate::optional(&notes.get_untracked()),
        };
        busy.set(true);
        let navigate = navigate.clone();
        spawn_browser(async move {
            match customer::place_order(&order).await {
                Ok(placed) => {
                    cart.update(CartState::clear);
                    notify_success(toasts, i18n, "checkout.placed");
                    log_order(&placed.id);
                    navigate("/dashboard/orders", NavigateOptions::default());
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            busy.set(false);
        });
    };

    view! {
        <PageHero title_key="checkout.title"/>
        <section class="section section--split">
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
                <form class="form" on:submit=on_submit.clone()>
                    <h2>{move || i18n.t("checkout.shipping")}</h2>
                    <TextInput label_key="form.full_name" value=full_name required=true/>
                    <TextInput label_key="form.phone" value=phone kind="tel" required=true/>
                    <TextInput label_key="form.address" value=address required=true/>
                    <TextInput label_key="form.city" value=city required=true/>
                    <TextInput label_key="form.postal_code" value=postal_code required=true/>
                    <TextInput label_key="form.country" value=country required=true/>
                    <TextArea label_key="checkout.notes" value=notes rows=3/>
                    <p class="form__hint">{move || i18n.t("checkout.payment_note")}</p>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || i18n.t("checkout.place_order")}
                    </button>
                </form>
                <aside class="order-summary">
                    <h2>{move || i18n.t("checkout.summary")}</h2>
                    <ul>
                        {move || {
                            cart.get()
                                .lines
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <li>
                                            {format!("{} × {}", line.quantity, line.name)}
                                            <span>{format::money(line.line_total_cents())}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    {move || totals_view(i18n, cart.with(CartState::totals))}
                </aside>
            </Show>
        </section>
    }
}

fn log_order(id: &str) {
    #[cfg(feature = "hydrate")]
    log::info!("order {id} placed");
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
