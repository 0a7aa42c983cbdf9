//! Product catalog and product detail.
//!
//! Filtering is server-side: category and search go out as query
//! parameters on every change. The category list is collected from
//! unfiltered results so the picker keeps every option while a filter is
//! active.

#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::cards::ProductCard;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::page_hero::PageHero;
use crate::i18n::{I18n, use_i18n};
use crate::net::catalog;
use crate::net::types::{Product, ProductFilter};
use crate::state::cart::{AddOutcome, CartState};
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, ToastState, notify, use_toasts};
use crate::util::format;

/// Merge categories from `products` into `known`, keeping it sorted and unique.
pub fn merge_categories(known: &mut Vec<String>, products: &[Product]) {
    for product in products {
        let category = product.category.trim();
        if !category.is_empty() && !known.iter().any(|c| c == category) {
            known.push(category.to_owned());
        }
    }
    known.sort();
}

/// i18n key and toast kind for an add-to-cart outcome.
#[must_use]
pub fn add_feedback(outcome: AddOutcome) -> (ToastKind, &'static str) {
    match outcome {
        AddOutcome::Added => (ToastKind::Success, "cart.added"),
        AddOutcome::Capped => (ToastKind::Info, "cart.capped"),
        AddOutcome::OutOfStock => (ToastKind::Error, "shop.out_of_stock"),
    }
}

/// Add to the cart context and toast the outcome.
pub(crate) fn add_to_cart(
    cart: RwSignal<CartState>,
    toasts: RwSignal<ToastState>,
    i18n: I18n,
    product: &Product,
    quantity: u32,
) {
    let mut outcome = AddOutcome::OutOfStock;
    cart.update(|c| outcome = c.add(product, quantity));
    let (kind, key) = add_feedback(outcome);
    notify(toasts, kind, i18n.t_untracked(key));
}

#[component]
pub fn ShopPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let cart = expect_context::<RwSignal<CartState>>();
    let products = RwSignal::new(Remote::<Vec<Product>>::default());
    let known_categories = RwSignal::new(Vec::<String>::new());
    let category = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    Effect::new(move || {
        let filter = ProductFilter {
            category: Some(category.get()).filter(|c| !c.is_empty()),
            search: Some(search.get()).filter(|s| !s.trim().is_empty()),
        };
        load(products, async move { catalog::list_products(&filter).await });
    });

    // Learn categories only from unfiltered listings.
    Effect::new(move || {
        let state = products.get();
        if category.get_untracked().is_empty() && search.get_untracked().trim().is_empty() {
            if let Some(items) = state.data.as_deref() {
                known_categories.update(|known| merge_categories(known, items));
            }
        }
    });

    let on_add = Callback::new(move |product: Product| add_to_cart(cart, toasts, i18n, &product, 1));

    view! {
        <PageHero title_key="shop.title" subtitle_key="shop.subtitle"/>
        <section class="section">
            <div class="toolbar">
                <input
                    type="search"
                    class="toolbar__search"
                    placeholder=move || i18n.t("shop.search")
                    prop:value=move || search.get()
                    on:change=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">{move || i18n.t("shop.all_categories")}</option>
                    {move || {
                        known_categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                let value = c.clone();
                                view! { <option value=value>{c}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            {move || {
                let state = products.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let items: Vec<Product> = state.data.unwrap_or_default().into_iter().filter(|p| p.active).collect();
                if items.is_empty() {
                    return view! { <EmptyState message_key="shop.no_results"/> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {items
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product on_add=on_add/> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let cart = expect_context::<RwSignal<CartState>>();
    let params = use_params_map();
    let product = RwSignal::new(Remote::<Product>::default());
    let quantity = RwSignal::new(1_u32);

    Effect::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        load(product, async move { catalog::fetch_product(&id).await });
    });

    view! {
        <section class="section product-detail">
            {move || {
                let state = product.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let Some(item) = state.data else {
                    return view! { <EmptyState/> }.into_any();
                };
                let in_stock = item.stock > 0;
                let stock = item.stock;
                let for_cart = item.clone();
                view! {
                    <Title text=item.name.clone()/>
                    <div class="product-detail__media">
                        {item.image_url.map(|src| view! { <img src=src alt=""/> })}
                    </div>
                    <div class="product-detail__info">
                        <span class="product-card__category">{item.category}</span>
                        <h1>{item.name}</h1>
                        <p class="product-card__price">{format::money(item.price_cents)}</p>
                        <p>{item.description}</p>
                        <p class="product-detail__stock">
                            {move || {
                                if in_stock {
                                    format!("{} {stock}", i18n.t("shop.in_stock"))
                                } else {
                                    i18n.t("shop.out_of_stock").to_owned()
                                }
                            }}
                        </p>
                        <div class="product-detail__buy">
                            <input
                                type="number"
                                min="1"
                                max=stock.to_string()
                                prop:value=move || quantity.get().to_string()
                                on:input=move |ev| {
                                    let qty = event_target_value(&ev).parse::<u32>().unwrap_or(1).clamp(1, stock.max(1));
                                    quantity.set(qty);
                                }
                            />
                            <button
                                class="btn btn--primary"
                                disabled=!in_stock
                                on:click=move |_| add_to_cart(cart, toasts, i18n, &for_cart, quantity.get_untracked())
                            >
                                {move || i18n.t("shop.add_to_cart")}
                            </button>
                        </div>
                    </div>
                }
                    .into_any()
            }}
            <A href="/shop" attr:class="card__link">
                {move || i18n.t("shop.back")}
            </A>
        </section>
    }
}
