//! Listing cards for services, products and blog posts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::use_i18n;
use crate::net::types::{BlogPost, Product, ServiceOffering};
use crate::util::format;

#[component]
pub fn ServiceCard(service: ServiceOffering) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <article class="card service-card" id=service.slug.clone()>
            {service.image_url.map(|src| view! { <img class="card__image" src=src alt="" loading="lazy"/> })}
            <div class="card__body">
                <h3>{service.title}</h3>
                <p>{service.summary}</p>
                <A href="/contact" attr:class="card__link">
                    {move || i18n.t("services.cta")}
                </A>
            </div>
        </article>
    }
}

/// Shop tile. `on_add` receives the product when "add to cart" is clicked.
#[component]
pub fn ProductCard(product: Product, on_add: Callback<Product>) -> impl IntoView {
    let i18n = use_i18n();
    let href = format!("/shop/{}", product.id);
    let in_stock = product.stock > 0;
    let price = format::money(product.price_cents);
    let image = product.image_url.clone();
    let name = product.name.clone();
    let category = product.category.clone();
    view! {
        <article class="card product-card">
            <A href=href.clone() attr:class="product-card__media">
                {image.map(|src| view! { <img class="card__image" src=src alt="" loading="lazy"/> })}
            </A>
            <div class="card__body">
                <span class="product-card__category">{category}</span>
                <h3>
                    <A href=href>{name}</A>
                </h3>
                <p class="product-card__price">{price}</p>
                <button
                    class="btn btn--primary"
                    disabled=!in_stock
                    on:click=move |_| on_add.run(product.clone())
                >
                    {move || i18n.t(if in_stock { "shop.add_to_cart" } else { "shop.out_of_stock" })}
                </button>
            </div>
        </article>
    }
}

#[component]
pub fn PostCard(post: BlogPost) -> impl IntoView {
    let i18n = use_i18n();
    let href = format!("/blog/{}", post.slug);
    let published = format::date_or_dash(post.published_at.as_deref());
    view! {
        <article class="card post-card">
            {post.cover_url.map(|src| view! { <img class="card__image" src=src alt="" loading="lazy"/> })}
            <div class="card__body">
                <p class="post-card__meta">
                    {published}
                    {post.author.map(|a| format!(" · {a}"))}
                </p>
                <h3>
                    <A href=href.clone()>{post.title}</A>
                </h3>
                <p>{post.excerpt}</p>
                <A href=href attr:class="card__link">
                    {move || i18n.t("blog.read_more")}
                </A>
            </div>
        </article>
    }
}
