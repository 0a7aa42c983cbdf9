//! Landing page: hero, featured services and calls to action.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cards::ServiceCard;
use crate::components::feedback::remote_placeholder;
use crate::components::page_hero::PageHero;
use crate::i18n::use_i18n;
use crate::net::catalog;
use crate::state::remote::{Remote, load};

/// Services shown on the landing page.
const FEATURED_SERVICES: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();
    let services = RwSignal::new(Remote::default());
    load(services, catalog::list_services());

    view! {
        <PageHero title_key="home.title" subtitle_key="home.subtitle">
            <div class="page-hero__actions">
                <A href="/dashboard/quotations" attr:class="btn btn--primary">
                    {move || i18n.t("home.cta_quote")}
                </A>
                <A href="/shop" attr:class="btn">
                    {move || i18n.t("home.cta_shop")}
                </A>
            </div>
        </PageHero>
        <section class="section">
            <h2>{move || i18n.t("home.featured")}</h2>
            {move || {
                let state = services.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let featured = state.data.unwrap_or_default().into_iter().take(FEATURED_SERVICES);
                view! {
                    <div class="card-grid">
                        {featured.map(|service| view! { <ServiceCard service=service/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
            <A href="/services" attr:class="card__link">
                {move || i18n.t("home.all_services")}
            </A>
        </section>
        <section class="section section--band">
            <h2>{move || i18n.t("home.why_title")}</h2>
            <ul class="feature-list">
                <li>{move || i18n.t("home.why_precision")}</li>
                <li>{move || i18n.t("home.why_materials")}</li>
                <li>{move || i18n.t("home.why_turnaround")}</li>
            </ul>
        </section>
    }
}
