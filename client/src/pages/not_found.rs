//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_hero::PageHero;
use crate::i18n::use_i18n;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(axum::http::StatusCode::NOT_FOUND);
    }
    view! {
        <PageHero title_key="not_found.title" subtitle_key="not_found.subtitle"/>
        <section class="section">
            <A href="/" attr:class="btn btn--primary">
                {move || i18n.t("not_found.home")}
            </A>
        </section>
    }
}
