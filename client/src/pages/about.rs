//! Company background.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_hero::PageHero;
use crate::i18n::use_i18n;

const VALUES: &[(&str, &str)] = &[
    ("about.value_quality", "about.value_quality_text"),
    ("about.value_safety", "about.value_safety_text"),
    ("about.value_service", "about.value_service_text"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <PageHero title_key="about.title" subtitle_key="about.subtitle"/>
        <section class="section prose">
            <p>{move || i18n.t("about.story")}</p>
        </section>
        <section class="section">
            <div class="card-grid">
                {VALUES
                    .iter()
                    .map(|&(title, text)| {
                        view! {
                            <article class="card">
                                <div class="card__body">
                                    <h3>{move || i18n.t(title)}</h3>
                                    <p>{move || i18n.t(text)}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <A href="/contact" attr:class="btn btn--primary">
                {move || i18n.t("about.cta")}
            </A>
        </section>
    }
}
