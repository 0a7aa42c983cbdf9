//! Title banner at the top of public pages.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::i18n::use_i18n;

/// Banner with a translated title and optional subtitle. Also sets the
/// document title.
#[component]
pub fn PageHero(
    title_key: &'static str,
    #[prop(optional)] subtitle_key: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <Title text=move || i18n.t(title_key)/>
        <section class="page-hero">
            <h1>{move || i18n.t(title_key)}</h1>
            {subtitle_key.map(|key| view! { <p class="page-hero__subtitle">{move || i18n.t(key)}</p> })}
            {children.map(|c| c())}
        </section>
    }
}
