//! Locale picker shown in every header.

use leptos::prelude::*;

use crate::i18n::{Locale, use_i18n};

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <select
            class="language-switcher"
            aria-label=move || i18n.t("ui.language")
            prop:value=move || i18n.locale.get().tag()
            on:change=move |ev| {
                if let Some(locale) = Locale::parse(&event_target_value(&ev)) {
                    i18n.set(locale);
                }
            }
        >
            {Locale::ALL
                .into_iter()
                .map(|locale| view! { <option value=locale.tag()>{locale.native_name()}</option> })
                .collect_view()}
        </select>
    }
}
