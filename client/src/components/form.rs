//! Labeled inputs bound to string signals.

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn TextInput(
    label_key: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <label class="form__label">
            {move || i18n.t(label_key)}
            <input
                type=kind
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextArea(label_key: &'static str, value: RwSignal<String>, #[prop(default = 5)] rows: u32) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <label class="form__label">
            {move || i18n.t(label_key)}
            <textarea
                rows=rows.to_string()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `<select>` over `options` of `(value, i18n key)`.
#[component]
pub fn SelectInput(
    label_key: &'static str,
    value: RwSignal<String>,
    options: Vec<(String, &'static str)>,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <label class="form__label">
            {move || i18n.t(label_key)}
            <select prop:value=move || value.get() on:change=move |ev| value.set(event_target_value(&ev))>
                {options
                    .into_iter()
                    .map(|(v, key)| {
                        let current = v.clone();
                        view! {
                            <option value=v selected=move || value.get() == current>
                                {move || i18n.t(key)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Free-text table filter.
#[component]
pub fn SearchBox(value: RwSignal<String>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <input
            type="search"
            class="toolbar__search"
            placeholder=move || i18n.t("common.search")
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Labeled checkbox bound to a bool signal.
#[component]
pub fn CheckBox(label_key: &'static str, value: RwSignal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <label class="form__check">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            {move || i18n.t(label_key)}
        </label>
    }
}
