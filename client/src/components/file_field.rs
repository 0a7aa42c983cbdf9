//! File input with picked-file list and upload progress bar.
//!
//! DESIGN
//! ======
//! Browser `File` handles are not `Send`, so the picked list lives in a
//! local-storage signal owned by the page. Limits are checked on pick;
//! a rejected batch leaves the previous selection untouched and raises a
//! toast naming the rule.

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::net::upload::{self, PickedFile, UploadProgress};
use crate::state::toast::use_toasts;

/// `accept` attribute for an extension list.
#[must_use]
pub fn accept_attr(allowed: &[&str]) -> String {
    allowed.iter().map(|ext| format!(".{ext}")).collect::<Vec<_>>().join(",")
}

#[component]
pub fn FileField(
    label_key: &'static str,
    files: RwSignal<Vec<PickedFile>, LocalStorage>,
    allowed: &'static [&'static str],
    progress: RwSignal<Option<UploadProgress>>,
    #[prop(optional)] multiple: bool,
) -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let picked = upload::picked_files(&ev);
            let batch = if multiple {
                let mut all = files.get_untracked();
                all.extend(picked);
                all
            } else {
                picked
            };
            match upload::check_files(&batch, allowed) {
                Ok(()) => files.set(batch),
                Err(rejection) => {
                    let text = format!("{}: {rejection}", i18n.t_untracked(rejection.key()));
                    crate::state::toast::notify(toasts, crate::state::toast::ToastKind::Error, text);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, toasts);
        }
    };

    let remove = move |idx: usize| {
        files.update(|list| {
            if idx < list.len() {
                list.remove(idx);
            }
        });
    };

    view! {
        <div class="file-field">
            <label class="form__label">
                {move || i18n.t(label_key)}
                <input type="file" accept=accept_attr(allowed) multiple=multiple on:change=on_change/>
            </label>
            <p class="file-field__hint">
                {move || i18n.t("upload.hint")}
                " "
                {accept_attr(allowed)}
                " · "
                {upload::display_size(upload::MAX_FILE_BYTES)}
            </p>
            <ul class="file-field__list">
                {move || {
                    files
                        .with(|list| {
                            list.iter().map(|f| (f.name.clone(), f.size)).collect::<Vec<_>>()
                        })
                        .into_iter()
                        .enumerate()
                        .map(|(idx, (name, size))| {
                            view! {
                                <li>
                                    <span>{name}</span>
                                    <span class="file-field__size">{upload::display_size(size)}</span>
                                    <button
                                        type="button"
                                        class="btn btn--icon"
                                        aria-label=move || i18n.t("common.remove")
                                        on:click=move |_| remove(idx)
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            {move || {
                progress
                    .get()
                    .map(|p| {
                        let pct = p.percent();
                        view! {
                            <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=pct.to_string()>
                                <div class="progress__bar" style=format!("width: {pct}%")></div>
                                <span class="progress__label">{format!("{pct}%")}</span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
