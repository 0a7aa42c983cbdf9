//! Previous/next pager with numbered pages.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::i18n::use_i18n;

/// Page numbers to show around `current`, with `None` marking a gap.
#[must_use]
pub fn page_window(current: usize, total: usize) -> Vec<Option<usize>> {
    const SPAN: usize = 1;
    let total = total.max(1);
    let current = current.clamp(1, total);
    let mut out = Vec::new();
    let mut last = 0;
    for page in 1..=total {
        let near = page.abs_diff(current) <= SPAN;
        if page == 1 || page == total || near {
            if last != 0 && page > last + 1 {
                out.push(None);
            }
            out.push(Some(page));
            last = page;
        }
    }
    out
}

/// 1-based pager writing into `page`. Hidden when there is one page.
#[component]
pub fn Pagination(page: RwSignal<usize>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination" aria-label=move || i18n.t("common.pages")>
                <button
                    class="btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    {move || i18n.t("common.previous")}
                </button>
                {move || {
                    page_window(page.get(), total.get())
                        .into_iter()
                        .map(|slot| match slot {
                            Some(n) => {
                                view! {
                                    <button
                                        class="btn pagination__page"
                                        class:pagination__page--current=move || page.get() == n
                                        on:click=move |_| page.set(n)
                                    >
                                        {n}
                                    </button>
                                }
                                    .into_any()
                            }
                            None => view! { <span class="pagination__gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="btn"
                    disabled=move || page.get() >= total.get()
                    on:click=move |_| page.update(|p| *p = (*p + 1).min(total.get_untracked().max(1)))
                >
                    {move || i18n.t("common.next")}
                </button>
            </nav>
        </Show>
    }
}
