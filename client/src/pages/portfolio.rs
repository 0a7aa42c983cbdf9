//! Completed-project gallery with a category filter.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::page_hero::PageHero;
use crate::i18n::use_i18n;
use crate::net::catalog;
use crate::net::types::PortfolioItem;
use crate::state::remote::{Remote, load};
use crate::util::format;

/// Distinct non-empty categories in first-seen order.
#[must_use]
pub fn categories(items: &[PortfolioItem]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let category = item.category.trim();
        if !category.is_empty() && !out.iter().any(|c| c.eq_ignore_ascii_case(category)) {
            out.push(category.to_owned());
        }
    }
    out
}

/// Items in `category`, or all of them for `None`.
#[must_use]
pub fn in_category(items: &[PortfolioItem], category: Option<&str>) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| category.is_none_or(|c| item.category.trim().eq_ignore_ascii_case(c)))
        .cloned()
        .collect()
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let i18n = use_i18n();
    let items = RwSignal::new(Remote::<Vec<PortfolioItem>>::default());
    let category = RwSignal::new(None::<String>);
    load(items, catalog::list_portfolio());

    view! {
        <PageHero title_key="portfolio.title" subtitle_key="portfolio.subtitle"/>
        <section class="section">
            {move || {
                let state = items.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let all = state.data.unwrap_or_default();
                let shown = in_category(&all, category.get().as_deref());
                view! {
                    <div class="chip-row" role="tablist">
                        <button
                            class="chip"
                            class:chip--active=move || category.get().is_none()
                            on:click=move |_| category.set(None)
                        >
                            {move || i18n.t("common.all")}
                        </button>
                        {categories(&all)
                            .into_iter()
                            .map(|c| {
                                let active = c.clone();
                                let pick = c.clone();
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--active=move || category.get().as_deref() == Some(active.as_str())
                                        on:click=move |_| category.set(Some(pick.clone()))
                                    >
                                        {c}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {if shown.is_empty() {
                        view! { <EmptyState/> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {shown
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <article class="card portfolio-card">
                                                {item
                                                    .image_url
                                                    .map(|src| view! { <img class="card__image" src=src alt="" loading="lazy"/> })}
                                                <div class="card__body">
                                                    <span class="portfolio-card__category">{item.category}</span>
                                                    <h3>{item.title}</h3>
                                                    <p>{item.description}</p>
                                                    <small>{format::date_or_dash(item.completed_on.as_deref())}</small>
                                                </div>
                                            </article>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }}
                }
                    .into_any()
            }}
        </section>
    }
}
