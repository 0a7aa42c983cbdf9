//! Back-office pages, nested under `/admin`.
//!
//! Tables load the full collection once and filter, search and page it in
//! the browser through `util::table`; edits patch the loaded list in place
//! instead of refetching.

pub mod analytics;
pub mod appointments;
pub mod blog;
pub mod employees;
pub mod orders;
pub mod products;
pub mod quotations;
pub mod tasks;
pub mod users;

use leptos::prelude::*;

use crate::components::form::{SearchBox, SelectInput};
use crate::components::pagination::Pagination;
use crate::i18n::use_i18n;
use crate::util::table::{self, PAGE_SIZE};

/// Search, status and page state of one back-office table.
#[derive(Clone, Copy)]
pub(crate) struct TableFilter {
    pub query: RwSignal<String>,
    pub status: RwSignal<String>,
    pub page: RwSignal<usize>,
}

impl TableFilter {
    /// Fresh filter; narrowing the search jumps back to page one.
    pub fn new() -> Self {
        let filter = Self { query: RwSignal::new(String::new()), status: RwSignal::new(String::new()), page: RwSignal::new(1) };
        Effect::new(move || {
            filter.query.track();
            filter.status.track();
            filter.page.set(1);
        });
        filter
    }

    /// Current page of `rows`.
    pub fn page_of<T: Clone>(self, rows: &[T]) -> Vec<T> {
        table::page_slice(rows, self.page.get(), PAGE_SIZE)
    }
}

/// Search box, optional status select and pager around a table.
#[component]
pub(crate) fn TableToolbar(
    filter: TableFilter,
    #[prop(optional)] status_options: Option<Vec<(String, &'static str)>>,
    #[prop(into)] rows: Signal<usize>,
    children: Children,
) -> impl IntoView {
    let total = Signal::derive(move || table::page_count(rows.get(), PAGE_SIZE));
    view! {
        <div class="toolbar">
            <SearchBox value=filter.query/>
            {status_options.map(|options| view! { <SelectInput label_key="common.status" value=filter.status options=options/> })}
        </div>
        {children()}
        <Pagination page=filter.page total=total/>
    }
}

/// Inline status `<select>` for one table row.
#[component]
pub(crate) fn RowStatusSelect<T>(
    all: &'static [T],
    current: T,
    name: fn(T) -> &'static str,
    label: fn(T) -> &'static str,
    on_change: Callback<T>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let i18n = use_i18n();
    view! {
        <select
            disabled=disabled
            on:change=move |ev| {
                if let Some(next) = table::parse_choice(all, &event_target_value(&ev), name) {
                    on_change.run(next);
                }
            }
        >
            {all
                .iter()
                .copied()
                .map(|s| {
                    view! {
                        <option value=name(s) selected=s == current>
                            {move || i18n.t(label(s))}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
