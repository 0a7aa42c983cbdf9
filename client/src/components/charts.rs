//! Dashboard figures: stat tiles and a CSS bar chart.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::net::types::MonthlyPoint;
use crate::util::format;

/// Bar heights as whole percent of the largest value.
#[must_use]
pub fn bar_heights(values: &[i64]) -> Vec<u8> {
    let max = values.iter().copied().max().unwrap_or(0);
    values.iter().map(|v| format::percent((*v).max(0), max)).collect()
}

#[component]
pub fn StatCard(label_key: &'static str, #[prop(into)] value: String) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{move || i18n.t(label_key)}</span>
            <strong class="stat-card__value">{value}</strong>
        </div>
    }
}

/// Monthly revenue bars; each bar is a flex item sized by `height`.
#[component]
pub fn BarChart(points: Vec<MonthlyPoint>) -> impl IntoView {
    let i18n = use_i18n();
    let heights = bar_heights(&points.iter().map(|p| p.revenue_cents).collect::<Vec<_>>());
    view! {
        <figure class="bar-chart">
            <figcaption>{move || i18n.t("analytics.monthly_revenue")}</figcaption>
            <div class="bar-chart__bars">
                {points
                    .into_iter()
                    .zip(heights)
                    .map(|(point, height)| {
                        let title = format!("{} · {} · {}", point.month, format::money(point.revenue_cents), point.orders);
                        view! {
                            <div class="bar-chart__column" title=title>
                                <div class="bar-chart__bar" style=format!("height: {height}%")></div>
                                <span class="bar-chart__label">{point.month}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </figure>
    }
}
