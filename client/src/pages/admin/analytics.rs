//! Back-office landing: business totals and monthly revenue.

use leptos::prelude::*;

use crate::components::charts::{BarChart, StatCard};
use crate::components::feedback::remote_placeholder;
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::AnalyticsSummary;
use crate::state::remote::{Remote, load};
use crate::util::format;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let i18n = use_i18n();
    let summary = RwSignal::new(Remote::<AnalyticsSummary>::default());
    let reload = Callback::new(move |()| load(summary, admin::analytics()));
    reload.run(());

    view! {
        <header class="panel__header">
            <h2>{move || i18n.t("admin.analytics")}</h2>
            <button class="btn btn--ghost" on:click=move |_| reload.run(())>
                {move || i18n.t("common.refresh")}
            </button>
        </header>
        {move || {
            let state = summary.get();
            if let Some(placeholder) = remote_placeholder(&state, Some(reload)) {
                return placeholder;
            }
            let data = state.data.unwrap_or_default();
            view! {
                <div class="stat-grid">
                    <StatCard label_key="analytics.revenue" value=format::money(data.revenue_cents)/>
                    <StatCard label_key="analytics.orders" value=data.orders.to_string()/>
                    <StatCard label_key="analytics.customers" value=data.customers.to_string()/>
                    <StatCard label_key="analytics.pending_quotations" value=data.pending_quotations.to_string()/>
                    <StatCard label_key="analytics.upcoming_appointments" value=data.upcoming_appointments.to_string()/>
                </div>
                <BarChart points=data.monthly_revenue/>
            }
                .into_any()
        }}
    }
}
