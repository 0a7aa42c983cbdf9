//! Dashboard landing: counts that need the customer's attention.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::charts::StatCard;
use crate::i18n::use_i18n;
use crate::net::customer;
use crate::net::types::{Appointment, AppointmentStatus, Order, OrderStatus, Quotation, QuotationStatus};
use crate::state::auth::AuthState;
use crate::state::remote::{Remote, load};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Attention {
    pub upcoming_appointments: usize,
    pub quotes_to_answer: usize,
    pub open_orders: usize,
}

#[must_use]
pub fn attention(appointments: &[Appointment], quotations: &[Quotation], orders: &[Order]) -> Attention {
    Attention {
        upcoming_appointments: appointments
            .iter()
            .filter(|a| matches!(a.status, AppointmentStatus::Pending | AppointmentStatus::Confirmed))
            .count(),
        quotes_to_answer: quotations.iter().filter(|q| q.status == QuotationStatus::Quoted).count(),
        open_orders: orders
            .iter()
            .filter(|o| !matches!(o.status, OrderStatus::Delivered | OrderStatus::Cancelled))
            .count(),
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let i18n = use_i18n();
    let auth = expect_context::<RwSignal<AuthState>>();
    let appointments = RwSignal::new(Remote::<Vec<Appointment>>::default());
    let quotations = RwSignal::new(Remote::<Vec<Quotation>>::default());
    let orders = RwSignal::new(Remote::<Vec<Order>>::default());
    load(appointments, customer::my_appointments());
    load(quotations, customer::my_quotations());
    load(orders, customer::my_orders());

    let counts = Memo::new(move |_| {
        let a = appointments.with(|r| r.data.clone().unwrap_or_default());
        let q = quotations.with(|r| r.data.clone().unwrap_or_default());
        let o = orders.with(|r| r.data.clone().unwrap_or_default());
        attention(&a, &q, &o)
    });

    view! {
        <h2>
            {move || i18n.t("dash.welcome")}
            " "
            {move || auth.with(|a| a.display_name().map(str::to_owned)).unwrap_or_default()}
        </h2>
        <div class="stat-grid">
            {move || {
                let c = counts.get();
                view! {
                    <StatCard label_key="dash.upcoming_appointments" value=c.upcoming_appointments.to_string()/>
                    <StatCard label_key="dash.quotes_to_answer" value=c.quotes_to_answer.to_string()/>
                    <StatCard label_key="dash.open_orders" value=c.open_orders.to_string()/>
                }
            }}
        </div>
        <div class="quick-links">
            <A href="/dashboard/appointments" attr:class="btn">
                {move || i18n.t("dash.book_appointment")}
            </A>
            <A href="/dashboard/quotations" attr:class="btn">
                {move || i18n.t("dash.request_quote")}
            </A>
            <A href="/shop" attr:class="btn">
                {move || i18n.t("nav.shop")}
            </A>
        </div>
    }
}
