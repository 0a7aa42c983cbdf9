//! Back-office appointment schedule with status changes.

use leptos::prelude::*;

use super::{RowStatusSelect, TableFilter, TableToolbar};
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::{Appointment, AppointmentStatus};
use crate::state::remote::{Remote, load};
use crate::state::toast::{notify_api_error, notify_success, use_toasts};
use crate::util::table::{choice_options, filter_rows, parse_choice};
use crate::util::task::spawn_browser;

#[component]
pub fn AdminAppointmentsPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let appointments = RwSignal::new(Remote::<Vec<Appointment>>::default());
    let filter = TableFilter::new();
    load(appointments, admin::all_appointments());

    let rows = Memo::new(move |_| {
        let status = parse_choice(&AppointmentStatus::ALL, &filter.status.get(), AppointmentStatus::as_str);
        appointments.with(|r| {
            let mut rows = filter_rows(
                r.data.as_deref().unwrap_or_default(),
                &filter.query.get(),
                status,
                |a: &Appointment| vec![a.service.as_str(), a.customer_name.as_deref().unwrap_or_default(), a.date.as_str()],
                |a: &Appointment| a.status,
            );
            rows.sort_by(|a, b| (a.date.as_str(), a.time.as_str()).cmp(&(b.date.as_str(), b.time.as_str())));
            rows
        })
    });

    let set_status = move |id: String, status: AppointmentStatus| {
        spawn_browser(async move {
            match admin::set_appointment_status(&id, status).await {
                Ok(updated) => {
                    appointments.update(|r| r.upsert(updated, |a| a.id == id));
                    notify_success(toasts, i18n, "common.saved");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    };

    view! {
        <h2>{move || i18n.t("admin.appointments")}</h2>
        <TableToolbar
            filter=filter
            status_options=choice_options(&AppointmentStatus::ALL, AppointmentStatus::as_str, AppointmentStatus::label_key)
            rows=Signal::derive(move || rows.with(Vec::len))
        >
            {move || {
                let state = appointments.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let visible = filter.page_of(&rows.get());
                if visible.is_empty() {
                    return view! { <EmptyState/> }.into_any();
                }
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("form.date")}</th>
                                <th>{move || i18n.t("form.time")}</th>
                                <th>{move || i18n.t("common.customer")}</th>
                                <th>{move || i18n.t("form.service")}</th>
                                <th>{move || i18n.t("form.notes")}</th>
                                <th>{move || i18n.t("common.status")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|a| {
                                    let id = a.id.clone();
                                    let current = a.status;
                                    view! {
                                        <tr>
                                            <td>{a.date}</td>
                                            <td>{a.time}</td>
                                            <td>{a.customer_name.unwrap_or_default()}</td>
                                            <td>{a.service}</td>
                                            <td>{a.notes.unwrap_or_default()}</td>
                                            <td>
                                                <RowStatusSelect
                                                    all=&AppointmentStatus::ALL
                                                    current=current
                                                    name=AppointmentStatus::as_str
                                                    label=AppointmentStatus::label_key
                                                    on_change=Callback::new(move |next| set_status(id.clone(), next))
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </TableToolbar>
    }
}
