//! Customer appointments: list, book and cancel.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::form::{TextArea, TextInput};
use crate::components::status_badge::StatusBadge;
use crate::i18n::use_i18n;
use crate::net::types::{Appointment, NewAppointment, ServiceOffering};
use crate::net::{catalog, customer};
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::task::spawn_browser;
use crate::util::validate;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let appointments = RwSignal::new(Remote::<Vec<Appointment>>::default());
    let services = RwSignal::new(Remote::<Vec<ServiceOffering>>::default());
    load(appointments, customer::my_appointments());
    load(services, catalog::list_services());

    let service = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let confirm_open = RwSignal::new(false);
    let cancel_id = RwSignal::new(None::<String>);

    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let raw = NewAppointment {
            service: service.get_untracked(),
            date: date.get_untracked(),
            time: time.get_untracked(),
            notes: Some(notes.get_untracked()),
        };
        let request = match validate::appointment(&raw) {
            Ok(request) => request,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match customer::book_appointment(&request).await {
                Ok(booked) => {
                    let id = booked.id.clone();
                    appointments.update(|r| r.upsert(booked, |a| a.id == id));
                    notify_success(toasts, i18n, "appointments.booked");
                    for field in [date, time, notes] {
                        field.set(String::new());
                    }
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            busy.set(false);
        });
    };

    let on_cancel_confirmed = Callback::new(move |()| {
        let Some(id) = cancel_id.get_untracked() else {
            return;
        };
        spawn_browser(async move {
            match customer::cancel_appointment(&id).await {
                Ok(updated) => {
                    appointments.update(|r| r.upsert(updated, |a| a.id == id));
                    notify_success(toasts, i18n, "appointments.cancelled");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    });

    view! {
        <section class="panel">
            <h2>{move || i18n.t("appointments.book_title")}</h2>
            <form class="form form--inline" on:submit=on_book>
                <label class="form__label">
                    {move || i18n.t("form.service")}
                    <select prop:value=move || service.get() on:change=move |ev| service.set(event_target_value(&ev))>
                        <option value="">{move || i18n.t("form.choose")}</option>
                        {move || {
                            services
                                .get()
                                .data
                                .unwrap_or_default()
                                .into_iter()
                                .map(|s| {
                                    let value = s.title.clone();
                                    view! { <option value=value>{s.title}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <TextInput label_key="form.date" value=date kind="date" required=true/>
                <TextInput label_key="form.time" value=time kind="time" required=true/>
                <TextArea label_key="form.notes" value=notes rows=2/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || i18n.t("appointments.book")}
                </button>
            </form>
        </section>
        <section class="panel">
            <h2>{move || i18n.t("dash.appointments")}</h2>
            {move || {
                let state = appointments.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let items = state.data.unwrap_or_default();
                if items.is_empty() {
                    return view! { <EmptyState message_key="appointments.none"/> }.into_any();
                }
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("form.service")}</th>
                                <th>{move || i18n.t("form.date")}</th>
                                <th>{move || i18n.t("form.time")}</th>
                                <th>{move || i18n.t("common.status")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {items
                                .into_iter()
                                .map(|a| {
                                    let id = a.id.clone();
                                    let cancellable = a.status.is_cancellable();
                                    view! {
                                        <tr>
                                            <td>{a.service}</td>
                                            <td>{a.date}</td>
                                            <td>{a.time}</td>
                                            <td>
                                                <StatusBadge badge=a.status/>
                                            </td>
                                            <td>
                                                <Show when=move || cancellable>
                                                    {
                                                        let id = id.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--ghost"
                                                                on:click=move |_| {
                                                                    cancel_id.set(Some(id.clone()));
                                                                    confirm_open.set(true);
                                                                }
                                                            >
                                                                {move || i18n.t("common.cancel")}
                                                            </button>
                                                        }
                                                    }
                                                </Show>
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
        </section>
        <ConfirmDialog open=confirm_open message_key="appointments.confirm_cancel" on_confirm=on_cancel_confirmed/>
    }
}
