//! Employee directory CRUD. Admin only.

use leptos::prelude::*;

use super::{TableFilter, TableToolbar};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::form::{CheckBox, TextInput};
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::Employee;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::table::filter_rows;
use crate::util::task::spawn_browser;
use crate::util::validate;

/// Editor fields; `id` is empty while creating.
#[derive(Clone, Copy)]
struct EmployeeForm {
    open: RwSignal<bool>,
    id: RwSignal<String>,
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    position: RwSignal<String>,
    active: RwSignal<bool>,
}

impl EmployeeForm {
    fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            id: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            position: RwSignal::new(String::new()),
            active: RwSignal::new(true),
        }
    }

    fn edit(self, employee: &Employee) {
        self.id.set(employee.id.clone());
        self.name.set(employee.name.clone());
        self.email.set(employee.email.clone());
        self.phone.set(employee.phone.clone().unwrap_or_default());
        self.position.set(employee.position.clone());
        self.active.set(employee.active);
        self.open.set(true);
    }

    fn read(self) -> Employee {
        Employee {
            id: self.id.get_untracked(),
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: Some(self.phone.get_untracked()),
            position: self.position.get_untracked(),
            active: self.active.get_untracked(),
        }
    }
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let employees = RwSignal::new(Remote::<Vec<Employee>>::default());
    let filter = TableFilter::new();
    let form = EmployeeForm::new();
    let busy = RwSignal::new(false);
    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<String>);
    load(employees, admin::list_employees());

    let rows = Memo::new(move |_| {
        employees.with(|r| {
            filter_rows(
                r.data.as_deref().unwrap_or_default(),
                &filter.query.get(),
                None::<bool>,
                |e: &Employee| vec![e.name.as_str(), e.email.as_str(), e.position.as_str()],
                |e: &Employee| e.active,
            )
        })
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let employee = match validate::employee(&form.read()) {
            Ok(employee) => employee,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match admin::save_employee(&employee).await {
                Ok(saved) => {
                    let id = saved.id.clone();
                    employees.update(|r| r.upsert(saved, |e| e.id == id));
                    form.open.set(false);
                    notify_success(toasts, i18n, "common.saved");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            busy.set(false);
        });
    };

    let on_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_browser(async move {
            match admin::delete_employee(&id).await {
                Ok(()) => {
                    employees.update(|r| r.edit(|list| list.retain(|e| e.id != id)));
                    notify_success(toasts, i18n, "common.deleted");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    });

    view! {
        <header class="panel__header">
            <h2>{move || i18n.t("admin.employees")}</h2>
            <button class="btn btn--primary" on:click=move |_| form.edit(&Employee { active: true, ..Employee::default() })>
                {move || i18n.t("common.new")}
            </button>
        </header>
        <Show when=move || form.open.get()>
            <form class="form panel" on:submit=on_save>
                <TextInput label_key="form.name" value=form.name required=true/>
                <TextInput label_key="form.email" value=form.email kind="email" required=true/>
                <TextInput label_key="form.phone" value=form.phone kind="tel"/>
                <TextInput label_key="employees.position" value=form.position required=true/>
                <CheckBox label_key="users.active" value=form.active/>
                <div class="form__actions">
                    <button type="button" class="btn" on:click=move |_| form.open.set(false)>
                        {move || i18n.t("common.cancel")}
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || i18n.t("common.save")}
                    </button>
                </div>
            </form>
        </Show>
        <TableToolbar filter=filter rows=Signal::derive(move || rows.with(Vec::len))>
            {move || {
                let state = employees.get();
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
                                <th>{move || i18n.t("form.name")}</th>
                                <th>{move || i18n.t("employees.position")}</th>
                                <th>{move || i18n.t("form.email")}</th>
                                <th>{move || i18n.t("form.phone")}</th>
                                <th>{move || i18n.t("users.active")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|employee| {
                                    let delete_id = employee.id.clone();
                                    let editing = employee.clone();
                                    view! {
                                        <tr>
                                            <td>{employee.name}</td>
                                            <td>{employee.position}</td>
                                            <td>{employee.email}</td>
                                            <td>{employee.phone.unwrap_or_default()}</td>
                                            <td>{if employee.active { "✓" } else { "—" }}</td>
                                            <td class="table__actions">
                                                <button class="btn btn--ghost" on:click=move |_| form.edit(&editing)>
                                                    {move || i18n.t("common.edit")}
                                                </button>
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| {
                                                        pending_delete.set(Some(delete_id.clone()));
                                                        confirm_open.set(true);
                                                    }
                                                >
                                                    {move || i18n.t("common.delete")}
                                                </button>
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
        <ConfirmDialog open=confirm_open message_key="employees.confirm_delete" on_confirm=on_delete/>
    }
}
