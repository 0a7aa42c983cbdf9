//! Workshop task board for staff: assign, prioritise, track.

use leptos::prelude::*;

use super::{RowStatusSelect, TableFilter, TableToolbar};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::form::{SelectInput, TextArea, TextInput};
use crate::components::status_badge::StatusBadge;
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::{Employee, Task, TaskPriority, TaskStatus};
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::format;
use crate::util::table::{choice_options, filter_rows, parse_choice};
use crate::util::task::spawn_browser;
use crate::util::validate::{self, TaskInput};

#[derive(Clone, Copy)]
struct TaskForm {
    open: RwSignal<bool>,
    id: RwSignal<String>,
    title: RwSignal<String>,
    description: RwSignal<String>,
    assignee_id: RwSignal<String>,
    due_date: RwSignal<String>,
    status: RwSignal<String>,
    priority: RwSignal<String>,
}

impl TaskForm {
    fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            id: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            assignee_id: RwSignal::new(String::new()),
            due_date: RwSignal::new(String::new()),
            status: RwSignal::new(TaskStatus::default().as_str().to_owned()),
            priority: RwSignal::new(TaskPriority::default().as_str().to_owned()),
        }
    }

    fn edit(self, input: TaskInput) {
        self.id.set(input.id);
        self.title.set(input.title);
        self.description.set(input.description);
        self.assignee_id.set(input.assignee_id);
        self.due_date.set(input.due_date);
        self.status.set(input.status.as_str().to_owned());
        self.priority.set(input.priority.as_str().to_owned());
        self.open.set(true);
    }

    fn read(self) -> TaskInput {
        TaskInput {
            id: self.id.get_untracked(),
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            assignee_id: self.assignee_id.get_untracked(),
            due_date: self.due_date.get_untracked(),
            status: parse_choice(&TaskStatus::ALL, &self.status.get_untracked(), TaskStatus::as_str)
                .unwrap_or_default(),
            priority: parse_choice(&TaskPriority::ALL, &self.priority.get_untracked(), TaskPriority::as_str)
                .unwrap_or_default(),
        }
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let tasks = RwSignal::new(Remote::<Vec<Task>>::default());
    // Assignee choices; employees without directory access just see an empty list.
    let staff = RwSignal::new(Remote::<Vec<Employee>>::default());
    let filter = TableFilter::new();
    let form = TaskForm::new();
    let busy = RwSignal::new(false);
    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<String>);
    load(tasks, admin::list_tasks());
    load(staff, admin::list_employees());

    let rows = Memo::new(move |_| {
        let status = parse_choice(&TaskStatus::ALL, &filter.status.get(), TaskStatus::as_str);
        tasks.with(|r| {
            filter_rows(
                r.data.as_deref().unwrap_or_default(),
                &filter.query.get(),
                status,
                |t: &Task| {
                    vec![
                        t.title.as_str(),
                        t.description.as_deref().unwrap_or_default(),
                        t.assignee_name.as_deref().unwrap_or_default(),
                    ]
                },
                |t: &Task| t.status,
            )
        })
    });

    let replace = move |updated: Task| {
        let id = updated.id.clone();
        tasks.update(|r| r.upsert(updated, |t| t.id == id));
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let task = match validate::task(&form.read()) {
            Ok(task) => task,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match admin::save_task(&task).await {
                Ok(saved) => {
                    replace(saved);
                    form.open.set(false);
                    notify_success(toasts, i18n, "common.saved");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            busy.set(false);
        });
    };

    let set_status = move |id: String, status: TaskStatus| {
        spawn_browser(async move {
            match admin::set_task_status(&id, status).await {
                Ok(updated) => replace(updated),
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    };

    let on_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_browser(async move {
            match admin::delete_task(&id).await {
                Ok(()) => {
                    tasks.update(|r| r.edit(|list| list.retain(|t| t.id != id)));
                    notify_success(toasts, i18n, "common.deleted");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    });

    let status_choices = TaskStatus::ALL.iter().map(|s| (s.as_str().to_owned(), s.label_key())).collect::<Vec<_>>();
    let priority_choices =
        TaskPriority::ALL.iter().map(|p| (p.as_str().to_owned(), p.label_key())).collect::<Vec<_>>();

    view! {
        <header class="panel__header">
            <h2>{move || i18n.t("admin.tasks")}</h2>
            <button class="btn btn--primary" on:click=move |_| form.edit(TaskInput::default())>
                {move || i18n.t("common.new")}
            </button>
        </header>
        <Show when=move || form.open.get()>
            <form class="form panel" on:submit=on_save>
                <TextInput label_key="form.title" value=form.title required=true/>
                <TextArea label_key="form.description" value=form.description rows=3/>
                <label class="form__label">
                    {move || i18n.t("tasks.assignee")}
                    <select
                        prop:value=move || form.assignee_id.get()
                        on:change=move |ev| form.assignee_id.set(event_target_value(&ev))
                    >
                        <option value="">{move || i18n.t("tasks.unassigned")}</option>
                        {move || {
                            staff
                                .with(|r| r.data.clone().unwrap_or_default())
                                .into_iter()
                                .filter(|e| e.active)
                                .map(|e| {
                                    let id = e.id.clone();
                                    view! {
                                        <option value=e.id selected=move || form.assignee_id.get() == id>
                                            {e.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <TextInput label_key="tasks.due_date" value=form.due_date kind="date"/>
                <SelectInput label_key="common.status" value=form.status options=status_choices.clone()/>
                <SelectInput label_key="tasks.priority" value=form.priority options=priority_choices.clone()/>
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
        <TableToolbar
            filter=filter
            status_options=choice_options(&TaskStatus::ALL, TaskStatus::as_str, TaskStatus::label_key)
            rows=Signal::derive(move || rows.with(Vec::len))
        >
            {move || {
                let state = tasks.get();
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
                                <th>{move || i18n.t("form.title")}</th>
                                <th>{move || i18n.t("tasks.assignee")}</th>
                                <th>{move || i18n.t("tasks.due_date")}</th>
                                <th>{move || i18n.t("tasks.priority")}</th>
                                <th>{move || i18n.t("common.status")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|task| {
                                    let status_id = task.id.clone();
                                    let delete_id = task.id.clone();
                                    let editing = TaskInput::from_task(&task);
                                    view! {
                                        <tr>
                                            <td>{task.title}</td>
                                            <td>{task.assignee_name.unwrap_or_else(|| "—".to_owned())}</td>
                                            <td>{format::date_or_dash(task.due_date.as_deref())}</td>
                                            <td>
                                                <StatusBadge badge=task.priority/>
                                            </td>
                                            <td>
                                                <RowStatusSelect
                                                    all=&TaskStatus::ALL
                                                    current=task.status
                                                    name=TaskStatus::as_str
                                                    label=TaskStatus::label_key
                                                    on_change=Callback::new(move |next| set_status(status_id.clone(), next))
                                                />
                                            </td>
                                            <td class="table__actions">
                                                <button class="btn btn--ghost" on:click=move |_| form.edit(editing.clone())>
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
        <ConfirmDialog open=confirm_open message_key="tasks.confirm_delete" on_confirm=on_delete/>
    }
}
