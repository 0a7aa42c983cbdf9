//! Account administration: role, active flag, deletion. Admin only.

use leptos::prelude::*;

use super::{TableFilter, TableToolbar};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::state::remote::{Remote, load};
use crate::state::toast::{notify_api_error, notify_success, use_toasts};
use crate::util::format;
use crate::util::table::{choice_options, filter_rows, parse_choice};
use crate::util::task::spawn_browser;

#[component]
pub fn UsersPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = RwSignal::new(Remote::<Vec<User>>::default());
    let filter = TableFilter::new();
    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<String>);
    load(users, admin::list_users());

    let rows = Memo::new(move |_| {
        let role = parse_choice(&Role::ALL, &filter.status.get(), Role::as_str);
        users.with(|r| {
            filter_rows(
                r.data.as_deref().unwrap_or_default(),
                &filter.query.get(),
                role,
                |u: &User| vec![u.name.as_str(), u.email.as_str()],
                |u: &User| u.role,
            )
        })
    });

    let update = move |id: String, role: Role, active: bool| {
        spawn_browser(async move {
            match admin::update_user(&id, role, active).await {
                Ok(updated) => {
                    users.update(|r| r.upsert(updated, |u| u.id == id));
                    notify_success(toasts, i18n, "common.saved");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    };

    let on_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_browser(async move {
            match admin::delete_user(&id).await {
                Ok(()) => {
                    users.update(|r| r.edit(|list| list.retain(|u| u.id != id)));
                    notify_success(toasts, i18n, "common.deleted");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    });

    let self_id = move || auth.with(|a| a.user.as_ref().map(|u| u.id.clone()));

    view! {
        <h2>{move || i18n.t("admin.users")}</h2>
        <TableToolbar
            filter=filter
            status_options=choice_options(&Role::ALL, Role::as_str, Role::label_key)
            rows=Signal::derive(move || rows.with(Vec::len))
        >
            {move || {
                let state = users.get();
                if let Some(placeholder) = remote_placeholder(&state, None) {
                    return placeholder;
                }
                let visible = filter.page_of(&rows.get());
                if visible.is_empty() {
                    return view! { <EmptyState/> }.into_any();
                }
                let me = self_id();
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("form.name")}</th>
                                <th>{move || i18n.t("form.email")}</th>
                                <th>{move || i18n.t("users.role")}</th>
                                <th>{move || i18n.t("users.active")}</th>
                                <th>{move || i18n.t("users.joined")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|user| {
                                    let is_me = me.as_deref() == Some(user.id.as_str());
                                    let role_id = user.id.clone();
                                    let active_id = user.id.clone();
                                    let delete_id = user.id.clone();
                                    let role = user.role;
                                    let active = user.active;
                                    view! {
                                        <tr>
                                            <td>{user.name}</td>
                                            <td>{user.email}</td>
                                            <td>
                                                <select
                                                    disabled=is_me
                                                    on:change=move |ev| {
                                                        if let Some(next) = Role::parse(&event_target_value(&ev)) {
                                                            update(role_id.clone(), next, active);
                                                        }
                                                    }
                                                >
                                                    {Role::ALL
                                                        .into_iter()
                                                        .map(|r| {
                                                            view! {
                                                                <option value=r.as_str() selected=r == role>
                                                                    {move || i18n.t(r.label_key())}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    checked=active
                                                    disabled=is_me
                                                    on:change=move |ev| update(active_id.clone(), role, event_target_checked(&ev))
                                                />
                                            </td>
                                            <td>{format::date_or_dash(user.created_at.as_deref())}</td>
                                            <td>
                                                <button
                                                    class="btn btn--ghost"
                                                    disabled=is_me
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
        <ConfirmDialog open=confirm_open message_key="users.confirm_delete" on_confirm=on_delete/>
    }
}
