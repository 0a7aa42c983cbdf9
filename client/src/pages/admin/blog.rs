//! Blog editor: markdown body with live preview and an optional cover image.

use leptos::prelude::*;

use super::{TableFilter, TableToolbar};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::file_field::FileField;
use crate::components::form::{CheckBox, TextArea, TextInput};
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::BlogPost;
use crate::net::upload::{self, PickedFile, UploadProgress};
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::table::filter_rows;
use crate::util::task::spawn_browser;
use crate::util::{format, markdown, validate};

#[derive(Clone, Copy)]
struct PostForm {
    open: RwSignal<bool>,
    preview: RwSignal<bool>,
    id: RwSignal<String>,
    title: RwSignal<String>,
    slug: RwSignal<String>,
    excerpt: RwSignal<String>,
    body: RwSignal<String>,
    published: RwSignal<bool>,
    // Fields the editor does not touch but the backend echoes back.
    kept: RwSignal<Option<BlogPost>>,
}

impl PostForm {
    fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            preview: RwSignal::new(false),
            id: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            slug: RwSignal::new(String::new()),
            excerpt: RwSignal::new(String::new()),
            body: RwSignal::new(String::new()),
            published: RwSignal::new(false),
            kept: RwSignal::new(None),
        }
    }

    fn edit(self, post: Option<BlogPost>) {
        let source = post.clone();
        let post = post.unwrap_or(BlogPost {
            id: String::new(),
            slug: String::new(),
            title: String::new(),
            excerpt: String::new(),
            body: String::new(),
            cover_url: None,
            author: None,
            published_at: None,
            published: false,
        });
        self.id.set(post.id);
        self.title.set(post.title);
        self.slug.set(post.slug);
        self.excerpt.set(post.excerpt);
        self.body.set(post.body);
        self.published.set(post.published);
        self.kept.set(source);
        self.preview.set(false);
        self.open.set(true);
    }

    fn read(self) -> BlogPost {
        let kept = self.kept.get_untracked();
        BlogPost {
            id: self.id.get_untracked(),
            slug: self.slug.get_untracked(),
            title: self.title.get_untracked(),
            excerpt: self.excerpt.get_untracked(),
            body: self.body.get_untracked(),
            cover_url: kept.as_ref().and_then(|p| p.cover_url.clone()),
            author: kept.as_ref().and_then(|p| p.author.clone()),
            published_at: kept.and_then(|p| p.published_at),
            published: self.published.get_untracked(),
        }
    }
}

#[component]
pub fn AdminBlogPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let posts = RwSignal::new(Remote::<Vec<BlogPost>>::default());
    let filter = TableFilter::new();
    let form = PostForm::new();
    let cover = RwSignal::new_local(Vec::<PickedFile>::new());
    let progress = RwSignal::new(None::<UploadProgress>);
    let busy = RwSignal::new(false);
    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<String>);
    load(posts, admin::all_posts());

    let rows = Memo::new(move |_| {
        posts.with(|r| {
            filter_rows(
                r.data.as_deref().unwrap_or_default(),
                &filter.query.get(),
                None::<bool>,
                |p: &BlogPost| vec![p.title.as_str(), p.slug.as_str(), p.author.as_deref().unwrap_or_default()],
                |p: &BlogPost| p.published,
            )
        })
    });

    let open_editor = move |post: Option<BlogPost>| {
        cover.set(Vec::new());
        progress.set(None);
        form.edit(post);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let post = match validate::post(&form.read()) {
            Ok(post) => post,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        let picked = cover.get_untracked().first().cloned();
        busy.set(true);
        if picked.is_some() {
            progress.set(Some(UploadProgress::default()));
        }
        spawn_browser(async move {
            let on_progress = move |p: UploadProgress| progress.set(Some(p));
            match admin::save_post(&post, picked, on_progress).await {
                Ok(saved) => {
                    let id = saved.id.clone();
                    posts.update(|r| r.upsert(saved, |p| p.id == id));
                    form.open.set(false);
                    cover.set(Vec::new());
                    notify_success(toasts, i18n, "common.saved");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            progress.set(None);
            busy.set(false);
        });
    };

    let on_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_browser(async move {
            match admin::delete_post(&id).await {
                Ok(()) => {
                    posts.update(|r| r.edit(|list| list.retain(|p| p.id != id)));
                    notify_success(toasts, i18n, "common.deleted");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    });

    view! {
        <header class="panel__header">
            <h2>{move || i18n.t("admin.blog")}</h2>
            <button class="btn btn--primary" on:click=move |_| open_editor(None)>
                {move || i18n.t("common.new")}
            </button>
        </header>
        <Show when=move || form.open.get()>
            <form class="form panel" on:submit=on_save>
                <TextInput label_key="form.title" value=form.title required=true/>
                <TextInput label_key="blog.slug" value=form.slug/>
                <TextArea label_key="blog.excerpt" value=form.excerpt rows=2/>
                <div class="editor__tabs">
                    <button
                        type="button"
                        class="btn btn--ghost"
                        class:is-active=move || !form.preview.get()
                        on:click=move |_| form.preview.set(false)
                    >
                        {move || i18n.t("blog.write")}
                    </button>
                    <button
                        type="button"
                        class="btn btn--ghost"
                        class:is-active=move || form.preview.get()
                        on:click=move |_| form.preview.set(true)
                    >
                        {move || i18n.t("blog.preview")}
                    </button>
                </div>
                <Show
                    when=move || form.preview.get()
                    fallback=move || view! { <TextArea label_key="blog.body" value=form.body rows=16/> }
                >
                    <div class="prose editor__preview" inner_html=move || form.body.with(|b| markdown::to_html(b))></div>
                </Show>
                {move || {
                    form.kept
                        .with(|k| k.as_ref().and_then(|p| p.cover_url.clone()))
                        .map(|url| view! { <img class="form__preview" src=url alt=""/> })
                }}
                <FileField label_key="blog.cover" files=cover allowed=upload::IMAGE_EXTENSIONS progress=progress/>
                <CheckBox label_key="blog.published" value=form.published/>
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
                let state = posts.get();
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
                                <th>{move || i18n.t("blog.slug")}</th>
                                <th>{move || i18n.t("blog.published")}</th>
                                <th>{move || i18n.t("common.date")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|post| {
                                    let delete_id = post.id.clone();
                                    let editing = post.clone();
                                    view! {
                                        <tr>
                                            <td>{post.title}</td>
                                            <td>
                                                <code>{post.slug}</code>
                                            </td>
                                            <td>
                                                {move || i18n.t(if post.published { "blog.state_published" } else { "blog.state_draft" })}
                                            </td>
                                            <td>{format::date_or_dash(post.published_at.as_deref())}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| open_editor(Some(editing.clone()))
                                                >
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
        <ConfirmDialog open=confirm_open message_key="blog.confirm_delete" on_confirm=on_delete/>
    }
}
