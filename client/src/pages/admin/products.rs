//! Catalog editor: product CRUD with an optional photo upload.

use leptos::prelude::*;

use super::{TableFilter, TableToolbar};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::file_field::FileField;
use crate::components::form::{CheckBox, TextArea, TextInput};
use crate::i18n::use_i18n;
use crate::net::admin;
use crate::net::types::Product;
use crate::net::upload::{self, PickedFile, UploadProgress};
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::format;
use crate::util::table::filter_rows;
use crate::util::task::spawn_browser;
use crate::util::validate::{self, ProductInput};

#[derive(Clone, Copy)]
struct ProductForm {
    open: RwSignal<bool>,
    id: RwSignal<String>,
    name: RwSignal<String>,
    description: RwSignal<String>,
    category: RwSignal<String>,
    price: RwSignal<String>,
    stock: RwSignal<String>,
    active: RwSignal<bool>,
    image_url: RwSignal<Option<String>>,
}

impl ProductForm {
    fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            id: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            active: RwSignal::new(true),
            image_url: RwSignal::new(None),
        }
    }

    fn edit(self, input: ProductInput) {
        self.id.set(input.id);
        self.name.set(input.name);
        self.description.set(input.description);
        self.category.set(input.category);
        self.price.set(input.price);
        self.stock.set(input.stock);
        self.active.set(input.active);
        self.image_url.set(input.image_url);
        self.open.set(true);
    }

    fn read(self) -> ProductInput {
        ProductInput {
            id: self.id.get_untracked(),
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            category: self.category.get_untracked(),
            price: self.price.get_untracked(),
            stock: self.stock.get_untracked(),
            active: self.active.get_untracked(),
            image_url: self.image_url.get_untracked(),
        }
    }
}

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let products = RwSignal::new(Remote::<Vec<Product>>::default());
    let filter = TableFilter::new();
    let form = ProductForm::new();
    let image = RwSignal::new_local(Vec::<PickedFile>::new());
    let progress = RwSignal::new(None::<UploadProgress>);
    let busy = RwSignal::new(false);
    let confirm_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<String>);
    load(products, admin::all_products());

    let rows = Memo::new(move |_| {
        products.with(|r| {
            filter_rows(
                r.data.as_deref().unwrap_or_default(),
                &filter.query.get(),
                None::<bool>,
                |p: &Product| vec![p.name.as_str(), p.category.as_str()],
                |p: &Product| p.active,
            )
        })
    });

    let open_editor = move |input: ProductInput| {
        image.set(Vec::new());
        progress.set(None);
        form.edit(input);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let product = match validate::product(&form.read()) {
            Ok(product) => product,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        let photo = image.get_untracked().first().cloned();
        busy.set(true);
        if photo.is_some() {
            progress.set(Some(UploadProgress::default()));
        }
        spawn_browser(async move {
            let on_progress = move |p: UploadProgress| progress.set(Some(p));
            match admin::save_product(&product, photo, on_progress).await {
                Ok(saved) => {
                    let id = saved.id.clone();
                    products.update(|r| r.upsert(saved, |p| p.id == id));
                    form.open.set(false);
                    image.set(Vec::new());
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
            match admin::delete_product(&id).await {
                Ok(()) => {
                    products.update(|r| r.edit(|list| list.retain(|p| p.id != id)));
                    notify_success(toasts, i18n, "common.deleted");
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
        });
    });

    view! {
        <header class="panel__header">
            <h2>{move || i18n.t("admin.products")}</h2>
            <button
                class="btn btn--primary"
                on:click=move |_| open_editor(ProductInput { active: true, ..ProductInput::default() })
            >
                {move || i18n.t("common.new")}
            </button>
        </header>
        <Show when=move || form.open.get()>
            <form class="form panel" on:submit=on_save>
                <TextInput label_key="form.name" value=form.name required=true/>
                <TextArea label_key="form.description" value=form.description rows=4/>
                <TextInput label_key="products.category" value=form.category required=true/>
                <TextInput label_key="products.price" value=form.price required=true/>
                <TextInput label_key="products.stock" value=form.stock kind="number" required=true/>
                <CheckBox label_key="products.active" value=form.active/>
                {move || form.image_url.get().map(|url| view! { <img class="form__preview" src=url alt=""/> })}
                <FileField
                    label_key="products.image"
                    files=image
                    allowed=upload::IMAGE_EXTENSIONS
                    progress=progress
                />
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
                let state = products.get();
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
                                <th>{move || i18n.t("products.category")}</th>
                                <th>{move || i18n.t("products.price")}</th>
                                <th>{move || i18n.t("products.stock")}</th>
                                <th>{move || i18n.t("products.active")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible
                                .into_iter()
                                .map(|product| {
                                    let delete_id = product.id.clone();
                                    let editing = ProductInput::from_product(&product);
                                    view! {
                                        <tr>
                                            <td>{product.name}</td>
                                            <td>{product.category}</td>
                                            <td>{format::money(product.price_cents)}</td>
                                            <td>{product.stock}</td>
                                            <td>{if product.active { "✓" } else { "—" }}</td>
                                            <td class="table__actions">
                                                <button class="btn btn--ghost" on:click=move |_| open_editor(editing.clone())>
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
        <ConfirmDialog open=confirm_open message_key="products.confirm_delete" on_confirm=on_delete/>
    }
}
