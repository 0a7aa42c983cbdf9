//! Contact form.

use leptos::prelude::*;

use crate::components::form::{TextArea, TextInput};
use crate::components::page_hero::PageHero;
use crate::i18n::use_i18n;
use crate::net::catalog;
use crate::net::types::ContactRequest;
use crate::state::toast::{ToastKind, notify, notify_api_error, notify_success, use_toasts};
use crate::util::task::spawn_browser;
use crate::util::validate;

#[component]
pub fn ContactPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let raw = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: Some(phone.get_untracked()),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let request = match validate::contact(&raw) {
            Ok(request) => request,
            Err(key) => {
                notify(toasts, ToastKind::Error, i18n.t_untracked(key));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match catalog::send_contact(&request).await {
                Ok(()) => {
                    notify_success(toasts, i18n, "contact.sent");
                    for field in [name, email, phone, subject, message] {
                        field.set(String::new());
                    }
                }
                Err(err) => notify_api_error(toasts, i18n, &err),
            }
            busy.set(false);
        });
    };

    view! {
        <PageHero title_key="contact.title" subtitle_key="contact.subtitle"/>
        <section class="section section--split">
            <form class="form" on:submit=on_submit>
                <TextInput label_key="form.name" value=name/>
                <TextInput label_key="form.email" value=email kind="email"/>
                <TextInput label_key="form.phone" value=phone kind="tel"/>
                <TextInput label_key="form.subject" value=subject/>
                <TextArea label_key="form.message" value=message/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || i18n.t("contact.send")}
                </button>
            </form>
            <aside class="contact-details">
                <h2>{move || i18n.t("contact.visit")}</h2>
                <p>"1200 Foundry Rd, Austin, TX"</p>
                <p>"+1 (512) 555-0142"</p>
                <p>"shop@forgeline.example"</p>
                <p>{move || i18n.t("contact.hours")}</p>
            </aside>
        </section>
    }
}
