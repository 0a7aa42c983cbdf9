//! Fabrication services catalog.

use leptos::prelude::*;

use crate::components::cards::ServiceCard;
use crate::components::feedback::{EmptyState, remote_placeholder};
use crate::components::page_hero::PageHero;
use crate::net::catalog;
use crate::state::remote::{Remote, load};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = RwSignal::new(Remote::default());
    let reload = Callback::new(move |()| load(services, catalog::list_services()));
    reload.run(());

    view! {
        <PageHero title_key="services.title" subtitle_key="services.subtitle"/>
        <section class="section">
            {move || {
                let state = services.get();
                if let Some(placeholder) = remote_placeholder(&state, Some(reload)) {
                    return placeholder;
                }
                let items = state.data.unwrap_or_default();
                if items.is_empty() {
                    return view! { <EmptyState/> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {items.into_iter().map(|service| view! { <ServiceCard service=service/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
