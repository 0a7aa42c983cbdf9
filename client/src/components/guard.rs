//! Route guard component.
//!
//! Wraps protected route views. While the session is still resolving the
//! children are withheld behind a loading placeholder; once it settles the
//! guard either renders them or navigates away, per
//! [`crate::util::auth::evaluate`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::feedback::Loading;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardOutcome, GuardRequirement, after_login, evaluate};

#[component]
pub fn RequireAuth(requirement: GuardRequirement, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let path = location.pathname.get();
        auth.with(|state| match evaluate(state, requirement, &path) {
            // Signed in on a guest page: honor `?next=` from the login redirect.
            GuardOutcome::Redirect(_) if requirement == GuardRequirement::Guest => {
                let next = location.query.with(|q| q.get("next"));
                GuardOutcome::Redirect(after_login(state, next.as_deref()))
            }
            other => other,
        })
    });

    Effect::new(move || {
        if let GuardOutcome::Redirect(target) = outcome.get() {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || outcome.get() == GuardOutcome::Allow fallback=|| view! { <Loading/> }>
            {children()}
        </Show>
    }
}
