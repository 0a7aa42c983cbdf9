//! Page chrome for the public site and the dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both layouts are `ParentRoute` views: the route table nests pages under
//! them and they render the active child through `<Outlet/>`. They read the
//! auth, cart and UI contexts provided by `App`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use super::language_switcher::LanguageSwitcher;
use crate::i18n::use_i18n;
use crate::state::auth::{self, AuthState};
use crate::state::cart::CartState;
use crate::state::ui::UiState;
use crate::util::auth::home_for;
use crate::util::dark_mode;

/// Public navigation: `(href, i18n key)`.
pub const SITE_NAV: &[(&str, &str)] = &[
    ("/", "nav.home"),
    ("/about", "nav.about"),
    ("/services", "nav.services"),
    ("/portfolio", "nav.portfolio"),
    ("/blog", "nav.blog"),
    ("/shop", "nav.shop"),
    ("/contact", "nav.contact"),
];

/// Customer dashboard sidebar.
pub const CUSTOMER_NAV: &[(&str, &str)] = &[
    ("/dashboard", "dash.overview"),
    ("/dashboard/appointments", "dash.appointments"),
    ("/dashboard/quotations", "dash.quotations"),
    ("/dashboard/orders", "dash.orders"),
    ("/dashboard/messages", "dash.messages"),
];

/// Back-office sidebar for all staff.
pub const STAFF_NAV: &[(&str, &str)] = &[
    ("/admin", "admin.analytics"),
    ("/admin/appointments", "admin.appointments"),
    ("/admin/quotations", "admin.quotations"),
    ("/admin/tasks", "admin.tasks"),
    ("/admin/products", "admin.products"),
    ("/admin/orders", "admin.orders"),
    ("/admin/blog", "admin.blog"),
];

/// Back-office entries only admins see.
pub const ADMIN_NAV: &[(&str, &str)] = &[("/admin/users", "admin.users"), ("/admin/employees", "admin.employees")];

fn nav_links(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let i18n = use_i18n();
    links
        .iter()
        .map(|&(href, key)| {
            view! {
                <li>
                    <A href=href exact=true>
                        {move || i18n.t(key)}
                    </A>
                </li>
            }
        })
        .collect_view()
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let i18n = use_i18n();
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <button
            class="btn btn--icon"
            title=move || i18n.t("ui.toggle_theme")
            aria-label=move || i18n.t("ui.toggle_theme")
            on:click=move |_| {
                let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                ui.update(|u| u.dark_mode = next);
            }
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}

/// Sign-in links for visitors, account link and logout for users.
#[component]
fn AccountLinks() -> impl IntoView {
    let i18n = use_i18n();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth::sign_out(auth);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                view! {
                    <A href="/login" attr:class="site-header__link">
                        {move || i18n.t("nav.login")}
                    </A>
                    <A href="/register" attr:class="btn btn--primary">
                        {move || i18n.t("nav.register")}
                    </A>
                }
            }
        >
            <A href=move || auth.with(home_for).to_owned() attr:class="site-header__link">
                {move || auth.with(|a| a.display_name().map(str::to_owned)).unwrap_or_default()}
            </A>
            <button class="btn btn--ghost" on:click=on_logout.clone()>
                {move || i18n.t("nav.logout")}
            </button>
        </Show>
    }
}

/// Header, footer and mobile menu around public pages.
#[component]
pub fn SiteLayout() -> impl IntoView {
    let i18n = use_i18n();
    let ui = expect_context::<RwSignal<UiState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let location = use_location();

    // Close the mobile drawer whenever the route changes.
    Effect::new(move || {
        location.pathname.track();
        ui.update(UiState::close_menu);
    });

    view! {
        <div class="site">
            <header class="site-header">
                <A href="/" attr:class="site-header__brand">
                    "Forgeline"
                </A>
                <button
                    class="btn btn--icon site-header__menu-toggle"
                    aria-label=move || i18n.t("ui.menu")
                    aria-expanded=move || ui.get().menu_open.to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    "☰"
                </button>
                <nav class="site-nav" class:site-nav--open=move || ui.get().menu_open>
                    <ul>{nav_links(SITE_NAV)}</ul>
                </nav>
                <div class="site-header__actions">
                    <LanguageSwitcher/>
                    <ThemeToggle/>
                    <A href="/cart" attr:class="cart-badge">
                        {move || i18n.t("nav.cart")}
                        <Show when=move || !cart.with(CartState::is_empty)>
                            <span class="cart-badge__count">{move || cart.with(CartState::item_count)}</span>
                        </Show>
                    </A>
                    <AccountLinks/>
                </div>
            </header>
            <main class="site-main">
                <Outlet/>
            </main>
            <footer class="site-footer">
                <p class="site-footer__brand">"Forgeline Metalworks"</p>
                <p>{move || i18n.t("footer.tagline")}</p>
                <nav>
                    <A href="/contact">{move || i18n.t("nav.contact")}</A>
                    <A href="/services">{move || i18n.t("nav.services")}</A>
                </nav>
            </footer>
        </div>
    }
}

/// Sidebar shell for the customer dashboard (`admin = false`) and the
/// back-office (`admin = true`).
#[component]
pub fn DashboardLayout(#[prop(optional)] admin: bool) -> impl IntoView {
    let i18n = use_i18n();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let title_key = if admin { "admin.title" } else { "dash.title" };
    let on_logout = move |_| {
        auth::sign_out(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard" class:dashboard--collapsed=move || !ui.get().sidebar_open>
            <aside class="dashboard__sidebar">
                <A href="/" attr:class="dashboard__brand">
                    "Forgeline"
                </A>
                <nav>
                    <ul>
                        {if admin { nav_links(STAFF_NAV).into_any() } else { nav_links(CUSTOMER_NAV).into_any() }}
                        <Show when=move || admin && auth.with(AuthState::is_admin)>
                            {nav_links(ADMIN_NAV)}
                        </Show>
                    </ul>
                </nav>
            </aside>
            <div class="dashboard__body">
                <header class="dashboard__topbar">
                    <button
                        class="btn btn--icon"
                        aria-label=move || i18n.t("ui.sidebar")
                        on:click=move |_| ui.update(UiState::toggle_sidebar)
                    >
                        "☰"
                    </button>
                    <h1 class="dashboard__title">{move || i18n.t(title_key)}</h1>
                    <span class="dashboard__spacer"></span>
                    <LanguageSwitcher/>
                    <ThemeToggle/>
                    <span class="dashboard__user">
                        {move || auth.with(|a| a.display_name().map(str::to_owned)).unwrap_or_default()}
                        " · "
                        {move || auth.with(AuthState::role).map(|r| i18n.t(r.label_key())).unwrap_or_default()}
                    </span>
                    <button class="btn btn--ghost" on:click=on_logout>
                        {move || i18n.t("nav.logout")}
                    </button>
                </header>
                <section class="dashboard__content">
                    <Outlet/>
                </section>
            </div>
        </div>
    }
}
