//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::components::layout::{DashboardLayout, SiteLayout};
use crate::components::toast_host::ToastHost;
use crate::i18n::{self, I18n, Locale};
use crate::pages::admin::{
    analytics::AnalyticsPage, appointments::AdminAppointmentsPage, blog::AdminBlogPage, employees::EmployeesPage,
    orders::AdminOrdersPage, products::AdminProductsPage, quotations::AdminQuotationsPage, tasks::TasksPage,
    users::UsersPage,
};
use crate::pages::customer::{
    appointments::AppointmentsPage, messages::MessagesPage, orders::OrdersPage, overview::OverviewPage,
    quotations::QuotationsPage,
};
use crate::pages::{
    about::AboutPage,
    blog::{BlogPage, BlogPostPage},
    cart::CartPage,
    checkout::CheckoutPage,
    contact::ContactPage,
    home::HomePage,
    login::{LoginPage, RegisterPage},
    not_found::NotFoundPage,
    portfolio::PortfolioPage,
    services::ServicesPage,
    shop::{ProductPage, ShopPage},
};
use crate::state::{
    auth::{self, AuthState},
    cart::CartState,
    toast::ToastState,
    ui::UiState,
};
use crate::util::auth::GuardRequirement;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared stores, restores browser-held preferences once
/// mounted, and declares the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let cart = RwSignal::new(CartState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let locale = RwSignal::new(Locale::default());

    provide_context(auth);
    provide_context(cart);
    provide_context(ui);
    provide_context(toasts);
    provide_context(locale);

    // Browser-held state is read only after hydration so the first client
    // render matches the server's.
    Effect::new(move |_: Option<()>| {
        auth::restore_session(auth);
        I18n { locale }.set(i18n::initial_locale());
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    Effect::new(move |loaded: Option<bool>| {
        if loaded.is_none() {
            cart.set(CartState::load());
        }
        cart.with(CartState::save);
        true
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/forgeline.css"/>
        <Title formatter=|page: String| if page.is_empty() { "Forgeline".to_owned() } else { format!("{page} · Forgeline") }/>
        <Meta name="description" content="Forgeline metal fabrication: welding, laser cutting, custom railings and hardware."/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <ParentRoute path=StaticSegment("") view=SiteLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("shop") view=ShopPage/>
                    <Route path=(StaticSegment("shop"), ParamSegment("id")) view=ProductPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route
                        path=StaticSegment("checkout")
                        view=|| view! { <RequireAuth requirement=GuardRequirement::Authenticated><CheckoutPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <RequireAuth requirement=GuardRequirement::Guest><LoginPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <RequireAuth requirement=GuardRequirement::Guest><RegisterPage/></RequireAuth> }
                    />
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth requirement=GuardRequirement::Authenticated><DashboardLayout/></RequireAuth> }
                >
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                    <Route path=StaticSegment("quotations") view=QuotationsPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=StaticSegment("messages") view=MessagesPage/>
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("admin")
                    view=|| view! { <RequireAuth requirement=GuardRequirement::Staff><DashboardLayout admin=true/></RequireAuth> }
                >
                    <Route path=StaticSegment("") view=AnalyticsPage/>
                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <RequireAuth requirement=GuardRequirement::Admin><UsersPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("employees")
                        view=|| view! { <RequireAuth requirement=GuardRequirement::Admin><EmployeesPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("analytics")
                        view=|| view! { <RequireAuth requirement=GuardRequirement::Admin><AnalyticsPage/></RequireAuth> }
                    />
                    <Route path=StaticSegment("appointments") view=AdminAppointmentsPage/>
                    <Route path=StaticSegment("quotations") view=AdminQuotationsPage/>
                    <Route path=StaticSegment("tasks") view=TasksPage/>
                    <Route path=StaticSegment("products") view=AdminProductsPage/>
                    <Route path=StaticSegment("orders") view=AdminOrdersPage/>
                    <Route path=StaticSegment("blog") view=AdminBlogPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
