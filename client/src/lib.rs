//! # forgeline-client
//!
//! Leptos front-end for the Forgeline metal-fabrication shop: the public
//! marketing site, the shop with cart and checkout, the customer dashboard
//! and the staff back-office.
//!
//! The crate builds twice. With `ssr` it is linked into the server, which
//! renders `app::shell`; with `hydrate` it compiles to WASM and takes over
//! the server-rendered DOM through [`hydrate`]. Everything that touches the
//! browser (storage, `fetch`, XHR uploads) is gated on `hydrate`.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point, called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
