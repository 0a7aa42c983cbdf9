//! Application state stores provided as Leptos contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `RwSignal` per store and provides it; pages and
//! components read them with `expect_context`. `remote` is the per-page
//! fetch helper rather than a global store.

pub mod auth;
pub mod cart;
pub mod remote;
pub mod toast;
pub mod ui;
