//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site and dashboard chrome plus shared widgets, reading
//! and writing shared state from the Leptos context providers in `app`.

pub mod cards;
pub mod charts;
pub mod confirm_dialog;
pub mod feedback;
pub mod file_field;
pub mod form;
pub mod guard;
pub mod language_switcher;
pub mod layout;
pub mod page_hero;
pub mod pagination;
pub mod status_badge;
pub mod toast_host;
