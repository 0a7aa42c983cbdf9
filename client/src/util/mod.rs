//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, theme, task spawning)
//! and pure presentation logic (formatting, validation, table paging) from
//! page and component code so both can be unit tested off-browser.

pub mod auth;
pub mod dark_mode;
pub mod format;
pub mod markdown;
pub mod storage;
pub mod table;
pub mod task;
pub mod validate;
