//! Dark mode initialization and toggle.
//!
//! The stored preference wins; without one the system color scheme decides.
//! The result is reflected as `data-theme` on `<html>` so the stylesheet can
//! switch palettes without re-rendering.
//!
//! TRADE-OFFS
//! ==========
//! SSR always renders the light theme. The client applies the real
//! preference after hydration, which can flash once on first paint.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

pub const DARK_MODE_KEY: &str = "forgeline_dark";

/// Stored preference, else `prefers-color-scheme: dark`.
#[must_use]
pub fn read_preference() -> bool {
    if let Some(stored) = storage::get(DARK_MODE_KEY) {
        return stored == "true";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

#[must_use]
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Flip, apply and persist. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::set(DARK_MODE_KEY, if next { "true" } else { "false" });
    next
}
