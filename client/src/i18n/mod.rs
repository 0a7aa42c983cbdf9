//! UI string lookup.
//!
//! DESIGN
//! ======
//! Strings live in static `(key, text)` tables per locale. Lookup falls back
//! from the active locale to English and finally to the key itself, so a
//! missing translation shows up as a readable key instead of an empty label.
//! The active locale is a `RwSignal<Locale>` context; `I18n::t` reads it
//! reactively so labels re-render when the user switches language.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod en;
mod es;

use leptos::prelude::*;

use crate::util::storage;

/// `localStorage` key for the chosen locale.
pub const LOCALE_KEY: &str = "forgeline_locale";

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// BCP 47 language tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Parse a tag such as `"es"`, `"es-MX"` or `"EN_us"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let primary = raw.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.tag() == primary)
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => en::ENTRIES,
            Locale::Es => es::ENTRIES,
        }
    }
}

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up `key` for `locale`, falling back to English, then to the key.
#[must_use]
pub fn translate(locale: Locale, key: &'static str) -> &'static str {
    find(locale.table(), key).or_else(|| find(en::ENTRIES, key)).unwrap_or(key)
}

/// Saved locale preference, else the browser language, else English.
pub fn initial_locale() -> Locale {
    if let Some(saved) = storage::get(LOCALE_KEY).as_deref().and_then(Locale::parse) {
        return saved;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Some(lang) = web_sys::window().and_then(|w| w.navigator().language()) {
            if let Some(locale) = Locale::parse(&lang) {
                return locale;
            }
        }
    }
    Locale::default()
}

/// Persist `locale` and mirror it on `<html lang>`.
pub fn persist(locale: Locale) {
    storage::set(LOCALE_KEY, locale.tag());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("lang", locale.tag());
        }
    }
}

/// Copyable handle over the locale context.
#[derive(Clone, Copy)]
pub struct I18n {
    pub locale: RwSignal<Locale>,
}

impl I18n {
    /// Reactive lookup; call inside a closure in `view!`.
    pub fn t(self, key: &'static str) -> &'static str {
        translate(self.locale.get(), key)
    }

    /// Non-tracking lookup for event handlers.
    pub fn t_untracked(self, key: &'static str) -> &'static str {
        translate(self.locale.get_untracked(), key)
    }

    pub fn set(self, locale: Locale) {
        self.locale.set(locale);
        persist(locale);
    }
}

/// Fetch the `I18n` handle from context.
pub fn use_i18n() -> I18n {
    I18n { locale: expect_context::<RwSignal<Locale>>() }
}
