//! Best-effort `localStorage` access.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be missing (SSR, private browsing, quota). Every call degrades
//! to a no-op or `None` instead of surfacing an error, so callers treat
//! persisted values as hints rather than truth.

/// Read a string value for `key`.
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write `value` under `key`.
pub fn set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Read and deserialize a JSON value.
pub fn get_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    get(key).and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Serialize and write a JSON value.
pub fn set_json<T: serde::Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        set(key, &raw);
    }
}
