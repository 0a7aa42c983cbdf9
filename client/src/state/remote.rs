//! Loading/error/data triple for page-level fetches.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Page data fetched from the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Remote<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> Remote<T> {
    /// Mark a fetch in flight. Keeps stale data visible while reloading.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// In flight with nothing to show yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.loading && self.data.is_none()
    }
}

impl<T> Remote<Vec<T>> {
    /// Apply `f` to the loaded list, if any.
    pub fn edit(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        if let Some(items) = self.data.as_mut() {
            f(items);
        }
    }

    /// Replace the item matching `pred` with `item`, or prepend it.
    pub fn upsert(&mut self, item: T, pred: impl Fn(&T) -> bool) {
        let items = self.data.get_or_insert_with(Vec::new);
        match items.iter_mut().find(|existing| pred(existing)) {
            Some(slot) => *slot = item,
            None => items.insert(0, item),
        }
    }
}

/// Run `fut` and store its outcome in `signal`.
pub fn load<T, Fut>(signal: RwSignal<Remote<T>>, fut: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    signal.update(Remote::start);
    crate::util::task::spawn_browser(async move {
        let result = fut.await;
        signal.update(|s| s.finish(result));
    });
}
