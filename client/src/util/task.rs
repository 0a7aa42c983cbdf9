//! Browser-only task spawning.

use std::future::Future;

/// Spawn `fut` on the browser event loop. On the server and in tests the
/// future is dropped unpolled, since every fetch it would make is browser-only.
pub fn spawn_browser<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
