use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Registers the offline worker. Shipped but intentionally not wired into
/// the composition root; call from the entry point when offline support
/// goes live.
pub fn register() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let secure = window
        .location()
        .protocol()
        .map(|p| p == "https:")
        .unwrap_or(false);
    if !secure {
        log::debug!("service worker skipped: not a secure context");
        return;
    }
    let container = window.navigator().service_worker();
    spawn_local(async move {
        match JsFuture::from(container.register("/sw.js")).await {
            Ok(_) => log::info!("service worker registered"),
            Err(err) => log::warn!("service worker registration failed: {err:?}"),
        }
    });
}
