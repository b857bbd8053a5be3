use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

/// Logs navigation and first-paint timings once after the page has loaded.
/// Purely observational; nothing reads the numbers back.
pub struct PerformanceMonitor {
    _load_cb: Option<Closure<dyn FnMut()>>,
}

impl PerformanceMonitor {
    pub fn mount() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        if document.ready_state() == "complete" {
            report();
            return Some(Self { _load_cb: None });
        }
        let load_cb = Closure::<dyn FnMut()>::new(report);
        let mut options = AddEventListenerOptions::new();
        options.once(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "load",
                load_cb.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self {
            _load_cb: Some(load_cb),
        })
    }
}

fn report() {
    let Some(perf) = web_sys::window().and_then(|w| w.performance()) else {
        return;
    };
    let timing = perf.timing();
    let start = timing.navigation_start();
    let dom_ready = timing.dom_content_loaded_event_end();
    if dom_ready > 0.0 {
        log::info!("dom ready: {:.0}ms", dom_ready - start);
    }
    let load_end = timing.load_event_end();
    if load_end > 0.0 {
        log::info!("page load: {:.0}ms", load_end - start);
    }
    for entry in perf.get_entries_by_type("paint").iter() {
        let Ok(entry) = entry.dyn_into::<web_sys::PerformanceEntry>() else {
            continue;
        };
        if entry.name() == "first-contentful-paint" {
            log::info!("first contentful paint: {:.0}ms", entry.start_time());
        }
    }
}
