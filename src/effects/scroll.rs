use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent};

use crate::utils::viewport::scroll_to_element;

/// Intercepts same-page anchor clicks: scrolls the section under the fixed
/// navbar and records the hash in history.
pub struct SmoothScroll {
    document: Document,
    click_cb: Closure<dyn FnMut(MouseEvent)>,
}

impl SmoothScroll {
    pub fn mount(document: &Document) -> Option<Self> {
        document.query_selector("a[href^='#']").ok()??;
        let click_cb = {
            let document = document.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok())
                else {
                    return;
                };
                let Ok(Some(anchor)) = target.closest("a[href^='#']") else {
                    return;
                };
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                let id = href.trim_start_matches('#');
                if id.is_empty() {
                    return;
                }
                let Some(section) = document.get_element_by_id(id) else {
                    return;
                };
                event.prevent_default();
                scroll_to_element(&section);
                if let Some(window) = web_sys::window() {
                    if let Ok(history) = window.history() {
                        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
                    }
                }
            })
        };
        document
            .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            document: document.clone(),
            click_cb,
        })
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.click_cb.as_ref().unchecked_ref());
    }
}
