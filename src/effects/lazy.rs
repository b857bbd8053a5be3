use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use super::observer::{select_all, ViewportWatcher};
use crate::utils::viewport::in_viewport;

/// Swaps `data-src` for `src` when an image first approaches the viewport.
/// Images already on screen at mount load immediately.
pub struct LazyImages {
    _watcher: Option<ViewportWatcher>,
}

impl LazyImages {
    pub fn mount(document: &Document) -> Option<Self> {
        let images = select_all(document, "img[data-src]");
        if images.is_empty() {
            return None;
        }
        let watcher = ViewportWatcher::new(0.0, "200px 0px", |el: Element| load(&el))?;
        let mut watching = false;
        for el in &images {
            if in_viewport(el) {
                load(el);
            } else {
                watcher.observe(el);
                watching = true;
            }
        }
        Some(Self {
            _watcher: watching.then_some(watcher),
        })
    }
}

fn load(el: &Element) {
    let Some(img) = el.dyn_ref::<HtmlImageElement>() else {
        return;
    };
    if let Some(src) = el.get_attribute("data-src") {
        img.set_src(&src);
        let _ = el.remove_attribute("data-src");
        let _ = el.class_list().add_1("loaded");
    }
}
