use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::observer::{select_all, ViewportWatcher};
use crate::utils::viewport::prefers_reduced_motion;

const THRESHOLD: f64 = 0.15;
const ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Adds the `revealed` class to `[data-reveal]` sections the first time they
/// become sufficiently visible. Under a reduced-motion preference every
/// element is marked revealed synchronously and nothing is observed.
pub struct ScrollReveal {
    _watcher: Option<ViewportWatcher>,
}

impl ScrollReveal {
    pub fn mount(document: &Document) -> Option<Self> {
        let elements = select_all(document, "[data-reveal]");
        if elements.is_empty() {
            return None;
        }
        if prefers_reduced_motion() {
            for el in &elements {
                let _ = el.class_list().add_1("revealed");
            }
            return Some(Self { _watcher: None });
        }
        let watcher = ViewportWatcher::new(THRESHOLD, ROOT_MARGIN, |el: Element| reveal(&el))?;
        for el in &elements {
            watcher.observe(el);
        }
        Some(Self {
            _watcher: Some(watcher),
        })
    }
}

fn reveal(el: &Element) {
    if let Some(delay) = el.get_attribute("data-reveal-delay") {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let _ = html
                .style()
                .set_property("transition-delay", &format!("{delay}ms"));
        }
    }
    let _ = el.class_list().add_1("revealed");
}
