use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::observer::select_all;
use crate::utils::timing::Debouncer;
use crate::utils::viewport::prefers_reduced_motion;

const DEFAULT_SPEED: f64 = 0.5;
const RESIZE_QUIET_MS: u32 = 250;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Scroll-linked vertical drift for `[data-parallax-speed]` layers. Scroll
/// work is deferred to the next animation frame, so one frame covers any
/// number of scroll events; resize recomputes after a quiet period.
/// Not mounted at all under a reduced-motion preference.
pub struct ParallaxEffect {
    scroll_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut()>,
    _frame_cb: FrameCallback,
}

impl ParallaxEffect {
    pub fn mount(document: &Document) -> Option<Self> {
        if prefers_reduced_motion() {
            return None;
        }
        let layers: Vec<(HtmlElement, f64)> = select_all(document, "[data-parallax-speed]")
            .into_iter()
            .filter_map(|el| {
                let speed = el
                    .get_attribute("data-parallax-speed")
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(DEFAULT_SPEED);
                el.dyn_into::<HtmlElement>().ok().map(|el| (el, speed))
            })
            .collect();
        if layers.is_empty() {
            return None;
        }
        let window = web_sys::window()?;
        let layers = Rc::new(layers);

        let ticking = Rc::new(Cell::new(false));
        let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
        {
            let layers = layers.clone();
            let ticking = ticking.clone();
            *frame_cb.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
                apply(&layers);
                ticking.set(false);
            }));
        }

        let scroll_cb = {
            let window = window.clone();
            let ticking = ticking.clone();
            let frame_cb = frame_cb.clone();
            Closure::<dyn FnMut()>::new(move || {
                if ticking.get() {
                    return;
                }
                ticking.set(true);
                if let Some(cb) = frame_cb.borrow().as_ref() {
                    let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
                }
            })
        };
        let resize_cb = {
            let layers = layers.clone();
            let debouncer = RefCell::new(Debouncer::new(RESIZE_QUIET_MS));
            Closure::<dyn FnMut()>::new(move || {
                let layers = layers.clone();
                debouncer.borrow_mut().call(move || apply(&layers));
            })
        };

        window
            .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
            .ok()?;
        window
            .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            .ok()?;
        apply(&layers);
        Some(Self {
            scroll_cb,
            resize_cb,
            _frame_cb: frame_cb,
        })
    }
}

fn apply(layers: &[(HtmlElement, f64)]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    for (el, speed) in layers {
        let offset = -(scroll_y * speed);
        let _ = el
            .style()
            .set_property("transform", &format!("translate3d(0, {offset:.1}px, 0)"));
    }
}

impl Drop for ParallaxEffect {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.scroll_cb.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
        }
    }
}
