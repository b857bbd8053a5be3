use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::observer::select_all;
use crate::utils::viewport::is_touch_device;

const DIVISOR: f64 = 20.0;

/// Pointer-tracking tilt for `[data-tilt]` cards. Skipped entirely on
/// touch devices, where hover tracking only causes sticky transforms.
pub struct CardTilt {
    cards: Vec<(
        HtmlElement,
        Closure<dyn FnMut(MouseEvent)>,
        Closure<dyn FnMut(MouseEvent)>,
    )>,
}

impl CardTilt {
    pub fn mount(document: &Document) -> Option<Self> {
        if is_touch_device() {
            return None;
        }
        let elements = select_all(document, "[data-tilt]");
        if elements.is_empty() {
            return None;
        }
        let mut cards = Vec::new();
        for el in elements {
            let Ok(el) = el.dyn_into::<HtmlElement>() else {
                continue;
            };
            let on_move = {
                let el = el.clone();
                Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                    let rect = el.get_bounding_client_rect();
                    let dx = event.client_x() as f64 - (rect.left() + rect.width() / 2.0);
                    let dy = event.client_y() as f64 - (rect.top() + rect.height() / 2.0);
                    let rot_x = -(dy / DIVISOR);
                    let rot_y = dx / DIVISOR;
                    let _ = el.style().set_property(
                        "transform",
                        &format!(
                            "perspective(800px) rotateX({rot_x:.2}deg) rotateY({rot_y:.2}deg) scale(1.02)"
                        ),
                    );
                })
            };
            let on_leave = {
                let el = el.clone();
                Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
                    let _ = el.style().remove_property("transform");
                })
            };
            if el
                .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                .is_err()
            {
                continue;
            }
            let _ = el
                .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
            cards.push((el, on_move, on_leave));
        }
        (!cards.is_empty()).then_some(Self { cards })
    }
}

impl Drop for CardTilt {
    fn drop(&mut self) {
        for (el, on_move, on_leave) in &self.cards {
            let _ = el
                .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
            let _ = el.remove_event_listener_with_callback(
                "mouseleave",
                on_leave.as_ref().unchecked_ref(),
            );
        }
    }
}
