use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::utils::viewport::prefers_reduced_motion;

const PAUSE_EVENTS: [&str; 2] = ["mouseenter", "focusin"];
const RESUME_EVENTS: [&str; 2] = ["mouseleave", "focusout"];

/// Pauses the continuously animating partner track while it is hovered or
/// holds focus, and resumes it on leave. The animation itself is CSS.
pub struct PartnerSlider {
    track: HtmlElement,
    pause_cb: Closure<dyn FnMut()>,
    resume_cb: Closure<dyn FnMut()>,
}

impl PartnerSlider {
    pub fn mount(document: &Document) -> Option<Self> {
        let track = document
            .query_selector(".partners-track")
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;
        if prefers_reduced_motion() {
            // Terminal state: the track simply never moves.
            let _ = track.style().set_property("animation", "none");
            return None;
        }
        let pause_cb = {
            let track = track.clone();
            Closure::<dyn FnMut()>::new(move || {
                let _ = track
                    .style()
                    .set_property("animation-play-state", "paused");
            })
        };
        let resume_cb = {
            let track = track.clone();
            Closure::<dyn FnMut()>::new(move || {
                let _ = track
                    .style()
                    .set_property("animation-play-state", "running");
            })
        };
        for event in PAUSE_EVENTS {
            track
                .add_event_listener_with_callback(event, pause_cb.as_ref().unchecked_ref())
                .ok()?;
        }
        for event in RESUME_EVENTS {
            track
                .add_event_listener_with_callback(event, resume_cb.as_ref().unchecked_ref())
                .ok()?;
        }
        Some(Self {
            track,
            pause_cb,
            resume_cb,
        })
    }
}

impl Drop for PartnerSlider {
    fn drop(&mut self) {
        for event in PAUSE_EVENTS {
            let _ = self
                .track
                .remove_event_listener_with_callback(event, self.pause_cb.as_ref().unchecked_ref());
        }
        for event in RESUME_EVENTS {
            let _ = self.track.remove_event_listener_with_callback(
                event,
                self.resume_cb.as_ref().unchecked_ref(),
            );
        }
    }
}
