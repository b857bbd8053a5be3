use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Document, HtmlElement, KeyboardEvent};
use yew::prelude::*;

/// Window-level escape broadcast, for any component that wants a page-wide
/// dismiss signal. Nothing subscribes today; the capability is kept.
pub const ESCAPE_EVENT: &str = "site:escape";

#[function_component(SkipLink)]
pub fn skip_link() -> Html {
    let onclick = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(main) = document.get_element_by_id("main-content") {
            if let Some(main) = main.dyn_ref::<HtmlElement>() {
                let _ = main.focus();
            }
            main.scroll_into_view();
        }
    });
    html! {
        <a class="skip-link" href="#main-content" onclick={onclick}>{"Skip to content"}</a>
    }
}

#[derive(Properties, PartialEq)]
pub struct LiveRegionProps {
    pub message: String,
}

/// Visually hidden polite live region; screen readers announce whatever the
/// shared context's `announce` writes here.
#[function_component(LiveRegion)]
pub fn live_region(props: &LiveRegionProps) -> Html {
    html! {
        <div class="sr-only" role="status" aria-live="polite">{ props.message.clone() }</div>
    }
}

/// Document-level input-modality tracking plus the escape broadcast. The
/// `using-mouse` body class suppresses focus outlines for pointer users;
/// a Tab keypress restores them.
pub struct AccessibilityHelpers {
    document: Document,
    mousedown_cb: Closure<dyn FnMut()>,
    keydown_cb: Closure<dyn FnMut(KeyboardEvent)>,
}

impl AccessibilityHelpers {
    pub fn mount(document: &Document, on_pointer_mode: Callback<bool>) -> Option<Self> {
        let body = document.body()?;
        let mousedown_cb = {
            let body = body.clone();
            let on_pointer_mode = on_pointer_mode.clone();
            Closure::<dyn FnMut()>::new(move || {
                let _ = body.class_list().add_1("using-mouse");
                on_pointer_mode.emit(true);
            })
        };
        let keydown_cb = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            match event.key().as_str() {
                "Tab" => {
                    let _ = body.class_list().remove_1("using-mouse");
                    on_pointer_mode.emit(false);
                }
                "Escape" => {
                    if let Some(window) = web_sys::window() {
                        if let Ok(event) = CustomEvent::new(ESCAPE_EVENT) {
                            let _ = window.dispatch_event(&event);
                        }
                    }
                }
                _ => {}
            }
        });
        document
            .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
            .ok()?;
        document
            .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            document: document.clone(),
            mousedown_cb,
            keydown_cb,
        })
    }
}

impl Drop for AccessibilityHelpers {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "mousedown",
            self.mousedown_cb.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "keydown",
            self.keydown_cb.as_ref().unchecked_ref(),
        );
    }
}
