use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::timing::{now_ms, Throttle};
use crate::utils::viewport::scroll_to_y;

const SHOW_AFTER_PX: f64 = 600.0;
const SCROLL_THROTTLE_MS: f64 = 100.0;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
                    let callback = Closure::<dyn Fn()>::new({
                        let visible = visible.clone();
                        move || {
                            if !throttle.borrow_mut().ready(now_ms()) {
                                return;
                            }
                            if let Some(win) = web_sys::window() {
                                let y = win.scroll_y().unwrap_or(0.0);
                                visible.set(y > SHOW_AFTER_PX);
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_y(0.0));

    html! {
        <>
            <button
                type="button"
                class={classes!("back-to-top", (*visible).then_some("visible"))}
                aria-label="Back to top"
                onclick={onclick}
            >
                {"↑"}
            </button>
            <style>{BACK_TO_TOP_CSS}</style>
        </>
    }
}

const BACK_TO_TOP_CSS: &str = r#"
.back-to-top {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    width: 44px;
    height: 44px;
    border: none;
    border-radius: 50%;
    background: #1E90FF;
    color: #fff;
    font-size: 1.2rem;
    cursor: pointer;
    opacity: 0;
    pointer-events: none;
    transform: translateY(8px);
    transition: opacity 0.3s ease, transform 0.3s ease;
    z-index: 90;
}
.back-to-top.visible {
    opacity: 1;
    pointer-events: auto;
    transform: translateY(0);
}
"#;
