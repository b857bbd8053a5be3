use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::utils::timing::{now_ms, Throttle};

const SCROLLED_AT_PX: f64 = 50.0;
const SCROLL_THROTTLE_MS: f64 = 100.0;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#services", "Services"),
    ("#studio", "Studio"),
    ("#work", "Work"),
    ("#partners", "Partners"),
    ("#contact", "Contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);

    // Scrolled flag, rate-limited to one check per 100ms
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if !throttle.borrow_mut().ready(now_ms()) {
                                return;
                            }
                            if let Some(win) = web_sys::window() {
                                let y = win.scroll_y().unwrap_or(0.0);
                                scrolled.set(y > SCROLLED_AT_PX);
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

    // Outside click and Escape both close the menu
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let destructor: Box<dyn FnOnce()> = if let Some(document) = document {
                    let click_cb = Closure::<dyn FnMut(MouseEvent)>::new({
                        let menu_open = menu_open.clone();
                        move |event: MouseEvent| {
                            let outside = event
                                .target()
                                .and_then(|t| t.dyn_into::<Element>().ok())
                                .map(|el| el.closest(".navbar").ok().flatten().is_none())
                                .unwrap_or(true);
                            if outside {
                                menu_open.set(false);
                            }
                        }
                    });
                    let key_cb = Closure::<dyn FnMut(KeyboardEvent)>::new({
                        move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                menu_open.set(false);
                            }
                        }
                    });
                    let _ = document.add_event_listener_with_callback(
                        "click",
                        click_cb.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click_cb.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            key_cb.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // The open menu locks page scroll behind it
    {
        use_effect_with_deps(
            move |open: &bool| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    if *open {
                        let _ = body.style().set_property("overflow", "hidden");
                    } else {
                        let _ = body.style().remove_property("overflow");
                    }
                }
                || ()
            },
            *menu_open,
        );
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-inner">
                <a class="nav-logo" href="#top">{"Vetra Studio"}</a>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={on_toggle}
                >
                    <span></span><span></span><span></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then_some("open"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <a class="nav-link" href={*href} onclick={close_menu.clone()}>{*label}</a>
                        </li>
                    }) }
                </ul>
            </div>
            <style>{NAV_CSS}</style>
        </nav>
    }
}

const NAV_CSS: &str = r#"
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}
.navbar.scrolled {
    background: rgba(16, 16, 20, 0.92);
    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.35);
    backdrop-filter: blur(8px);
}
.nav-inner {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    font-weight: 700;
    font-size: 1.2rem;
    letter-spacing: 0.04em;
    color: #fff;
    text-decoration: none;
}
.nav-menu {
    display: flex;
    gap: 1.5rem;
    list-style: none;
    margin: 0;
    padding: 0;
}
.nav-link {
    color: rgba(255, 255, 255, 0.8);
    text-decoration: none;
    transition: color 0.2s ease;
}
.nav-link:hover {
    color: #7EB2FF;
}
.nav-toggle {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 6px;
}
.nav-toggle span {
    width: 22px;
    height: 2px;
    background: #fff;
}
@media (max-width: 768px) {
    .nav-toggle {
        display: flex;
    }
    .nav-menu {
        position: fixed;
        top: 58px;
        left: 0;
        right: 0;
        bottom: 0;
        flex-direction: column;
        align-items: center;
        padding-top: 3rem;
        background: rgba(16, 16, 20, 0.98);
        transform: translateX(100%);
        transition: transform 0.3s ease;
    }
    .nav-menu.open {
        transform: translateX(0);
    }
}
"#;
