use web_sys::{Element, ScrollBehavior, ScrollToOptions};

/// Fixed navbar height, compensated for when jumping to anchors.
pub const SCROLL_OFFSET_PX: f64 = 72.0;

/// True when the user asked the OS to minimize motion.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|q| q.matches())
        .unwrap_or(false)
}

pub fn is_touch_device() -> bool {
    web_sys::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}

/// Whether any part of the element is currently inside the visual viewport.
pub fn in_viewport(el: &Element) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let rect = el.get_bounding_client_rect();
    rect.top() < height && rect.bottom() > 0.0
}

pub fn scroll_to_y(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut options = ScrollToOptions::new();
    options.top(top);
    options.behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scrolls a section under the fixed navbar.
pub fn scroll_to_element(el: &Element) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top = el.get_bounding_client_rect().top() + page_offset - SCROLL_OFFSET_PX;
    scroll_to_y(top.max(0.0));
}
