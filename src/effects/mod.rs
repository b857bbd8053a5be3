pub mod counters;
pub mod lazy;
pub mod observer;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod slider;
pub mod tilt;

use web_sys::Document;
use yew::Callback;

use crate::a11y::AccessibilityHelpers;
use crate::utils::perf::PerformanceMonitor;

/// Everything the composition root may end up owning. Each variant's
/// controller detaches its listeners, observers and timers when dropped.
pub enum PageEffect {
    Reveal(reveal::ScrollReveal),
    Counters(counters::AnimatedCounters),
    Lazy(lazy::LazyImages),
    Parallax(parallax::ParallaxEffect),
    Tilt(tilt::CardTilt),
    Slider(slider::PartnerSlider),
    Anchors(scroll::SmoothScroll),
    Accessibility(AccessibilityHelpers),
    Performance(PerformanceMonitor),
}

/// Mounts whichever behaviors find their markup. A page without some marker
/// simply produces fewer entries; no single miss prevents the rest.
pub fn mount_all(document: &Document, on_pointer_mode: Callback<bool>) -> Vec<PageEffect> {
    let mut effects = Vec::new();
    if let Some(e) = reveal::ScrollReveal::mount(document) {
        effects.push(PageEffect::Reveal(e));
    }
    if let Some(e) = counters::AnimatedCounters::mount(document) {
        effects.push(PageEffect::Counters(e));
    }
    if let Some(e) = lazy::LazyImages::mount(document) {
        effects.push(PageEffect::Lazy(e));
    }
    if let Some(e) = parallax::ParallaxEffect::mount(document) {
        effects.push(PageEffect::Parallax(e));
    }
    if let Some(e) = tilt::CardTilt::mount(document) {
        effects.push(PageEffect::Tilt(e));
    }
    if let Some(e) = slider::PartnerSlider::mount(document) {
        effects.push(PageEffect::Slider(e));
    }
    if let Some(e) = scroll::SmoothScroll::mount(document) {
        effects.push(PageEffect::Anchors(e));
    }
    if let Some(e) = AccessibilityHelpers::mount(document, on_pointer_mode) {
        effects.push(PageEffect::Accessibility(e));
    }
    if let Some(e) = PerformanceMonitor::mount() {
        effects.push(PageEffect::Performance(e));
    }
    log::debug!("mounted {} page effects", effects.len());
    effects
}
