use yew::prelude::*;

/// Capabilities shared across the page, owned by the composition root.
/// Passed down explicitly instead of living in module-level globals.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    /// Pushes a message to the assistive-technology live region.
    pub announce: Callback<String>,
    /// True while the user is driving the page with a pointer rather than
    /// the keyboard.
    pub pointer_mode: bool,
}
