pub mod a11y;
pub mod app;
pub mod components;
pub mod context;
pub mod effects;
pub mod utils;

use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point, called by the module loader once the document is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
