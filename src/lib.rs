pub mod canvas;
pub mod storage;

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::storage::KeyValueStore;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set(key: &str, value: &str) {
    browser::BrowserStore.set(key, value);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn get(key: &str) -> Option<String> {
    browser::BrowserStore.get(key)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = canvasState)]
pub fn canvas_state(state: &str) {
    canvas::apply_canvas_state(&browser::BrowserDocument, state);
}
