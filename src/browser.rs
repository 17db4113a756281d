use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Storage};

use crate::canvas::{CanvasDocument, VisibilitySurface};
use crate::storage::KeyValueStore;

fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;
    window.local_storage().ok().flatten()
}

pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(store) = local_storage() else {
            log::warn!("localStorage unavailable, dropping write for '{key}'");
            return;
        };

        if store.set_item(key, value).is_err() {
            log::warn!("localStorage rejected write for '{key}'");
        }
    }
}

pub struct BrowserDocument;

pub struct BrowserSurface {
    element: HtmlElement,
}

impl VisibilitySurface for BrowserSurface {
    fn set_visibility(&self, state: &str) {
        let _ = self.element.style().set_property("visibility", state);
    }
}

impl CanvasDocument for BrowserDocument {
    type Surface = BrowserSurface;

    fn first_canvas(&self) -> Option<BrowserSurface> {
        let document = web_sys::window()?.document()?;
        let element = document.get_elements_by_tag_name("canvas").item(0)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(BrowserSurface { element })
    }
}
