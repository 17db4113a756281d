use std::cell::RefCell;
use std::rc::Rc;

pub trait VisibilitySurface {
    fn set_visibility(&self, state: &str);
}

pub trait CanvasDocument {
    type Surface: VisibilitySurface;

    fn first_canvas(&self) -> Option<Self::Surface>;
}

pub fn apply_canvas_state<D: CanvasDocument>(document: &D, state: &str) {
    if let Some(surface) = document.first_canvas() {
        surface.set_visibility(state);
    }
}

#[derive(Clone, Default)]
pub struct MemorySurface {
    visibility: Rc<RefCell<Option<String>>>,
}

impl MemorySurface {
    pub fn visibility(&self) -> Option<String> {
        self.visibility.borrow().clone()
    }
}

impl VisibilitySurface for MemorySurface {
    fn set_visibility(&self, state: &str) {
        *self.visibility.borrow_mut() = Some(state.to_string());
    }
}

#[derive(Default)]
pub struct MemoryDocument {
    surfaces: Vec<MemorySurface>,
}

impl MemoryDocument {
    pub fn with_surfaces(count: usize) -> Self {
        Self {
            surfaces: (0..count).map(|_| MemorySurface::default()).collect(),
        }
    }

    pub fn surface(&self, index: usize) -> Option<&MemorySurface> {
        self.surfaces.get(index)
    }
}

impl CanvasDocument for MemoryDocument {
    type Surface = MemorySurface;

    fn first_canvas(&self) -> Option<MemorySurface> {
        self.surfaces.first().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_a_no_op() {
        let document = MemoryDocument::default();

        apply_canvas_state(&document, "hidden");
    }

    #[test]
    fn only_the_first_surface_changes() {
        let document = MemoryDocument::with_surfaces(3);

        apply_canvas_state(&document, "hidden");

        let first = document.surface(0).expect("surface should exist");
        assert_eq!(first.visibility(), Some("hidden".to_string()));
        assert_eq!(document.surface(1).expect("surface should exist").visibility(), None);
        assert_eq!(document.surface(2).expect("surface should exist").visibility(), None);
    }

    #[test]
    fn repeated_calls_keep_the_same_state() {
        let document = MemoryDocument::with_surfaces(1);

        apply_canvas_state(&document, "visible");
        apply_canvas_state(&document, "visible");

        let first = document.surface(0).expect("surface should exist");
        assert_eq!(first.visibility(), Some("visible".to_string()));
    }

    #[test]
    fn state_is_not_interpreted() {
        let document = MemoryDocument::with_surfaces(1);

        apply_canvas_state(&document, "collapse");

        let first = document.surface(0).expect("surface should exist");
        assert_eq!(first.visibility(), Some("collapse".to_string()));
    }
}
