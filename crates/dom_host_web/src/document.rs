//! `DocumentSurface` implementation over live `web-sys` elements.

use std::collections::HashMap;

use dom_host::{DocumentSurface, ElementId};

/// Attribute carrying an element's allocated id for reverse lookup.
///
/// The id attribute is the only thing stored on the node itself; instance
/// state lives in the engine-side registry.
pub const ELEMENT_ID_ATTRIBUTE: &str = "data-ui-element-id";

/// Monotonic element-id allocator.
///
/// Ids start at 1 and are never reused within one `WebDocument`, so a handle
/// observed by behavior code stays stable for the page lifetime.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next id.
    pub fn next_id(&mut self) -> ElementId {
        self.next += 1;
        ElementId(self.next)
    }
}

/// Live-DOM document surface.
///
/// Elements become visible to behavior code once adopted: adoption allocates
/// an [`ElementId`], tags the node with [`ELEMENT_ID_ATTRIBUTE`], and stores
/// a non-owning handle for id-based access. The browser document keeps
/// owning the elements; dropping a `WebDocument` never detaches anything.
#[derive(Debug, Default)]
pub struct WebDocument {
    ids: IdAllocator,
    elements: HashMap<u64, web_sys::Element>,
}

impl WebDocument {
    /// Creates an adapter with no adopted elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts one element, reusing its existing id when already tagged.
    pub fn adopt(&mut self, element: &web_sys::Element) -> ElementId {
        if let Some(existing) = tagged_id(element) {
            self.elements.entry(existing.0).or_insert_with(|| element.clone());
            return existing;
        }
        let id = self.ids.next_id();
        let _ = element.set_attribute(ELEMENT_ID_ATTRIBUTE, &id.0.to_string());
        self.elements.insert(id.0, element.clone());
        id
    }

    /// Adopts an element together with its ancestor chain.
    ///
    /// Delegated dispatch resolves targets upward with `closest`, so every
    /// ancestor must be addressable before the event enters the engine.
    pub fn adopt_with_ancestors(&mut self, element: &web_sys::Element) -> ElementId {
        let id = self.adopt(element);
        let mut current = element.parent_element();
        while let Some(ancestor) = current {
            self.adopt(&ancestor);
            current = ancestor.parent_element();
        }
        id
    }

    fn element(&self, id: ElementId) -> Option<&web_sys::Element> {
        self.elements.get(&id.0)
    }
}

fn tagged_id(element: &web_sys::Element) -> Option<ElementId> {
    element
        .get_attribute(ELEMENT_ID_ATTRIBUTE)
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(ElementId)
}

impl DocumentSurface for WebDocument {
    fn contains(&self, element: ElementId) -> bool {
        self.element(element)
            .is_some_and(|el| el.is_connected())
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.element(element)
            .and_then(|el| el.parent_element())
            .and_then(|parent| tagged_id(&parent))
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element).and_then(|el| el.get_attribute(name))
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(el) = self.element(element) {
            let _ = el.set_attribute(name, value);
        }
    }

    fn remove_attribute(&mut self, element: ElementId, name: &str) {
        if let Some(el) = self.element(element) {
            let _ = el.remove_attribute(name);
        }
    }

    fn has_class(&self, element: ElementId, name: &str) -> bool {
        self.element(element)
            .is_some_and(|el| el.class_list().contains(name))
    }

    fn add_class(&mut self, element: ElementId, name: &str) {
        if let Some(el) = self.element(element) {
            let _ = el.class_list().add_1(name);
        }
    }

    fn remove_class(&mut self, element: ElementId, name: &str) {
        if let Some(el) = self.element(element) {
            let _ = el.class_list().remove_1(name);
        }
    }

    fn toggle_class(&mut self, element: ElementId, name: &str) -> bool {
        self.element(element)
            .and_then(|el| el.class_list().toggle(name).ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // DOM-backed adoption paths need a browser; host-side coverage stops at
    // the allocator.
    #[test]
    fn allocator_ids_are_monotonic_and_start_at_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), ElementId(1));
        assert_eq!(ids.next_id(), ElementId(2));
        assert_eq!(ids.next_id(), ElementId(3));
    }

    #[test]
    fn unadopted_ids_read_as_absent() {
        let doc = WebDocument::new();
        assert!(!doc.contains(ElementId(1)));
        assert_eq!(doc.attribute(ElementId(1), "id"), None);
        assert_eq!(doc.parent(ElementId(1)), None);
    }
}
