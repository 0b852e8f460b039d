//! The document surface trait and shared ancestry helpers.

use crate::{AttributeSelector, ElementId};

/// Host service exposing the element tree to behavior code.
///
/// Every operation is total over well-formed element ids: reads on an
/// unknown id report absence and writes on an unknown id are no-ops, so
/// behavior code never has to branch on host errors during event handling.
/// Elements themselves are owned by the host document; implementations hold
/// non-owning handles only.
pub trait DocumentSurface {
    /// Whether the element is currently attached to the document.
    fn contains(&self, element: ElementId) -> bool;

    /// Parent element, when the element has one.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Reads an attribute value.
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Writes an attribute value.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Removes an attribute if present.
    fn remove_attribute(&mut self, element: ElementId, name: &str);

    /// Whether the element carries the class.
    fn has_class(&self, element: ElementId, name: &str) -> bool;

    /// Adds a class (no-op when already present).
    fn add_class(&mut self, element: ElementId, name: &str);

    /// Removes a class (no-op when absent).
    fn remove_class(&mut self, element: ElementId, name: &str);

    /// Flips a class and returns its new presence, mirroring
    /// `DOMTokenList::toggle`.
    fn toggle_class(&mut self, element: ElementId, name: &str) -> bool;
}

/// Nearest ancestor-or-self of `element` matched by `selector`.
///
/// This is the resolution step delegated bindings use to map an inner event
/// target to the element that actually carries the data-API marker.
pub fn closest(
    doc: &dyn DocumentSurface,
    element: ElementId,
    selector: &AttributeSelector,
) -> Option<ElementId> {
    let mut current = Some(element);
    while let Some(candidate) = current {
        if selector.matches(doc, candidate) {
            return Some(candidate);
        }
        current = doc.parent(candidate);
    }
    None
}
