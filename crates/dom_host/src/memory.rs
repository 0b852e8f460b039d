//! In-memory document surface for tests and native harnesses.

use std::collections::{BTreeMap, HashMap};

use crate::{DocumentSurface, DomError, ElementId};

#[derive(Debug, Clone, Default)]
pub(crate) struct ElementRecord {
    pub(crate) tag: String,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) classes: Vec<String>,
}

/// Headless [`DocumentSurface`] implementation.
///
/// The document owns a single `body` root; elements are created detached and
/// become part of the document once appended under the body. Detaching an
/// element keeps its record (and any attributes) addressable — only
/// [`DocumentSurface::contains`] turns false — which is what lets callers
/// observe the dangling-registry-entry contract the behavior engine
/// documents.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    next_id: u64,
    body: ElementId,
    nodes: HashMap<ElementId, ElementRecord>,
}

impl MemoryDocument {
    /// Creates an empty document containing only the body root.
    pub fn new() -> Self {
        let body = ElementId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            body,
            ElementRecord {
                tag: "body".to_string(),
                ..ElementRecord::default()
            },
        );
        Self {
            next_id: 1,
            body,
            nodes,
        }
    }

    /// The document body root.
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Creates a detached element with the given tag name.
    pub fn create_element(&mut self, tag: impl Into<String>) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            ElementRecord {
                tag: tag.into(),
                ..ElementRecord::default()
            },
        );
        id
    }

    /// Moves `child` under `parent`, detaching it from any previous parent.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::ElementNotFound`] when either id is unknown.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return Err(DomError::ElementNotFound);
        }
        self.unlink(child);
        if let Some(record) = self.nodes.get_mut(&parent) {
            record.children.push(child);
        }
        if let Some(record) = self.nodes.get_mut(&child) {
            record.parent = Some(parent);
        }
        Ok(())
    }

    /// Attaches an element directly under the body root.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::ElementNotFound`] when the id is unknown.
    pub fn append_to_body(&mut self, element: ElementId) -> Result<(), DomError> {
        self.append_child(self.body, element)
    }

    /// Detaches an element (and implicitly its subtree) from the document.
    ///
    /// The element record survives: attributes stay readable and the id stays
    /// valid, mirroring a host that removed a node without telling anyone.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::ElementNotFound`] when the id is unknown.
    pub fn detach(&mut self, element: ElementId) -> Result<(), DomError> {
        if !self.nodes.contains_key(&element) {
            return Err(DomError::ElementNotFound);
        }
        self.unlink(element);
        Ok(())
    }

    /// Tag name of an element, when the id is known.
    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(&element).map(|record| record.tag.as_str())
    }

    /// Child elements in document order (empty for unknown ids).
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(&element)
            .map(|record| record.children.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn record(&self, element: ElementId) -> Option<&ElementRecord> {
        self.nodes.get(&element)
    }

    fn unlink(&mut self, element: ElementId) {
        let parent = self.nodes.get(&element).and_then(|record| record.parent);
        if let Some(parent) = parent {
            if let Some(record) = self.nodes.get_mut(&parent) {
                record.children.retain(|child| *child != element);
            }
        }
        if let Some(record) = self.nodes.get_mut(&element) {
            record.parent = None;
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSurface for MemoryDocument {
    fn contains(&self, element: ElementId) -> bool {
        if !self.nodes.contains_key(&element) {
            return false;
        }
        let mut current = element;
        loop {
            if current == self.body {
                return true;
            }
            match self.nodes.get(&current).and_then(|record| record.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element).and_then(|record| record.parent)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.nodes
            .get(&element)
            .and_then(|record| record.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(record) = self.nodes.get_mut(&element) {
            record
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, element: ElementId, name: &str) {
        if let Some(record) = self.nodes.get_mut(&element) {
            record.attributes.remove(name);
        }
    }

    fn has_class(&self, element: ElementId, name: &str) -> bool {
        self.nodes
            .get(&element)
            .is_some_and(|record| record.classes.iter().any(|class| class == name))
    }

    fn add_class(&mut self, element: ElementId, name: &str) {
        if let Some(record) = self.nodes.get_mut(&element) {
            if !record.classes.iter().any(|class| class == name) {
                record.classes.push(name.to_string());
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, name: &str) {
        if let Some(record) = self.nodes.get_mut(&element) {
            record.classes.retain(|class| class != name);
        }
    }

    fn toggle_class(&mut self, element: ElementId, name: &str) -> bool {
        if self.has_class(element, name) {
            self.remove_class(element, name);
            false
        } else {
            self.add_class(element, name);
            self.nodes.contains_key(&element)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn created_elements_start_detached() {
        let mut doc = MemoryDocument::new();
        let el = doc.create_element("div");
        assert!(!doc.contains(el));
        doc.append_to_body(el).expect("attach");
        assert!(doc.contains(el));
    }

    #[test]
    fn detach_keeps_the_record_addressable() {
        let mut doc = MemoryDocument::new();
        let el = doc.create_element("button");
        doc.append_to_body(el).expect("attach");
        doc.set_attribute(el, "aria-pressed", "true");

        doc.detach(el).expect("detach");

        assert!(!doc.contains(el));
        assert_eq!(doc.attribute(el, "aria-pressed").as_deref(), Some("true"));
    }

    #[test]
    fn detaching_a_parent_detaches_the_subtree() {
        let mut doc = MemoryDocument::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        doc.append_to_body(outer).expect("attach outer");
        doc.append_child(outer, inner).expect("attach inner");
        assert!(doc.contains(inner));

        doc.detach(outer).expect("detach");

        assert!(!doc.contains(inner));
        assert_eq!(doc.parent(inner), Some(outer));
    }

    #[test]
    fn toggle_class_reports_new_presence() {
        let mut doc = MemoryDocument::new();
        let el = doc.create_element("button");

        assert!(doc.toggle_class(el, "ui-active"));
        assert!(doc.has_class(el, "ui-active"));
        assert!(!doc.toggle_class(el, "ui-active"));
        assert!(!doc.has_class(el, "ui-active"));
    }

    #[test]
    fn operations_on_unknown_ids_are_total() {
        let mut doc = MemoryDocument::new();
        let ghost = ElementId(999);

        assert!(!doc.contains(ghost));
        assert_eq!(doc.attribute(ghost, "id"), None);
        doc.set_attribute(ghost, "id", "x");
        assert_eq!(doc.attribute(ghost, "id"), None);
        assert!(!doc.toggle_class(ghost, "ui-active"));
        assert_eq!(
            doc.append_to_body(ghost),
            Err(DomError::ElementNotFound)
        );
    }

    #[test]
    fn append_child_reparents() {
        let mut doc = MemoryDocument::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_element("span");
        doc.append_to_body(a).expect("attach a");
        doc.append_to_body(b).expect("attach b");
        doc.append_child(a, child).expect("under a");
        doc.append_child(b, child).expect("under b");

        assert_eq!(doc.children(a), &[]);
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }
}
