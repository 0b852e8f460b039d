//! Instance registry mapping (element, component type) to live behavior objects.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use dom_host::{DocumentSurface, ElementId};
use serde::Serialize;

use crate::component::Component;

/// Namespaced key identifying one component type, e.g. `ui.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentKey(pub &'static str);

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Shared handle to one behavior instance.
///
/// The whole engine runs on the single UI thread, so `Rc<RefCell<..>>` is the
/// ownership model: the registry and any in-flight handler share the same
/// instance without locking.
pub type SharedComponent = Rc<RefCell<dyn Component>>;

/// Process-wide mapping from `(element, component type)` to the bound instance.
///
/// At most one instance of a given component type exists per element. The
/// registry never owns elements; entries are removed only by explicit
/// disposal. In particular, detaching an element from the document does NOT
/// remove its entry — that matches the historical contract, and
/// [`InstanceRegistry::detached_entries`] exists so hosts can audit the
/// resulting dangling entries instead of discovering them by accident.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    entries: HashMap<(ElementId, ComponentKey), SharedComponent>,
}

impl InstanceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure lookup; no side effect.
    pub fn instance(&self, element: ElementId, key: ComponentKey) -> Option<SharedComponent> {
        self.entries.get(&(element, key)).cloned()
    }

    /// Returns the existing instance or attaches a fresh one built by `attach`.
    ///
    /// Two calls for the same `(element, key)` pair return the identical
    /// instance; `attach` runs at most once per stored entry.
    pub fn instance_or_attach_with(
        &mut self,
        element: ElementId,
        key: ComponentKey,
        attach: impl FnOnce() -> SharedComponent,
    ) -> SharedComponent {
        self.entries
            .entry((element, key))
            .or_insert_with(attach)
            .clone()
    }

    /// Deletes the mapping if present; no-op otherwise.
    pub fn remove(&mut self, element: ElementId, key: ComponentKey) {
        self.entries.remove(&(element, key));
    }

    /// Whether an instance is registered for the pair.
    pub fn contains(&self, element: ElementId, key: ComponentKey) -> bool {
        self.entries.contains_key(&(element, key))
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose element is no longer attached to the document.
    ///
    /// Diagnostic only: the entries stay registered until explicitly
    /// disposed.
    pub fn detached_entries(&self, doc: &dyn DocumentSurface) -> Vec<(ElementId, ComponentKey)> {
        let mut dangling: Vec<_> = self
            .entries
            .keys()
            .filter(|(element, _)| !doc.contains(*element))
            .copied()
            .collect();
        dangling.sort();
        dangling
    }

    /// Serializable registry audit for inspection output.
    pub fn audit(&self, doc: &dyn DocumentSurface) -> RegistryAudit {
        let mut entries: Vec<_> = self
            .entries
            .keys()
            .map(|(element, key)| RegistryAuditEntry {
                element: *element,
                component: key.0.to_string(),
                attached: doc.contains(*element),
            })
            .collect();
        entries.sort_by(|a, b| (a.element, &a.component).cmp(&(b.element, &b.component)));
        RegistryAudit { entries }
    }
}

/// One row of a [`RegistryAudit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryAuditEntry {
    /// Element the instance is bound to.
    pub element: ElementId,
    /// Component-type key.
    pub component: String,
    /// Whether the element is still attached to the document.
    pub attached: bool,
}

/// Deterministic registry dump consumed by inspection surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryAudit {
    /// Entries sorted by element id, then component key.
    pub entries: Vec<RegistryAuditEntry>,
}

impl RegistryAudit {
    /// Renders the audit as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::components::button::{self, TOGGLE_BUTTON_KEY};
    use dom_host::MemoryDocument;

    #[test]
    fn instance_or_attach_with_is_identity_stable() {
        let mut registry = InstanceRegistry::new();
        let element = ElementId(1);

        let first = button::attach_instance(&mut registry, element);
        let second = button::attach_instance(&mut registry, element);

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_without_attach_has_no_side_effect() {
        let registry = InstanceRegistry::new();
        assert!(registry.instance(ElementId(1), TOGGLE_BUTTON_KEY).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_is_a_noop_for_absent_entries() {
        let mut registry = InstanceRegistry::new();
        registry.remove(ElementId(5), TOGGLE_BUTTON_KEY);
        assert!(registry.is_empty());

        button::attach_instance(&mut registry, ElementId(5));
        registry.remove(ElementId(5), TOGGLE_BUTTON_KEY);
        registry.remove(ElementId(5), TOGGLE_BUTTON_KEY);
        assert!(registry.is_empty());
    }

    #[test]
    fn detached_elements_keep_their_entries() {
        let mut doc = MemoryDocument::new();
        let el = doc.create_element("button");
        doc.append_to_body(el).expect("attach");

        let mut registry = InstanceRegistry::new();
        button::attach_instance(&mut registry, el);
        assert!(registry.detached_entries(&doc).is_empty());

        doc.detach(el).expect("detach");

        assert!(registry.contains(el, TOGGLE_BUTTON_KEY));
        assert_eq!(registry.detached_entries(&doc), vec![(el, TOGGLE_BUTTON_KEY)]);
    }

    #[test]
    fn audit_is_sorted_and_serializable() {
        let mut doc = MemoryDocument::new();
        let first = doc.create_element("button");
        let second = doc.create_element("button");
        doc.append_to_body(second).expect("attach");

        let mut registry = InstanceRegistry::new();
        button::attach_instance(&mut registry, second);
        button::attach_instance(&mut registry, first);

        let audit = registry.audit(&doc);
        assert_eq!(audit.entries.len(), 2);
        assert_eq!(audit.entries[0].element, first);
        assert!(!audit.entries[0].attached);
        assert!(audit.entries[1].attached);
        assert!(audit.to_json().contains("ui.button"));
    }
}
