//! Serializable element-tree snapshots for inspection surfaces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DomError, ElementId, MemoryDocument};

/// Point-in-time view of one element subtree.
///
/// Snapshots exist for diagnostics and test assertions; they are a copy, not
/// a live handle, and serialize deterministically (attributes are ordered).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    /// Tag name.
    pub tag: String,
    /// Attributes in name order.
    pub attributes: BTreeMap<String, String>,
    /// Classes in insertion order.
    pub classes: Vec<String>,
    /// Child subtrees in document order.
    pub children: Vec<ElementSnapshot>,
}

impl MemoryDocument {
    /// Captures the subtree rooted at `element`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::ElementNotFound`] when the id is unknown.
    pub fn snapshot(&self, element: ElementId) -> Result<ElementSnapshot, DomError> {
        let record = self.record(element).ok_or(DomError::ElementNotFound)?;
        let mut children = Vec::with_capacity(record.children.len());
        for child in &record.children {
            children.push(self.snapshot(*child)?);
        }
        Ok(ElementSnapshot {
            tag: record.tag.clone(),
            attributes: record.attributes.clone(),
            classes: record.classes.clone(),
            children,
        })
    }
}

impl ElementSnapshot {
    /// Renders the snapshot as pretty JSON for inspection output.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::surface::DocumentSurface;

    #[test]
    fn snapshot_captures_attributes_classes_and_children() {
        let mut doc = MemoryDocument::new();
        let button = doc.create_element("button");
        let icon = doc.create_element("i");
        doc.append_to_body(button).expect("attach button");
        doc.append_child(button, icon).expect("attach icon");
        doc.set_attribute(button, "data-ui-toggle", "button");
        doc.add_class(button, "ui-button");

        let snapshot = doc.snapshot(button).expect("snapshot");
        assert_eq!(snapshot.tag, "button");
        assert_eq!(
            snapshot.attributes.get("data-ui-toggle").map(String::as_str),
            Some("button")
        );
        assert_eq!(snapshot.classes, vec!["ui-button".to_string()]);
        assert_eq!(snapshot.children.len(), 1);
        assert_eq!(snapshot.children[0].tag, "i");
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut doc = MemoryDocument::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "id", "root");

        let snapshot = doc.snapshot(el).expect("snapshot");
        let parsed: ElementSnapshot =
            serde_json::from_str(&snapshot.to_json()).expect("parse snapshot json");
        assert_eq!(parsed, snapshot);
    }
}
