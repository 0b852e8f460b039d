//! Callback-style adapter kept for pre-data-API integrations.
//!
//! Older call sites drive widgets by passing a string operation name across a
//! collection of matched elements. The adapter parses the name once at the
//! boundary and silently ignores anything unrecognized — deliberate
//! permissiveness carried over from the original plugin surface, not a
//! defect.

use dom_host::{DocumentSurface, ElementId};

use crate::component::Operation;
use crate::components::button;
use crate::engine::BehaviorEngine;

/// Applies a named operation to each element's bound toggle-button instance.
///
/// Each element gets (or lazily attaches) its own instance, so N elements
/// produce N independent transitions. Returns the number of invocations,
/// which is zero when the name is unrecognized.
pub fn apply_named_operation(
    engine: &mut BehaviorEngine,
    doc: &mut dyn DocumentSurface,
    elements: &[ElementId],
    name: &str,
) -> usize {
    let Some(operation) = Operation::parse(name) else {
        return 0;
    };
    let mut applied = 0;
    for &element in elements {
        let instance = button::attach_instance(engine.registry_mut(), element);
        instance.borrow_mut().invoke(operation, doc);
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::components::button::{ACTIVE_CLASS, ARIA_PRESSED, TOGGLE_BUTTON_KEY};
    use dom_host::MemoryDocument;

    fn buttons(doc: &mut MemoryDocument, count: usize) -> Vec<ElementId> {
        (0..count)
            .map(|_| {
                let el = doc.create_element("button");
                doc.append_to_body(el).expect("attach");
                el
            })
            .collect()
    }

    #[test]
    fn toggle_applies_one_transition_per_element() {
        let mut doc = MemoryDocument::new();
        let elements = buttons(&mut doc, 3);
        let mut engine = BehaviorEngine::with_default_bindings();

        let applied = apply_named_operation(&mut engine, &mut doc, &elements, "toggle");

        assert_eq!(applied, 3);
        for &el in &elements {
            assert!(doc.has_class(el, ACTIVE_CLASS));
            assert_eq!(doc.attribute(el, ARIA_PRESSED).as_deref(), Some("true"));
            assert!(engine.registry().contains(el, TOGGLE_BUTTON_KEY));
        }
        assert_eq!(engine.registry().len(), 3);
    }

    #[test]
    fn instances_are_independent_per_element() {
        let mut doc = MemoryDocument::new();
        let elements = buttons(&mut doc, 2);
        let mut engine = BehaviorEngine::with_default_bindings();

        apply_named_operation(&mut engine, &mut doc, &elements, "toggle");
        apply_named_operation(&mut engine, &mut doc, &elements[..1], "toggle");

        assert!(!doc.has_class(elements[0], ACTIVE_CLASS));
        assert!(doc.has_class(elements[1], ACTIVE_CLASS));
    }

    #[test]
    fn unrecognized_names_produce_zero_transitions_and_no_error() {
        let mut doc = MemoryDocument::new();
        let elements = buttons(&mut doc, 2);
        let mut engine = BehaviorEngine::with_default_bindings();

        let applied = apply_named_operation(&mut engine, &mut doc, &elements, "show");

        assert_eq!(applied, 0);
        for &el in &elements {
            assert!(!doc.has_class(el, ACTIVE_CLASS));
        }
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn empty_collection_is_a_noop() {
        let mut doc = MemoryDocument::new();
        let mut engine = BehaviorEngine::with_default_bindings();
        assert_eq!(apply_named_operation(&mut engine, &mut doc, &[], "toggle"), 0);
    }
}
