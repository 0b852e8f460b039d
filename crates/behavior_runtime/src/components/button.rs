//! Toggle-button behavior driven by the `data-ui-toggle="button"` marker.

use std::cell::RefCell;
use std::rc::Rc;

use dom_host::{AttributeSelector, DocumentSurface, ElementId, EventKind, InputEvent};

use crate::component::{Component, Operation};
use crate::engine::{BehaviorEngine, DelegatedBinding};
use crate::registry::{ComponentKey, InstanceRegistry, SharedComponent};

/// Registry key for toggle-button instances.
pub const TOGGLE_BUTTON_KEY: ComponentKey = ComponentKey("ui.button");

/// Class marking the active state; toggled on the element so CSS and external
/// code observe and set it directly.
pub const ACTIVE_CLASS: &str = "ui-active";

/// Accessibility attribute mirroring the active state as `"true"`/`"false"`.
pub const ARIA_PRESSED: &str = "aria-pressed";

/// Data-API attribute marking toggle-enabled elements.
pub const DATA_TOGGLE_ATTRIBUTE: &str = "data-ui-toggle";

/// Data-API attribute value selecting this widget.
pub const DATA_TOGGLE_VALUE: &str = "button";

/// Selector the delegated click binding filters with.
pub fn toggle_selector() -> AttributeSelector {
    AttributeSelector::with_value(DATA_TOGGLE_ATTRIBUTE, DATA_TOGGLE_VALUE)
}

/// Toggle-button behavior bound to one element.
///
/// The two-state machine (inactive/active) lives on the element itself as
/// the [`ACTIVE_CLASS`] marker; the instance only remembers which element it
/// is bound to and whether it has been disposed.
#[derive(Debug)]
pub struct ToggleButton {
    element: ElementId,
    disposed: bool,
}

impl ToggleButton {
    /// Binds a new instance to `element`.
    ///
    /// Prefer [`attach_instance`], which registers the instance so repeated
    /// initialization reuses it instead of creating duplicates.
    pub fn attach(element: ElementId) -> Self {
        Self {
            element,
            disposed: false,
        }
    }

    /// Flips the active marker and mirrors it into [`ARIA_PRESSED`].
    pub fn toggle(&mut self, doc: &mut dyn DocumentSurface) {
        if self.disposed {
            return;
        }
        let active = doc.toggle_class(self.element, ACTIVE_CLASS);
        doc.set_attribute(self.element, ARIA_PRESSED, if active { "true" } else { "false" });
    }
}

impl Component for ToggleButton {
    fn key(&self) -> ComponentKey {
        TOGGLE_BUTTON_KEY
    }

    fn element(&self) -> ElementId {
        self.element
    }

    fn invoke(&mut self, operation: Operation, doc: &mut dyn DocumentSurface) {
        match operation {
            Operation::Toggle => self.toggle(doc),
        }
    }

    fn dispose(&mut self, _doc: &mut dyn DocumentSurface) {
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Returns the registered instance for `element`, attaching one on first use.
pub fn attach_instance(registry: &mut InstanceRegistry, element: ElementId) -> SharedComponent {
    registry.instance_or_attach_with(element, TOGGLE_BUTTON_KEY, || {
        Rc::new(RefCell::new(ToggleButton::attach(element)))
    })
}

/// Installs the delegated data-API click binding for toggle buttons.
pub fn install(engine: &mut BehaviorEngine) {
    engine.register_binding(DelegatedBinding::new(
        EventKind::Click,
        toggle_selector(),
        on_data_api_click,
    ));
}

fn on_data_api_click(
    registry: &mut InstanceRegistry,
    doc: &mut dyn DocumentSurface,
    element: ElementId,
    event: &mut InputEvent,
) {
    event.prevent_default();
    let instance = attach_instance(registry, element);
    instance.borrow_mut().invoke(Operation::Toggle, doc);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use dom_host::MemoryDocument;

    fn bound_button(doc: &mut MemoryDocument) -> ElementId {
        let el = doc.create_element("button");
        doc.append_to_body(el).expect("attach");
        el
    }

    #[test]
    fn toggle_round_trip_restores_original_state() {
        let mut doc = MemoryDocument::new();
        let el = bound_button(&mut doc);
        let mut widget = ToggleButton::attach(el);
        assert!(!doc.has_class(el, ACTIVE_CLASS));

        widget.toggle(&mut doc);
        assert!(doc.has_class(el, ACTIVE_CLASS));
        assert_eq!(doc.attribute(el, ARIA_PRESSED).as_deref(), Some("true"));

        widget.toggle(&mut doc);
        assert!(!doc.has_class(el, ACTIVE_CLASS));
        assert_eq!(doc.attribute(el, ARIA_PRESSED).as_deref(), Some("false"));
    }

    #[test]
    fn toggle_respects_externally_set_state() {
        let mut doc = MemoryDocument::new();
        let el = bound_button(&mut doc);
        // External code may set the marker directly; the widget just flips it.
        doc.add_class(el, ACTIVE_CLASS);

        let mut widget = ToggleButton::attach(el);
        widget.toggle(&mut doc);

        assert!(!doc.has_class(el, ACTIVE_CLASS));
        assert_eq!(doc.attribute(el, ARIA_PRESSED).as_deref(), Some("false"));
    }

    #[test]
    fn disposed_instances_ignore_operations() {
        let mut doc = MemoryDocument::new();
        let el = bound_button(&mut doc);
        let mut widget = ToggleButton::attach(el);

        widget.dispose(&mut doc);
        widget.dispose(&mut doc);
        assert!(widget.is_disposed());

        widget.invoke(Operation::Toggle, &mut doc);
        assert!(!doc.has_class(el, ACTIVE_CLASS));
        assert_eq!(doc.attribute(el, ARIA_PRESSED), None);
    }
}
