//! Behavior engine: instance registry plus the delegated dispatch table.

use dom_host::{closest, AttributeSelector, DocumentSurface, ElementId, EventKind, InputEvent};

use crate::components;
use crate::registry::{ComponentKey, InstanceRegistry};

/// Handler invoked when a delegated binding matches an event.
///
/// The engine has already resolved `element` to the nearest
/// ancestor-or-self matching the binding's selector; the handler typically
/// lazily attaches an instance through the registry and invokes one behavior
/// method. Plain function pointers keep the table trivially cloneable and
/// free of captured borrows.
pub type BindingHandler =
    fn(&mut InstanceRegistry, &mut dyn DocumentSurface, ElementId, &mut InputEvent);

/// One delegated binding: a single document-level listener shared by every
/// element the selector matches.
#[derive(Debug, Clone)]
pub struct DelegatedBinding {
    kind: EventKind,
    selector: AttributeSelector,
    handler: BindingHandler,
}

impl DelegatedBinding {
    /// Creates a binding for the given event kind and selector.
    pub fn new(kind: EventKind, selector: AttributeSelector, handler: BindingHandler) -> Self {
        Self {
            kind,
            selector,
            handler,
        }
    }

    /// Event kind the binding listens for.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Selector the binding filters targets with.
    pub fn selector(&self) -> &AttributeSelector {
        &self.selector
    }
}

/// Owns the instance registry and the dispatch table.
///
/// Bindings are registered once at startup and live for the page lifetime;
/// disposing an instance never removes the shared binding for its type.
#[derive(Debug, Default)]
pub struct BehaviorEngine {
    registry: InstanceRegistry,
    bindings: Vec<DelegatedBinding>,
}

impl BehaviorEngine {
    /// Creates an engine with an empty dispatch table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with every built-in component binding installed.
    pub fn with_default_bindings() -> Self {
        let mut engine = Self::new();
        components::button::install(&mut engine);
        engine
    }

    /// Registers a delegated binding.
    ///
    /// Re-registering a binding with the same kind and selector is a no-op,
    /// so each component type keeps exactly one listener even when two hosts
    /// both run install.
    pub fn register_binding(&mut self, binding: DelegatedBinding) {
        let duplicate = self
            .bindings
            .iter()
            .any(|existing| existing.kind == binding.kind && existing.selector == binding.selector);
        if !duplicate {
            self.bindings.push(binding);
        }
    }

    /// Read access to the instance registry.
    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    /// Mutable access to the instance registry.
    pub fn registry_mut(&mut self) -> &mut InstanceRegistry {
        &mut self.registry
    }

    /// Installed bindings in registration order.
    pub fn bindings(&self) -> &[DelegatedBinding] {
        &self.bindings
    }

    /// Routes one input event through the dispatch table.
    ///
    /// For each binding of the matching kind, the event target is resolved to
    /// the nearest matching ancestor-or-self; when one exists the handler
    /// runs against it. Returns the number of handlers that ran.
    pub fn dispatch(&mut self, doc: &mut dyn DocumentSurface, event: &mut InputEvent) -> usize {
        let mut handled = 0;
        for binding in &self.bindings {
            if binding.kind != event.kind() {
                continue;
            }
            if let Some(element) = closest(doc, event.target(), &binding.selector) {
                (binding.handler)(&mut self.registry, doc, element, event);
                handled += 1;
            }
        }
        handled
    }

    /// Disposes the instance bound to `(element, key)` and unregisters it.
    ///
    /// Idempotent end to end: disposing an unknown pair, or the same pair
    /// twice, has no observable effect.
    pub fn dispose(&mut self, doc: &mut dyn DocumentSurface, element: ElementId, key: ComponentKey) {
        if let Some(instance) = self.registry.instance(element, key) {
            instance.borrow_mut().dispose(doc);
        }
        self.registry.remove(element, key);
    }
}
