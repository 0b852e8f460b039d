//! Input-event model consumed by the behavior dispatch table.

use serde::{Deserialize, Serialize};

use crate::ElementId;

/// Input-event kinds routed through delegated bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Primary pointer activation (`click`).
    Click,
}

impl EventKind {
    /// DOM event name a browser host listens for.
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
        }
    }
}

/// One discrete input event targeted at an element.
///
/// Hosts build an `InputEvent` from the native event, run it through the
/// dispatch table, and read [`InputEvent::default_prevented`] back to decide
/// whether to suppress the native default action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    kind: EventKind,
    target: ElementId,
    default_prevented: bool,
}

impl InputEvent {
    /// Creates an event of the given kind targeted at `target`.
    pub fn new(kind: EventKind, target: ElementId) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    /// Convenience constructor for a click event.
    pub fn click(target: ElementId) -> Self {
        Self::new(EventKind::Click, target)
    }

    /// Event kind.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Element the event was dispatched to (the innermost target).
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// Marks the native default action as suppressed.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed the native default action.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
