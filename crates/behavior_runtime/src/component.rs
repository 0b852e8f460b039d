//! Shared component lifecycle capability and the closed operation set.

use std::fmt;

use dom_host::{DocumentSurface, ElementId};

use crate::registry::ComponentKey;

/// Operations a component can be asked to perform by name-driven surfaces.
///
/// This is the closed replacement for the historical string-operation
/// dispatch: callers parse once at the boundary and unrecognized names are
/// ignored there rather than deep inside a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Flip the active marker of a toggle widget.
    Toggle,
}

impl Operation {
    /// Parses a legacy operation name; unknown names yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "toggle" => Some(Self::Toggle),
            _ => None,
        }
    }

    /// Canonical operation name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability set every concrete widget implements.
///
/// Construction is widget-specific (each widget exposes an `attach`
/// constructor and registers itself in the [`crate::InstanceRegistry`] under
/// its key); everything after construction flows through this trait.
pub trait Component: fmt::Debug {
    /// Component-type key the instance is registered under.
    fn key(&self) -> ComponentKey;

    /// Element this instance is bound to (non-owning back-reference).
    fn element(&self) -> ElementId;

    /// Performs one operation against the document surface.
    ///
    /// Disposed instances ignore all operations.
    fn invoke(&mut self, operation: Operation, doc: &mut dyn DocumentSurface);

    /// Releases per-instance state.
    ///
    /// Idempotent: a second call, or a call on an already-disposed instance,
    /// has no observable effect. Registry removal is the engine's job — see
    /// [`crate::BehaviorEngine::dispose`].
    fn dispose(&mut self, doc: &mut dyn DocumentSurface);

    /// Whether the instance has been disposed.
    fn is_disposed(&self) -> bool;
}
