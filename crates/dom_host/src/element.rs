//! Opaque element handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identifier for one element tracked by a document surface.
///
/// Ids are allocated by the host that owns the element tree and never reused
/// for a different element within one document. The behavior engine only ever
/// compares, hashes, and stores them; it cannot reach the element without a
/// [`crate::DocumentSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
