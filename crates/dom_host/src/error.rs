//! Document surface errors.

use thiserror::Error;

/// Errors for structural document mutations that name a missing element.
///
/// Read-style operations stay total (an unknown id reads as absent); only
/// structural calls such as [`crate::MemoryDocument::append_child`] report a
/// missing element explicitly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The referenced element id is unknown to this document.
    #[error("element not found in document")]
    ElementNotFound,
}
