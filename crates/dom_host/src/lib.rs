//! Typed DOM-surface contracts shared by the behavior engine and its hosts.
//!
//! This crate is the API-first boundary between behavior code and whatever
//! owns the real element tree. It exposes the opaque [`ElementId`] handle,
//! the [`DocumentSurface`] trait for attribute/class/ancestry operations,
//! attribute selectors and the input-event model, plus the headless
//! [`MemoryDocument`] used by tests and native harnesses. The concrete
//! browser adapter lives in `dom_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod element;
mod error;
mod event;
mod memory;
mod selector;
mod snapshot;
mod surface;

pub use element::ElementId;
pub use error::DomError;
pub use event::{EventKind, InputEvent};
pub use memory::MemoryDocument;
pub use selector::AttributeSelector;
pub use snapshot::ElementSnapshot;
pub use surface::{closest, DocumentSurface};
