//! Data-attribute-driven behavior engine for the shared UI toolkit.
//!
//! The engine binds small behavior objects to host-owned elements through an
//! instance registry, and routes document-level input events to them through
//! a delegated dispatch table — one binding per component type, many elements
//! per binding. Concrete widgets live under [`components`]; the legacy
//! callback-style adapter in [`legacy`] keeps older integrations working.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod component;
pub mod components;
pub mod engine;
pub mod legacy;
pub mod registry;

pub use component::{Component, Operation};
pub use engine::{BehaviorEngine, DelegatedBinding};
pub use legacy::apply_named_operation;
pub use registry::{
    ComponentKey, InstanceRegistry, RegistryAudit, RegistryAuditEntry, SharedComponent,
};
