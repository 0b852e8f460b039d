//! Browser adapter binding the behavior engine to the live DOM.
//!
//! `WebDocument` implements the [`dom_host::DocumentSurface`] contract over
//! `web-sys` elements, and [`install_click_listener`] registers the single
//! document-level click listener that feeds events into
//! [`behavior_runtime::BehaviorEngine`]. The crate compiles on non-wasm
//! targets so the workspace builds host-side; browser calls only execute
//! under `wasm32` in a real page.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod document;
mod listener;

pub use document::{IdAllocator, WebDocument, ELEMENT_ID_ATTRIBUTE};
pub use listener::install_click_listener;
