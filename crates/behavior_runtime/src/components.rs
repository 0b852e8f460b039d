//! Concrete widget behaviors shipped with the toolkit.

pub mod button;
