//! Attribute selectors for data-API bindings.

use std::fmt;

use crate::{DocumentSurface, ElementId};

/// CSS-style attribute selector, e.g. `[data-ui-toggle="button"]`.
///
/// The data-API convention drives behavior purely from markup attributes, so
/// attribute presence/value tests are the only selector form the dispatch
/// table needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    name: String,
    value: Option<String>,
}

impl AttributeSelector {
    /// Selector matching any element carrying the attribute.
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Selector matching elements whose attribute equals `value` exactly.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Attribute name the selector tests.
    pub fn attribute_name(&self) -> &str {
        &self.name
    }

    /// Whether the element matches this selector on the given surface.
    pub fn matches(&self, doc: &dyn DocumentSurface, element: ElementId) -> bool {
        match (doc.attribute(element, &self.name), &self.value) {
            (Some(_), None) => true,
            (Some(actual), Some(expected)) => actual == *expected,
            (None, _) => false,
        }
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "[{}=\"{value}\"]", self.name),
            None => write!(f, "[{}]", self.name),
        }
    }
}
