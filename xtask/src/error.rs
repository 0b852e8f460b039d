//! Structured xtask error types.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// Stable error categories for xtask workflows.
///
/// Coarse by intent: they keep user-facing failures understandable without
/// exposing command-specific internals in the type itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XtaskErrorCategory {
    /// Invalid or unreadable configuration.
    Config,
    /// Invalid user input or semantically invalid request.
    Validation,
    /// Filesystem or general I/O failure.
    Io,
}

/// Structured xtask error with contextual metadata.
///
/// The display output is CLI-friendly; optional `target` and `hint` fields
/// can be attached as the error propagates so failures stay actionable at
/// the point they are shown.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XtaskError {
    /// High-level error category.
    pub category: XtaskErrorCategory,
    /// Human-readable message.
    pub message: String,
    /// Optional path target.
    pub target: Option<String>,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Convenience result type for xtask internals.
pub type XtaskResult<T> = Result<T, XtaskError>;

impl XtaskError {
    /// Creates an error with the given category and message.
    pub fn new(category: XtaskErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            target: None,
            hint: None,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Config, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Validation, message)
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Io, message)
    }

    /// Attaches a target path.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for XtaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(target) = &self.target {
            write!(f, " (target: {target})")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "\nhint: {hint}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_target_and_hint_when_attached() {
        let err = XtaskError::io("failed to read dist file")
            .with_path(Path::new("dist/js/ui-behaviors.min.js"))
            .with_hint("run the bundle build first");
        let rendered = err.to_string();
        assert!(rendered.contains("failed to read dist file"));
        assert!(rendered.contains("dist/js/ui-behaviors.min.js"));
        assert!(rendered.contains("hint: run the bundle build first"));
    }

    #[test]
    fn plain_errors_render_the_message_only() {
        let err = XtaskError::validation("unknown xtask command: frobnicate");
        assert_eq!(err.to_string(), "unknown xtask command: frobnicate");
    }
}
