//! Error types for the Tutor IA PAES dashboard.

use thiserror::Error;

/// Errors that can occur while validating the navigation catalog.
///
/// The catalog is static configuration; these errors surface at construction
/// time rather than as undefined behavior in the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavConfigError {
    /// Two entries share a label. Labels key the rendered rows and must be unique.
    #[error("duplicate navigation label: {0}")]
    DuplicateLabel(String),
    /// More than one entry carries a route. The shell exposes a single
    /// activatable destination; everything else is a placeholder.
    #[error("navigation catalog allows at most one linked entry, found {0}")]
    MultipleLinks(usize),
}
