//! Error types for plain-text rendering.

use crate::node::NodeKind;

/// Error during rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A structural node is missing a field its handler requires.
    #[error("malformed {kind} node: missing `{field}`")]
    MalformedNode {
        /// Kind of the offending node.
        kind: NodeKind,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Failure reported by a custom handler.
    #[error("{0}")]
    Custom(String),
}

impl RenderError {
    pub(crate) fn missing(kind: NodeKind, field: &'static str) -> Self {
        tracing::warn!(%kind, field, "Malformed node");
        Self::MalformedNode { kind, field }
    }
}
