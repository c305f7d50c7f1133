//! Error types shared by the diagram model, the move operators and the search engine.
use thiserror::Error;

use crate::diagram::{Endpoint, NodeId, SanityError};

/// Failures of diagram operations.
///
/// Move *finders* never produce these: they return an empty candidate list instead.
/// Executors return [`DiagramError::Precondition`] when handed a location that does not match
/// the move's local pattern, which indicates a logic error in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("endpoint {0} not found")]
    EndpointNotFound(Endpoint),

    #[error("structural error: {0}")]
    Structural(String),

    #[error("orientation mismatch (diagram oriented: {oriented})")]
    OrientationMismatch { oriented: bool },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("diagram is frozen or locked")]
    Immutable,

    #[error("move precondition violated: {0}")]
    Precondition(String),

    #[error("move family {0} is disabled by the search configuration")]
    Configuration(String),

    #[error(transparent)]
    Sanity(#[from] SanityError),
}

pub type DiagramResult<T> = Result<T, DiagramError>;

pub(crate) fn precondition<T>(message: impl Into<String>) -> DiagramResult<T> {
    Err(DiagramError::Precondition(message.into()))
}
