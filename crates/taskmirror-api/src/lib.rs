//! Shared types and capability traits for the taskmirror core
//!
//! This crate defines the boundary between the sync/mutation core and its
//! collaborators:
//! - Data model: local entities (`Todo`, `OverviewStats`) and the remote
//!   payload shapes they are mapped from
//! - Capability traits: `RemoteQuery`, `RemoteMutation`, `SnapshotObserver`
//! - `ApiError`: structured errors crossing the capability boundary
//!
//! The concrete transport behind the capabilities is out of scope; consumers
//! receive them as `Arc<dyn ...>` strategy objects injected at construction.

use serde::{Deserialize, Serialize};

pub mod model;
pub mod query;

// Re-export model types
pub use model::{
    MutationReply, OverviewPayload, OverviewRecord, OverviewStats, Todo, TodoRecord,
    TodosPayload, ToggleVariables,
};

// Re-export capability traits and snapshot types
pub use query::{QuerySnapshot, RemoteError, RemoteMutation, RemoteQuery, SnapshotObserver};

/// Structured error types for remote capability operations.
///
/// Query failures are projected into local error state by the reconciliation
/// layer; mutation failures propagate to the caller unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl ApiError {
    /// Convenience constructor for transport-level failures
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::NetworkError {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::InternalError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = ApiError::internal("broken invariant");
        assert_eq!(err.to_string(), "Internal error: broken invariant");
    }

    #[test]
    fn test_api_error_roundtrip() {
        let err = ApiError::network("timeout");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_string(), err.to_string());
    }
}
