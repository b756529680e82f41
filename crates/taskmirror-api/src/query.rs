//! Capability traits for remote reads and writes
//!
//! The remote source is consumed through two abstract capabilities:
//! - `RemoteQuery<T>`: a live, push-updated cell exposing the latest
//!   `QuerySnapshot<T>` plus a manual `refetch` trigger
//! - `RemoteMutation<V, R>`: an asynchronous write returning an authoritative
//!   updated record
//!
//! Change propagation is an explicit observer registration: implementations
//! invoke every registered `SnapshotObserver` synchronously on each new
//! snapshot, with no implicit re-entrancy. A newly registered observer is
//! handed the current snapshot immediately, then every subsequent one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::model::MutationReply;
use crate::ApiError;

/// Error as reported inside a query snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Instantaneous observation of a remote query.
///
/// `data`, `loading` and `error` carry no partial-field ordering guarantee
/// between each other on a given observation; consumers project each field
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySnapshot<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<RemoteError>,
}

impl<T> QuerySnapshot<T> {
    /// A query that has been issued but not yet resolved
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// A query that resolved successfully with `data`
    pub fn resolved(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    /// A query that failed with the given error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(RemoteError::new(message)),
        }
    }
}

/// Callback invoked on every new snapshot of a `RemoteQuery`
pub trait SnapshotObserver<T>: Send + Sync {
    fn on_snapshot(&self, snapshot: &QuerySnapshot<T>);
}

/// Abstract asynchronous read capability.
///
/// Conceptually a live cell: `snapshot()` re-observes the current value,
/// `subscribe()` registers for push updates, `refetch()` asks the remote
/// source for a fresh resolution.
#[async_trait]
pub trait RemoteQuery<T>: Send + Sync {
    /// Observe the current snapshot
    fn snapshot(&self) -> QuerySnapshot<T>;

    /// Register an observer.
    ///
    /// The observer receives the current snapshot synchronously during
    /// registration, then every later snapshot in emission order.
    fn subscribe(&self, observer: Arc<dyn SnapshotObserver<T>>);

    /// Trigger a re-fetch; resolves when the underlying request resolves.
    ///
    /// The refreshed data arrives through the snapshot stream, not through
    /// this return value.
    async fn refetch(&self) -> Result<(), ApiError>;
}

/// Abstract asynchronous write capability
#[async_trait]
pub trait RemoteMutation<V, R>: Send + Sync
where
    V: Send + 'static,
    R: Send + 'static,
{
    async fn execute(&self, variables: V) -> Result<MutationReply<R>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_constructors() {
        let snap: QuerySnapshot<u32> = QuerySnapshot::pending();
        assert!(snap.data.is_none());
        assert!(snap.loading);
        assert!(snap.error.is_none());

        let snap = QuerySnapshot::resolved(7u32);
        assert_eq!(snap.data, Some(7));
        assert!(!snap.loading);
        assert!(snap.error.is_none());

        let snap: QuerySnapshot<u32> = QuerySnapshot::failed("boom");
        assert!(snap.data.is_none());
        assert!(!snap.loading);
        assert_eq!(snap.error.unwrap().message, "boom");
    }
}
