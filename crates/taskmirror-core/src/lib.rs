//! Remote-to-local synchronization core
//!
//! Keeps a UI-facing view of remotely fetched collections in step with an
//! asynchronous, possibly-stale, possibly-erroring remote source:
//! - `LocalStore`: the session-local todo state, the only shared mutable
//!   resource
//! - `SyncReconciler`: projects every todos-query snapshot into the store
//! - `MutationDispatcher`: runs the toggle mutation and merges the
//!   authoritative result back by identity
//! - `OverviewProjection`: derives a read-only stats view-model straight from
//!   the overview query, bypassing the store
//!
//! Capabilities are injected as `Arc<dyn ...>` strategy objects from
//! `taskmirror-api`; the test doubles live in `taskmirror-fixtures`.

pub mod dispatcher;
pub mod overview;
pub mod reconciler;
pub mod store;

pub use dispatcher::MutationDispatcher;
pub use overview::{OverviewProjection, OverviewView};
pub use reconciler::SyncReconciler;
pub use store::{LocalStore, TodoListView};
