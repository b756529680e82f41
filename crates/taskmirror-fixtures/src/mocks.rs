//! In-memory stand-ins for the remote capabilities
//!
//! Each mock is a real implementation of its capability trait backed by
//! in-memory state, so production components run against them unmodified:
//! - `MockQuery<T>`: holds the current snapshot, notifies registered
//!   observers synchronously on `configure`, counts `refetch` calls
//! - `MockToggleMutation`: configurable handler with recorded invocations;
//!   defaults to an identity echo of the requested id
//! - `MockRegistry`: owns one stand-in per capability and resets them
//!   uniformly between test cases
//!
//! Snapshot delivery happens outside the state lock, so an observer may
//! re-observe the query from inside its callback without deadlocking.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use taskmirror_api::{
    ApiError, MutationReply, OverviewPayload, QuerySnapshot, RemoteMutation, RemoteQuery,
    SnapshotObserver, TodoRecord, TodosPayload, ToggleVariables,
};

use crate::fixture::{Fixture, TodoPatch};

/// Generic query stand-in: a configurable live cell with observable refetches
pub struct MockQuery<T> {
    snapshot: Mutex<QuerySnapshot<T>>,
    observers: Mutex<Vec<Arc<dyn SnapshotObserver<T>>>>,
    refetch_calls: AtomicU64,
}

impl<T: Clone + Send + Sync + 'static> MockQuery<T> {
    pub fn new() -> Self {
        Self {
            snapshot: Mutex::new(QuerySnapshot::pending()),
            observers: Mutex::new(Vec::new()),
            refetch_calls: AtomicU64::new(0),
        }
    }

    /// Set the current snapshot and notify every registered observer.
    ///
    /// Notification is synchronous and in registration order; calling this
    /// twice with the same snapshot delivers two distinct observations.
    pub fn configure(&self, snapshot: QuerySnapshot<T>) {
        *self.snapshot.lock().unwrap() = snapshot.clone();
        let observers: Vec<_> = self.observers.lock().unwrap().clone();
        tracing::debug!(observer_count = observers.len(), "emitting mock snapshot");
        for observer in observers {
            observer.on_snapshot(&snapshot);
        }
    }

    /// Number of `refetch` calls since construction or the last reset
    pub fn refetch_count(&self) -> u64 {
        self.refetch_calls.load(Ordering::SeqCst)
    }

    /// Restore the unconfigured state: pending snapshot, no observers, no
    /// recorded refetches. Idempotent.
    pub fn reset(&self) {
        *self.snapshot.lock().unwrap() = QuerySnapshot::pending();
        self.observers.lock().unwrap().clear();
        self.refetch_calls.store(0, Ordering::SeqCst);
    }
}

impl<T: Clone + Send + Sync + 'static> Default for MockQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> RemoteQuery<T> for MockQuery<T> {
    fn snapshot(&self) -> QuerySnapshot<T> {
        self.snapshot.lock().unwrap().clone()
    }

    fn subscribe(&self, observer: Arc<dyn SnapshotObserver<T>>) {
        let current = self.snapshot.lock().unwrap().clone();
        self.observers.lock().unwrap().push(Arc::clone(&observer));
        // Per the RemoteQuery contract: a new observer sees the current
        // snapshot immediately.
        observer.on_snapshot(&current);
    }

    async fn refetch(&self) -> Result<(), ApiError> {
        self.refetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Stand-in for the todos query capability
pub type MockTodosQuery = MockQuery<TodosPayload>;

/// Stand-in for the overview query capability
pub type MockOverviewQuery = MockQuery<OverviewPayload>;

type ToggleHandler =
    dyn Fn(&ToggleVariables) -> Result<MutationReply<TodoRecord>, ApiError> + Send + Sync;

/// Stand-in for the toggle mutation capability.
///
/// The default handler echoes the requested id back as a record with
/// otherwise fixture-default fields, so happy-path tests need no setup.
pub struct MockToggleMutation {
    handler: Mutex<Arc<ToggleHandler>>,
    calls: Mutex<Vec<ToggleVariables>>,
}

impl MockToggleMutation {
    pub fn new() -> Self {
        Self {
            handler: Mutex::new(Self::echo_handler()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn echo_handler() -> Arc<ToggleHandler> {
        Arc::new(|variables| {
            Ok(MutationReply::of(TodoRecord::fixture().merge(TodoPatch {
                id: Some(variables.id.clone()),
                ..Default::default()
            })))
        })
    }

    /// Replace the handler invoked on the next executions
    pub fn configure<F>(&self, handler: F)
    where
        F: Fn(&ToggleVariables) -> Result<MutationReply<TodoRecord>, ApiError>
            + Send
            + Sync
            + 'static,
    {
        *self.handler.lock().unwrap() = Arc::new(handler);
    }

    /// Every set of variables the mutation was invoked with, in call order
    pub fn calls(&self) -> Vec<ToggleVariables> {
        self.calls.lock().unwrap().clone()
    }

    /// Restore the echo handler and clear call history. Idempotent.
    pub fn reset(&self) {
        *self.handler.lock().unwrap() = Self::echo_handler();
        self.calls.lock().unwrap().clear();
    }
}

impl Default for MockToggleMutation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteMutation<ToggleVariables, TodoRecord> for MockToggleMutation {
    async fn execute(
        &self,
        variables: ToggleVariables,
    ) -> Result<MutationReply<TodoRecord>, ApiError> {
        self.calls.lock().unwrap().push(variables.clone());
        let handler = Arc::clone(&self.handler.lock().unwrap());
        handler(&variables)
    }
}

/// One stand-in per remote capability, reset together between test cases
pub struct MockRegistry {
    pub todos_query: Arc<MockTodosQuery>,
    pub toggle_mutation: Arc<MockToggleMutation>,
    pub overview_query: Arc<MockOverviewQuery>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            todos_query: Arc::new(MockTodosQuery::new()),
            toggle_mutation: Arc::new(MockToggleMutation::new()),
            overview_query: Arc::new(MockOverviewQuery::new()),
        }
    }

    /// Clear configuration, observers and call history on all three
    /// capabilities. Run this before every independent test case.
    pub fn reset(&self) {
        tracing::debug!("resetting mock registry");
        self.todos_query.reset();
        self.toggle_mutation.reset();
        self.overview_query.reset();
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
