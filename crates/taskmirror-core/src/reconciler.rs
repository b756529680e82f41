//! Remote-to-local reconciliation for the todo collection
//!
//! `SyncReconciler` is the observer registered on the todos query: every
//! snapshot the query emits is projected into `LocalStore` as three
//! independent writes (collection, loading flag, error message), each applied
//! exactly once per observation, in receipt order.
//!
//! There is deliberately no request-epoch or staleness guard here: if a slow
//! earlier request resolves after a fast later one, its data overwrites the
//! newer result. This mirrors the observed arrival-order semantics of the
//! remote cell and is a documented limitation, not an invariant.

use std::sync::Arc;

use taskmirror_api::{
    ApiError, QuerySnapshot, RemoteQuery, SnapshotObserver, Todo, TodosPayload,
};

use crate::store::LocalStore;

pub struct SyncReconciler {
    query: Arc<dyn RemoteQuery<TodosPayload>>,
    store: LocalStore,
}

impl SyncReconciler {
    /// Build a reconciler and register it on `query`.
    ///
    /// Registration synchronously delivers the query's current snapshot, so
    /// the store reflects the remote state as soon as this returns.
    pub fn attach(query: Arc<dyn RemoteQuery<TodosPayload>>, store: LocalStore) -> Arc<Self> {
        let reconciler = Arc::new(Self {
            query: Arc::clone(&query),
            store,
        });
        query.subscribe(Arc::clone(&reconciler) as Arc<dyn SnapshotObserver<TodosPayload>>);
        reconciler
    }

    /// Ask the remote source for a fresh todo collection.
    ///
    /// Resolves when the underlying refetch resolves; the refreshed data
    /// arrives through the snapshot stream, not through this return value.
    #[tracing::instrument(name = "sync.load_todos", skip(self))]
    pub async fn load_todos(&self) -> Result<(), ApiError> {
        self.query.refetch().await
    }
}

impl SnapshotObserver<TodosPayload> for SyncReconciler {
    fn on_snapshot(&self, snapshot: &QuerySnapshot<TodosPayload>) {
        tracing::debug!(
            has_data = snapshot.data.is_some(),
            loading = snapshot.loading,
            has_error = snapshot.error.is_some(),
            "projecting todos snapshot"
        );

        // Three independent projections; none gates another.
        if let Some(payload) = &snapshot.data {
            let todos: Vec<Todo> = payload.todos.iter().cloned().map(Todo::from).collect();
            self.store.set_todos(todos);
        }
        self.store.set_loading(snapshot.loading);
        self.store
            .set_error(snapshot.error.as_ref().map(|e| e.message.clone()));
    }
}
