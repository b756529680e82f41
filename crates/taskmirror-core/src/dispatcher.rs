//! Mutation path: remote write, then local merge by identity
//!
//! The dispatcher never computes the new field values itself. It forwards the
//! toggle to the remote mutation capability and, only if the reply carries an
//! authoritative record, replaces the matching store entry with that record
//! verbatim. An empty reply is a no-op; a rejected mutation propagates to the
//! caller and never touches the store (the store's error field is reserved
//! for query-path failures).

use std::sync::Arc;

use taskmirror_api::{ApiError, RemoteMutation, TodoRecord, ToggleVariables};

use crate::store::LocalStore;

pub struct MutationDispatcher {
    mutation: Arc<dyn RemoteMutation<ToggleVariables, TodoRecord>>,
    store: LocalStore,
}

impl MutationDispatcher {
    pub fn new(
        mutation: Arc<dyn RemoteMutation<ToggleVariables, TodoRecord>>,
        store: LocalStore,
    ) -> Self {
        Self { mutation, store }
    }

    /// Toggle the completion state of `id` via the remote source
    #[tracing::instrument(name = "mutation.toggle", skip(self))]
    pub async fn toggle(&self, id: &str) -> Result<(), ApiError> {
        let reply = self.mutation.execute(ToggleVariables::new(id)).await?;

        match reply.data {
            Some(record) => {
                tracing::debug!(id = %record.id, completed = record.completed, "merging mutation result");
                self.store.update_todo(record.into());
            }
            None => {
                tracing::debug!(id, "mutation resolved without a record, leaving store unchanged");
            }
        }
        Ok(())
    }
}
