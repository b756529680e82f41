//! Read-only projection of the overview query
//!
//! Unlike the todo path, the overview bypasses `LocalStore` entirely: every
//! `view()` call derives a fresh view-model from the query's current
//! snapshot, so independent consumers see independently derived, consistent
//! values with no shared mutable state.

use std::sync::Arc;

use taskmirror_api::{ApiError, OverviewPayload, OverviewStats, RemoteQuery};

/// View-model handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewView {
    /// Present iff the snapshot's payload carries an overview record
    pub stats: Option<OverviewStats>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct OverviewProjection {
    query: Arc<dyn RemoteQuery<OverviewPayload>>,
}

impl OverviewProjection {
    pub fn new(query: Arc<dyn RemoteQuery<OverviewPayload>>) -> Self {
        Self { query }
    }

    /// Derive the current view-model from the query's snapshot
    pub fn view(&self) -> OverviewView {
        let snapshot = self.query.snapshot();
        OverviewView {
            stats: snapshot
                .data
                .and_then(|payload| payload.overview)
                .map(OverviewStats::from),
            loading: snapshot.loading,
            error: snapshot.error.map(|e| e.message),
        }
    }

    /// Re-fetch the overview; resolves when the underlying request resolves
    #[tracing::instrument(name = "overview.reload", skip(self))]
    pub async fn reload(&self) -> Result<(), ApiError> {
        self.query.refetch().await
    }
}
