//! Test fixtures and mock capabilities for the taskmirror core
//!
//! Two concerns live here:
//! - `fixture`: structurally-complete defaults for every data shape, with
//!   deeply-partial overrides applied by recursive merge
//! - `mocks`: in-memory implementations of the remote capabilities, driven by
//!   fixture-built values and reset uniformly between test cases
//!
//! Production crates depend on this one only as a dev-dependency.

pub mod fixture;
pub mod mocks;

pub use fixture::{
    build, Fixture, OverviewPayloadPatch, OverviewRecordPatch, OverviewStatsPatch, TodoPatch,
    TodosPayloadPatch,
};
pub use mocks::{MockOverviewQuery, MockRegistry, MockToggleMutation, MockTodosQuery};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a test binary.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call from
/// every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
