//! Metrics recorded by the Store.
//!
//! The Store records through the `metrics` facade; no exporter is installed
//! here. Binaries that install a recorder call [`register_metrics`] once so
//! the series carry descriptions.

use metrics::{Unit, describe_counter, describe_histogram};

/// Actions sent to any store
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Snapshots successfully written
pub const PERSIST_TOTAL: &str = "store.persist.total";

/// Snapshots that could not be encoded or written
pub const PERSIST_FAILURES: &str = "store.persist.failures";

/// Time spent inside reducers
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Register descriptions for every metric the runtime emits.
pub fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions sent to stores");
    describe_counter!(PERSIST_TOTAL, "Total number of snapshots written to storage");
    describe_counter!(
        PERSIST_FAILURES,
        "Total number of snapshots that failed to encode or write"
    );
    describe_histogram!(
        REDUCER_DURATION,
        Unit::Seconds,
        "Reducer execution time in seconds"
    );
}
