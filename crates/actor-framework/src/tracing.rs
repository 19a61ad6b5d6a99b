//! # Observability
//!
//! Compact structured logging for every actor in the process.
//!
//! Actors log their lifecycle (`Actor started`, `Shutdown`) and each operation at
//! `info`/`debug` with an `entity_type` field, so the module path is left out of each
//! line (`with_target(false)`). Payloads are only printed at `debug`.
//!
//! ```bash
//! RUST_LOG=info cargo run -p table-order     # one line per operation
//! RUST_LOG=debug cargo run -p table-order    # plus request payloads
//! RUST_LOG=table_order=debug,actor_framework=info cargo run -p table-order
//! ```
//!
//! With spans from the demo binary a checkout reads like:
//!
//! ```text
//! INFO checkout: Created entity_type="TableSession" id=session_1 size=1
//! INFO checkout: Action ok entity_type="TableSession" id=session_1
//! INFO checkout: Created entity_type="OrderTicket" id=order_1 size=1
//! ```

/// Installs the global subscriber. Filtering comes from `RUST_LOG`.
///
/// Call once per process; a second call panics inside `tracing-subscriber`, so tests
/// that want output should use [`try_setup_tracing`].
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`] but tolerates an already-installed subscriber.
pub fn try_setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
