//! Tracing initialisation tests.
//!
//! Kept in their own binary: `init_tracing` installs the process-global
//! subscriber, which would collide with `traced_test` in the lib tests.

use tool_registry::observability::init_tracing;
use tool_registry::types::ObservabilityConfig;

#[test]
fn init_tracing_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&config);
    tracing::info!("tracing initialised");
}

#[test]
fn init_tracing_accepts_json_config() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json_logs: true,
    };
    // Whichever test runs first wins the global slot; the second call is a no-op.
    init_tracing(&config);
}
