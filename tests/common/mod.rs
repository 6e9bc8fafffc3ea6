//! Common test utilities shared across integration tests.

use schedule_matchers::JobList;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Load a job list from a YAML fixture.
///
/// # Panics
///
/// Panics if the fixture is not a valid job list.
pub fn job_list_from_yaml(yaml: &str) -> JobList {
    serde_yaml::from_str(yaml).expect("invalid job list fixture")
}
