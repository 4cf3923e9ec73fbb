//! Shared fixtures for the PostgreSQL-backed integration tests.

pub mod pg_embed;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use forum_backend::outbound::persistence::run_migrations;

/// Returns true when the embedded cluster suites were explicitly requested.
pub fn embedded_postgres_enabled() -> bool {
    std::env::var("RUN_PG_EMBEDDED").as_deref() == Ok("1")
}

/// Returns true when `SKIP_TEST_CLUSTER` is set to "1", "true", or "yes".
fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip quietly when `SKIP_TEST_CLUSTER` is truthy; otherwise fail loudly so
/// CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// A running cluster plus a freshly migrated database on it.
///
/// The cluster shuts down when this value is dropped.
pub struct MigratedDatabase {
    pub url: String,
    _cluster: TestCluster,
}

/// Start a cluster, create a uniquely named database, and migrate it.
pub fn migrated_database() -> Result<MigratedDatabase, String> {
    let cluster = pg_embed::test_cluster()?;
    let name = format!("forum_{}", Uuid::new_v4().simple());

    let admin_url = cluster.connection().database_url("postgres");
    let mut client = Client::connect(&admin_url, NoTls).map_err(|err| err.to_string())?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| err.to_string())?;

    let url = cluster.connection().database_url(&name);
    run_migrations(&url).map_err(|err| err.to_string())?;
    Ok(MigratedDatabase {
        url,
        _cluster: cluster,
    })
}
