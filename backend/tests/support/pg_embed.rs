//! Embedded PostgreSQL for the Diesel adapter tests.
//!
//! Each test context boots its own [`TestCluster`], migrates the default
//! `postgres` database and hands back a small [`DbPool`]. The cluster stops
//! when the context drops.
//!
//! Bootstraps are serialised and point `PG_RUNTIME_DIR`/`PG_DATA_DIR` at
//! fresh directories under the target dir so parallel tests never share a
//! data directory. Set `SKIP_TEST_CLUSTER=1` where embedded binaries cannot
//! run.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

use bookshelf::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
static NEXT_CLUSTER: AtomicUsize = AtomicUsize::new(0);

const DATABASE: &str = "postgres";

/// Migrated database on a private cluster, plus the runtime driving it.
pub struct EmbeddedDatabase {
    pub runtime: Runtime,
    pub pool: DbPool,
    _cluster: TestCluster,
}

fn cluster_dirs() -> Result<(PathBuf, PathBuf), std::io::Error> {
    let target = std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("target"),
        PathBuf::from,
    );
    let base = target.join("pg-embed").join(format!(
        "cluster-{}-{}",
        std::process::id(),
        NEXT_CLUSTER.fetch_add(1, Ordering::SeqCst)
    ));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

fn start_cluster() -> Result<TestCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());
    let (runtime_dir, data_dir) = cluster_dirs().map_err(|err| err.to_string())?;
    let _env = env_lock::lock_env([
        (
            "PG_RUNTIME_DIR",
            Some(runtime_dir.to_string_lossy().into_owned()),
        ),
        ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
    ]);
    TestCluster::new().map_err(|err| format!("{err:?}"))
}

/// Boot a cluster, apply the migrations and open a two-connection pool.
///
/// Must be called outside any Tokio runtime.
pub fn embedded_database() -> Result<EmbeddedDatabase, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = start_cluster()?;
    let url = cluster.connection().database_url(DATABASE);

    let pool = runtime.block_on(async {
        run_pending_migrations(&url)
            .await
            .map_err(|err| err.to_string())?;
        DbPool::new(PoolConfig::new(url.as_str()).with_max_size(2))
            .await
            .map_err(|err| err.to_string())
    })?;

    Ok(EmbeddedDatabase {
        runtime,
        pool,
        _cluster: cluster,
    })
}

fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// `None` with a skip marker when `SKIP_TEST_CLUSTER` is truthy; a panic
/// otherwise so CI breakage stays visible.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
