//! Connection pool utilities

use crate::config::Config;
use crate::error::{JoblyError, JoblyResult};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::NoTls;

/// Create a connection pool from a [`Config`].
///
/// Uses `NoTls` and fast recycling.
///
/// # Example
///
/// ```ignore
/// let pool = jobly::create_pool(&jobly::Config::from_env()?)?;
/// let client = pool.get().await?;
/// let jobs = jobly::Job::find_all(&client, &jobly::JobFilter::new()).await?;
/// ```
pub fn create_pool(config: &Config) -> JoblyResult<Pool> {
    let pg_config: tokio_postgres::Config = config
        .database_url
        .parse()
        .map_err(|e: tokio_postgres::Error| JoblyError::Connection(e.to_string()))?;

    let mgr = Manager::from_config(pg_config, NoTls, default_manager_config());
    let pool = Pool::builder(mgr)
        .max_size(config.pool_max_size)
        .build()
        .map_err(|e| JoblyError::Pool(e.to_string()))?;

    tracing::info!(max_size = config.pool_max_size, "database pool created");
    Ok(pool)
}

fn default_manager_config() -> ManagerConfig {
    ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    }
}
