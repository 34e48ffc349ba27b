//! Database configuration.
//!
//! Configuration comes either from the environment ([`Config::from_env`]) or from
//! a TOML file ([`Config::load`]):
//!
//! ```toml
//! database_url = "postgres://postgres@localhost:5432/jobly"
//! pool_max_size = 8
//! ```

use crate::error::{JoblyError, JoblyResult};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding a full connection URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Environment variable selecting the runtime environment (`test` picks the test database).
pub const RUN_ENV: &str = "JOBLY_ENV";
/// Environment variable overriding the pool size.
pub const POOL_MAX_SIZE_ENV: &str = "JOBLY_POOL_MAX_SIZE";

const DEFAULT_POOL_MAX_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: usize,
}

fn default_pool_max_size() -> usize {
    DEFAULT_POOL_MAX_SIZE
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            pool_max_size: DEFAULT_POOL_MAX_SIZE,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// `DATABASE_URL` wins when set. Otherwise the local database `jobly` is used,
    /// or `jobly_test` when `JOBLY_ENV=test`.
    pub fn from_env() -> JoblyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> JoblyResult<Self> {
        let database_url = match lookup(DATABASE_URL_ENV) {
            Some(url) => url,
            None => local_database_url(lookup(RUN_ENV).as_deref() == Some("test")),
        };

        let pool_max_size = match lookup(POOL_MAX_SIZE_ENV) {
            Some(raw) => raw.parse::<usize>().map_err(|e| {
                JoblyError::Config(format!("invalid {POOL_MAX_SIZE_ENV} {raw:?}: {e}"))
            })?,
            None => DEFAULT_POOL_MAX_SIZE,
        };

        let config = Self {
            database_url,
            pool_max_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> JoblyResult<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| JoblyError::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> JoblyResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            JoblyError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> JoblyResult<()> {
        if self.database_url.trim().is_empty() {
            return Err(JoblyError::Config("database_url is empty".to_string()));
        }
        if self.pool_max_size == 0 {
            return Err(JoblyError::Config(
                "pool_max_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn local_database_url(test: bool) -> String {
    let database = if test { "jobly_test" } else { "jobly" };
    format!("postgres://postgres@localhost:5432/{database}")
}
