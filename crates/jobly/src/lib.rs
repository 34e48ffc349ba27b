//! # jobly
//!
//! Data-access core of the Jobly job board on PostgreSQL.
//!
//! ## Features
//!
//! - **SQL explicit**: every statement is written by hand; only request-dependent
//!   pieces are generated
//! - **Partial updates**: [`sql_for_partial_update`] turns a sparse [`FieldMap`]
//!   into a parameterized `SET` list, translating request-side names to columns
//! - **Listing filters**: [`JobFilter`] / [`CompanyFilter`] build `WHERE` bodies
//!   whose `$n` placeholders always line up with the bound values
//! - **Transaction-friendly**: pass a transaction anywhere a `GenericClient` is expected
//!
//! ## Example
//!
//! ```ignore
//! use jobly::{FieldMap, JobFilter, JobUpdate, Job};
//!
//! let jobs = Job::find_all(&client, &JobFilter::new().min_salary(50_000)).await?;
//!
//! let job = Job::update(
//!     &client,
//!     jobs[0].id,
//!     JobUpdate { title: Some("Senior Baker".into()), ..Default::default() },
//! )
//! .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod row;
pub mod sql;

pub use client::GenericClient;
pub use config::Config;
pub use error::{JoblyError, JoblyResult};
pub use models::{
    Company, CompanyUpdate, CompanyWithJobs, Job, JobUpdate, NewCompany, NewJob, NewUser, User,
    UserUpdate, UserWithApplications,
};
pub use row::{FromRow, RowExt};
pub use sql::{
    BuiltClause, ColumnMap, CompanyFilter, CompanySearchQuery, FieldMap, FieldValue, JobFilter,
    JobSearchQuery, sql_for_partial_update,
};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::create_pool;
