//! Entity models for companies, jobs, and users.
//!
//! Every operation takes any [`GenericClient`](crate::GenericClient), writes its
//! SQL by hand, and uses the [`sql`](crate::sql) builders only for the parts that
//! depend on the request (partial `SET` lists and listing filters).

mod company;
mod job;
mod user;

pub use company::{COMPANY_COLUMNS, Company, CompanyUpdate, CompanyWithJobs, NewCompany};
pub use job::{JOB_COLUMNS, Job, JobUpdate, NewJob};
pub use user::{NewUser, USER_COLUMNS, User, UserUpdate, UserWithApplications};

use crate::error::JoblyError;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;

fn not_found(what: &str, key: impl Display) -> JoblyError {
    tracing::warn!(entity = what, %key, "record not found");
    JoblyError::not_found(format!("No {what}: {key}"))
}

fn duplicate(what: &str, key: impl Display) -> JoblyError {
    tracing::warn!(entity = what, %key, "duplicate record");
    JoblyError::bad_request(format!("Duplicate {what}: {key}"))
}

/// Log a `BadRequest` caused by caller input and pass the error on unchanged.
fn rejected(what: &str, err: JoblyError) -> JoblyError {
    if err.is_bad_request() {
        tracing::warn!(entity = what, error = %err, "request rejected");
    }
    err
}

/// Deserialize a nullable update field: an absent key stays `None` (through
/// `#[serde(default)]`), an explicit `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
