use super::{duplicate, not_found, rejected};
use crate::client::GenericClient;
use crate::error::JoblyResult;
use crate::row::{FromRow, RowExt, from_rows};
use crate::sql::{ColumnMap, FieldMap, JobFilter, sql_for_partial_update};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Updatable job fields and their columns.
pub const JOB_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("title", "title"),
    ("salary", "salary"),
    ("equity", "equity"),
]);

const SELECT_JOB: &str = "SELECT id, title, salary, equity, company_handle FROM jobs";
const RETURNING_JOB: &str = "RETURNING id, title, salary, equity, company_handle";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl FromRow for Job {
    fn from_row(row: &Row) -> JoblyResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
            company_handle: row.try_get_column("company_handle")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Partial job update. The owning company and id cannot change.
///
/// `salary` and `equity` are nullable: `Some(None)` (JSON `null`) clears the
/// column, `None` (key absent) leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobUpdate {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub equity: Option<Option<Decimal>>,
}

impl JobUpdate {
    /// Fields present in the update, in declaration order.
    pub fn into_field_map(self) -> FieldMap {
        let mut data = FieldMap::new();
        data.insert_opt("title", self.title)
            .insert_opt("salary", self.salary)
            .insert_opt("equity", self.equity);
        data
    }
}

impl Job {
    /// Create a job.
    ///
    /// Fails with `BadRequest` when a job with the same title already exists.
    pub async fn create(conn: &impl GenericClient, data: &NewJob) -> JoblyResult<Job> {
        let existing = conn
            .query_opt_tagged(
                "jobs.duplicate_check",
                "SELECT title FROM jobs WHERE title = $1",
                &[&data.title],
            )
            .await?;
        if existing.is_some() {
            return Err(duplicate("title", &data.title));
        }

        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) VALUES ($1, $2, $3, $4) {RETURNING_JOB}"
        );
        let row = conn
            .query_one_tagged(
                "jobs.create",
                &sql,
                &[&data.title, &data.salary, &data.equity, &data.company_handle],
            )
            .await?;
        Job::from_row(&row)
    }

    /// Find all jobs matching `filter`, ordered by id.
    pub async fn find_all(conn: &impl GenericClient, filter: &JobFilter) -> JoblyResult<Vec<Job>> {
        let built = filter.build();
        let sql = format!("{SELECT_JOB} {} ORDER BY id", built.where_prefixed());
        let rows = conn.query_tagged("jobs.find_all", &sql, &built.params()).await?;
        from_rows(&rows)
    }

    /// All jobs of one company, ordered by id.
    pub async fn find_by_company(conn: &impl GenericClient, handle: &str) -> JoblyResult<Vec<Job>> {
        let sql = format!("{SELECT_JOB} WHERE company_handle = $1 ORDER BY id");
        let rows = conn
            .query_tagged("jobs.find_by_company", &sql, &[&handle])
            .await?;
        from_rows(&rows)
    }

    pub async fn get(conn: &impl GenericClient, id: i32) -> JoblyResult<Job> {
        let sql = format!("{SELECT_JOB} WHERE id = $1");
        let row = conn.query_opt_tagged("jobs.get", &sql, &[&id]).await?;
        match row {
            Some(row) => Job::from_row(&row),
            None => Err(not_found("job", id)),
        }
    }

    /// Update the fields present in `data`; the others are left untouched.
    ///
    /// Fails with `BadRequest` when `data` is empty and `NotFound` for an unknown id.
    pub async fn update(conn: &impl GenericClient, id: i32, data: JobUpdate) -> JoblyResult<Job> {
        let set = sql_for_partial_update(data.into_field_map(), &JOB_COLUMNS)
            .map_err(|e| rejected("job", e))?;
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} {RETURNING_JOB}",
            set.clause,
            set.next_placeholder()
        );
        let row = conn
            .query_opt_tagged("jobs.update", &sql, &set.params_with(&[&id]))
            .await?;
        match row {
            Some(row) => Job::from_row(&row),
            None => Err(not_found("job", id)),
        }
    }

    pub async fn remove(conn: &impl GenericClient, id: i32) -> JoblyResult<()> {
        let row = conn
            .query_opt_tagged("jobs.remove", "DELETE FROM jobs WHERE id = $1 RETURNING id", &[&id])
            .await?;
        match row {
            Some(_) => Ok(()),
            None => Err(not_found("job", id)),
        }
    }
}
