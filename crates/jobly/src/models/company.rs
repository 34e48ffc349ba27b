use super::job::Job;
use super::{duplicate, not_found, rejected};
use crate::client::GenericClient;
use crate::error::JoblyResult;
use crate::row::{FromRow, RowExt, from_rows};
use crate::sql::{ColumnMap, CompanyFilter, FieldMap, sql_for_partial_update};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Request-side company field names and their columns.
pub const COMPANY_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
]);

const SELECT_COMPANY: &str = "SELECT handle, name, description, num_employees, logo_url FROM companies";
const RETURNING_COMPANY: &str = "RETURNING handle, name, description, num_employees, logo_url";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl FromRow for Company {
    fn from_row(row: &Row) -> JoblyResult<Self> {
        Ok(Self {
            handle: row.try_get_column("handle")?,
            name: row.try_get_column("name")?,
            description: row.try_get_column("description")?,
            num_employees: row.try_get_column("num_employees")?,
            logo_url: row.try_get_column("logo_url")?,
        })
    }
}

/// A company together with its open jobs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyWithJobs {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// Partial company update. The handle cannot change.
///
/// `num_employees` and `logo_url` are nullable: `Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub num_employees: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub logo_url: Option<Option<String>>,
}

impl CompanyUpdate {
    /// Fields present in the update, keyed by their request-side names.
    pub fn into_field_map(self) -> FieldMap {
        let mut data = FieldMap::new();
        data.insert_opt("name", self.name)
            .insert_opt("description", self.description)
            .insert_opt("numEmployees", self.num_employees)
            .insert_opt("logoUrl", self.logo_url);
        data
    }
}

impl Company {
    /// Create a company.
    ///
    /// Fails with `BadRequest` when the handle is already taken.
    pub async fn create(conn: &impl GenericClient, data: &NewCompany) -> JoblyResult<Company> {
        let existing = conn
            .query_opt_tagged(
                "companies.duplicate_check",
                "SELECT handle FROM companies WHERE handle = $1",
                &[&data.handle],
            )
            .await?;
        if existing.is_some() {
            return Err(duplicate("company", &data.handle));
        }

        let sql = format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) {RETURNING_COMPANY}"
        );
        let row = conn
            .query_one_tagged(
                "companies.create",
                &sql,
                &[
                    &data.handle,
                    &data.name,
                    &data.description,
                    &data.num_employees,
                    &data.logo_url,
                ],
            )
            .await?;
        Company::from_row(&row)
    }

    /// Find all companies matching `filter`, ordered by name.
    ///
    /// Fails with `BadRequest` when the filter's minimum headcount exceeds its maximum.
    pub async fn find_all(
        conn: &impl GenericClient,
        filter: &CompanyFilter,
    ) -> JoblyResult<Vec<Company>> {
        let built = filter.build().map_err(|e| rejected("company", e))?;
        let sql = format!("{SELECT_COMPANY} {} ORDER BY name", built.where_prefixed());
        let rows = conn
            .query_tagged("companies.find_all", &sql, &built.params())
            .await?;
        from_rows(&rows)
    }

    /// Fetch a company and its jobs.
    pub async fn get(conn: &impl GenericClient, handle: &str) -> JoblyResult<CompanyWithJobs> {
        let sql = format!("{SELECT_COMPANY} WHERE handle = $1");
        let row = conn
            .query_opt_tagged("companies.get", &sql, &[&handle])
            .await?
            .ok_or_else(|| not_found("company", handle))?;

        let company = Company::from_row(&row)?;
        let jobs = Job::find_by_company(conn, handle).await?;
        Ok(CompanyWithJobs { company, jobs })
    }

    /// Update the fields present in `data`; the others are left untouched.
    pub async fn update(
        conn: &impl GenericClient,
        handle: &str,
        data: CompanyUpdate,
    ) -> JoblyResult<Company> {
        let set = sql_for_partial_update(data.into_field_map(), &COMPANY_COLUMNS)
            .map_err(|e| rejected("company", e))?;
        let sql = format!(
            "UPDATE companies SET {} WHERE handle = ${} {RETURNING_COMPANY}",
            set.clause,
            set.next_placeholder()
        );
        let row = conn
            .query_opt_tagged("companies.update", &sql, &set.params_with(&[&handle]))
            .await?
            .ok_or_else(|| not_found("company", handle))?;
        Company::from_row(&row)
    }

    pub async fn remove(conn: &impl GenericClient, handle: &str) -> JoblyResult<()> {
        conn.query_opt_tagged(
            "companies.remove",
            "DELETE FROM companies WHERE handle = $1 RETURNING handle",
            &[&handle],
        )
        .await?
        .ok_or_else(|| not_found("company", handle))?;
        Ok(())
    }
}
