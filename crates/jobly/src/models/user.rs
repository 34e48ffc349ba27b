use super::{duplicate, not_found, rejected};
use crate::client::GenericClient;
use crate::error::JoblyResult;
use crate::row::{FromRow, RowExt, from_rows};
use crate::sql::{ColumnMap, FieldMap, sql_for_partial_update};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Request-side user field names and their columns.
pub const USER_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("isAdmin", "is_admin"),
]);

const SELECT_USER: &str = "SELECT username, first_name, last_name, email, is_admin FROM users";
const RETURNING_USER: &str = "RETURNING username, first_name, last_name, email, is_admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl FromRow for User {
    fn from_row(row: &Row) -> JoblyResult<Self> {
        Ok(Self {
            username: row.try_get_column("username")?,
            first_name: row.try_get_column("first_name")?,
            last_name: row.try_get_column("last_name")?,
            email: row.try_get_column("email")?,
            is_admin: row.try_get_column("is_admin")?,
        })
    }
}

/// A user together with the ids of the jobs they applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserWithApplications {
    #[serde(flatten)]
    pub user: User,
    pub applications: Vec<i32>,
}

/// Registration data. Password hashing happens before this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Partial user update. `password` must already be hashed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
    pub password: Option<String>,
}

impl UserUpdate {
    /// Fields present in the update, keyed by their request-side names.
    pub fn into_field_map(self) -> FieldMap {
        let mut data = FieldMap::new();
        data.insert_opt("firstName", self.first_name)
            .insert_opt("lastName", self.last_name)
            .insert_opt("email", self.email)
            .insert_opt("isAdmin", self.is_admin)
            .insert_opt("password", self.password);
        data
    }
}

impl User {
    /// Register a user.
    ///
    /// Fails with `BadRequest` when the username is taken.
    pub async fn register(conn: &impl GenericClient, data: &NewUser) -> JoblyResult<User> {
        let existing = conn
            .query_opt_tagged(
                "users.duplicate_check",
                "SELECT username FROM users WHERE username = $1",
                &[&data.username],
            )
            .await?;
        if existing.is_some() {
            return Err(duplicate("username", &data.username));
        }

        let sql = format!(
            "INSERT INTO users (username, password, first_name, last_name, email, is_admin) \
             VALUES ($1, $2, $3, $4, $5, $6) {RETURNING_USER}"
        );
        let row = conn
            .query_one_tagged(
                "users.register",
                &sql,
                &[
                    &data.username,
                    &data.password_hash,
                    &data.first_name,
                    &data.last_name,
                    &data.email,
                    &data.is_admin,
                ],
            )
            .await?;
        User::from_row(&row)
    }

    /// All users, ordered by username.
    pub async fn find_all(conn: &impl GenericClient) -> JoblyResult<Vec<User>> {
        let sql = format!("{SELECT_USER} ORDER BY username");
        let rows = conn.query_tagged("users.find_all", &sql, &[]).await?;
        from_rows(&rows)
    }

    /// Fetch a user and the jobs they applied to.
    pub async fn get(conn: &impl GenericClient, username: &str) -> JoblyResult<UserWithApplications> {
        let sql = format!("{SELECT_USER} WHERE username = $1");
        let row = conn
            .query_opt_tagged("users.get", &sql, &[&username])
            .await?
            .ok_or_else(|| not_found("username", username))?;
        let user = User::from_row(&row)?;

        let rows = conn
            .query_tagged(
                "users.applications",
                "SELECT job_id FROM applications WHERE username = $1 ORDER BY job_id",
                &[&username],
            )
            .await?;
        let applications = rows
            .iter()
            .map(|r| r.try_get_column::<i32>("job_id"))
            .collect::<JoblyResult<Vec<_>>>()?;

        Ok(UserWithApplications { user, applications })
    }

    /// Update the fields present in `data`; the others are left untouched.
    pub async fn update(
        conn: &impl GenericClient,
        username: &str,
        data: UserUpdate,
    ) -> JoblyResult<User> {
        let set = sql_for_partial_update(data.into_field_map(), &USER_COLUMNS)
            .map_err(|e| rejected("user", e))?;
        let sql = format!(
            "UPDATE users SET {} WHERE username = ${} {RETURNING_USER}",
            set.clause,
            set.next_placeholder()
        );
        let row = conn
            .query_opt_tagged("users.update", &sql, &set.params_with(&[&username]))
            .await?
            .ok_or_else(|| not_found("username", username))?;
        User::from_row(&row)
    }

    pub async fn remove(conn: &impl GenericClient, username: &str) -> JoblyResult<()> {
        conn.query_opt_tagged(
            "users.remove",
            "DELETE FROM users WHERE username = $1 RETURNING username",
            &[&username],
        )
        .await?
        .ok_or_else(|| not_found("username", username))?;
        Ok(())
    }

    /// Record that `username` applied to job `job_id`.
    ///
    /// Fails with `NotFound` when either the job or the user does not exist.
    pub async fn apply_to_job(
        conn: &impl GenericClient,
        username: &str,
        job_id: i32,
    ) -> JoblyResult<()> {
        conn.query_opt_tagged("jobs.exists", "SELECT id FROM jobs WHERE id = $1", &[&job_id])
            .await?
            .ok_or_else(|| not_found("job", job_id))?;
        conn.query_opt_tagged(
            "users.exists",
            "SELECT username FROM users WHERE username = $1",
            &[&username],
        )
        .await?
        .ok_or_else(|| not_found("username", username))?;

        conn.execute_tagged(
            "applications.create",
            "INSERT INTO applications (job_id, username) VALUES ($1, $2)",
            &[&job_id, &username],
        )
        .await?;
        Ok(())
    }
}
