//! Shared fixtures for database-backed tests.
//!
//! Each test opens a transaction, creates temporary tables that shadow the real
//! schema, seeds them, and rolls everything back when the transaction drops.

#![allow(dead_code)]

use jobly::{JoblyError, JoblyResult};
use tokio_postgres::NoTls;

const SCHEMA: &str = r#"
CREATE TEMP TABLE companies (
    handle VARCHAR(25) PRIMARY KEY CHECK (handle = lower(handle)),
    name TEXT UNIQUE NOT NULL,
    num_employees INTEGER CHECK (num_employees >= 0),
    description TEXT NOT NULL,
    logo_url TEXT
) ON COMMIT DROP;

CREATE TEMP TABLE jobs (
    id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    title TEXT NOT NULL,
    salary INTEGER CHECK (salary >= 0),
    equity NUMERIC CHECK (equity <= 1.0),
    company_handle VARCHAR(25) NOT NULL REFERENCES companies ON DELETE CASCADE
) ON COMMIT DROP;

CREATE TEMP TABLE users (
    username VARCHAR(25) PRIMARY KEY,
    password TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL CHECK (position('@' IN email) > 1),
    is_admin BOOLEAN NOT NULL DEFAULT FALSE
) ON COMMIT DROP;

CREATE TEMP TABLE applications (
    username VARCHAR(25) REFERENCES users ON DELETE CASCADE,
    job_id INTEGER REFERENCES jobs ON DELETE CASCADE,
    PRIMARY KEY (username, job_id)
) ON COMMIT DROP;
"#;

const SEED: &str = r#"
INSERT INTO companies (handle, name, num_employees, description, logo_url)
VALUES ('c1', 'C1', 1, 'Desc1', 'http://c1.img'),
       ('c2', 'C2', 2, 'Desc2', 'http://c2.img'),
       ('c3', 'C3', 3, 'Desc3', 'http://c3.img');

INSERT INTO jobs (title, salary, equity, company_handle)
VALUES ('Alchemist', 10, 0, 'c1'),
       ('Baker', 100, 0.5, 'c2'),
       ('Chemist', 1000, 0, 'c3');

INSERT INTO users (username, password, first_name, last_name, email)
VALUES ('u1', 'hash1', 'U1F', 'U1L', 'u1@email.com'),
       ('u2', 'hash2', 'U2F', 'U2L', 'u2@email.com');

INSERT INTO applications (username, job_id)
VALUES ('u1', 1),
       ('u1', 2),
       ('u2', 1);
"#;

/// Connect using `DATABASE_URL`, or `None` when it is not set.
pub async fn try_connect(test_name: &str) -> JoblyResult<Option<tokio_postgres::Client>> {
    let _ = dotenvy::dotenv();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("DATABASE_URL is not set; skipping {test_name}");
            return Ok(None);
        }
    };

    let (client, connection) = tokio_postgres::connect(&database_url, NoTls)
        .await
        .map_err(|e| JoblyError::Connection(e.to_string()))?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("tokio-postgres connection error: {e}");
        }
    });
    Ok(Some(client))
}

/// Create and seed the temporary schema inside `tx`.
pub async fn seed(tx: &tokio_postgres::Transaction<'_>) -> JoblyResult<()> {
    tx.batch_execute(SCHEMA).await.map_err(JoblyError::from_db_error)?;
    tx.batch_execute(SEED).await.map_err(JoblyError::from_db_error)?;
    Ok(())
}
