//! Dynamic clause builders.
//!
//! The model layer writes its SQL by hand and only asks this module for the
//! pieces that depend on the request:
//! - [`sql_for_partial_update`] turns a sparse [`FieldMap`] into a `SET` list.
//! - [`JobFilter`] / [`CompanyFilter`] turn optional search predicates into a
//!   `WHERE` body.
//!
//! Both return a [`BuiltClause`]: the clause text plus the values for its
//! `$1, $2, ...` placeholders, in placeholder order.
//!
//! # Example
//!
//! ```ignore
//! use jobly::sql::JobFilter;
//!
//! let filter = JobFilter::new().min_salary(101).has_equity("true");
//! let built = filter.build();
//! assert_eq!(built.clause, "salary >= $1 AND equity > 0");
//!
//! let sql = format!("SELECT id, title FROM jobs {} ORDER BY id", built.where_prefixed());
//! let rows = conn.query(&sql, &built.params()).await?;
//! ```

mod condition;
mod field_map;
mod filter;
mod partial_update;
mod value;


pub use condition::{Op, WhereClause, quote_ident};
pub use field_map::{ColumnMap, FieldMap};
pub use filter::{
    CompanyFilter, CompanySearchQuery, JobFilter, JobSearchQuery, NO_TITLE_FILTER,
    contains_pattern,
};
pub use partial_update::sql_for_partial_update;
pub use value::FieldValue;

use tokio_postgres::types::ToSql;

/// A clause fragment and the values for its placeholders.
///
/// `values[i]` binds to `$i+1` in `clause`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltClause {
    /// Clause text, safe to splice into a hand-written statement.
    pub clause: String,
    /// Bound values, in placeholder order.
    pub values: Vec<FieldValue>,
}

impl BuiltClause {
    /// Whether the clause is empty (no `WHERE` needed).
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    /// Index of the next free placeholder, for a value the caller appends
    /// after the built ones (e.g. the key of an `UPDATE ... WHERE`).
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    /// `WHERE <clause>`, or an empty string when there is nothing to filter.
    pub fn where_prefixed(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clause)
        }
    }

    /// Values as references for tokio-postgres.
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }

    /// Values followed by `extra`, for statements that bind more after the clause.
    pub fn params_with<'a>(
        &'a self,
        extra: &[&'a (dyn ToSql + Sync)],
    ) -> Vec<&'a (dyn ToSql + Sync)> {
        let mut params = self.params();
        params.extend_from_slice(extra);
        params
    }
}
