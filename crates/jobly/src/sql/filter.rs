//! Search filters for the job and company listings.
//!
//! A filter turns a fixed set of optional predicates into a [`BuiltClause`]
//! ready to follow `WHERE`. Predicates are appended in a fixed order and only
//! consume a placeholder when present, so `$n` always matches the value list.

use super::BuiltClause;
use super::condition::{Op, WhereClause};
use super::value::FieldValue;
use crate::error::{JoblyError, JoblyResult};
use serde::Deserialize;

/// Title pattern produced when a listing request carries no title.
///
/// A pattern equal to this marker does not filter.
pub const NO_TITLE_FILTER: &str = "%undefined%";

/// Wrap a search term in `%` for a containment match.
pub fn contains_pattern(term: &str) -> String {
    format!("%{term}%")
}

/// Raw query-string parameters of `GET /jobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchQuery {
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    pub has_equity: Option<String>,
}

/// Filter for the job listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// `ILIKE` pattern on `title`, already wrapped in `%`.
    pub title: Option<String>,
    /// Inclusive lower bound on `salary`. Zero means no bound.
    pub min_salary: Option<i32>,
    /// `"true"` keeps jobs with equity, `"false"` jobs without; anything else is ignored.
    pub has_equity: Option<String>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, pattern: impl Into<String>) -> Self {
        self.title = Some(pattern.into());
        self
    }

    pub fn min_salary(mut self, min: i32) -> Self {
        self.min_salary = Some(min);
        self
    }

    pub fn has_equity(mut self, flag: impl Into<String>) -> Self {
        self.has_equity = Some(flag.into());
        self
    }

    /// Build the `WHERE` body: title, then salary, then equity.
    ///
    /// Returns an empty clause when no predicate applies.
    pub fn build(&self) -> BuiltClause {
        let mut clause = WhereClause::new();

        if let Some(pattern) = self.title.as_deref().filter(|p| *p != NO_TITLE_FILTER) {
            clause.push("title", Op::Ilike(pattern.into()));
        }

        // Zero is treated the same as "not requested".
        if let Some(min) = self.min_salary.map(FieldValue::Int).filter(FieldValue::is_truthy) {
            clause.push("salary", Op::Gte(min));
        }

        match self.has_equity.as_deref() {
            Some("true") => {
                clause.push_raw("equity > 0");
            }
            Some("false") => {
                clause.push_raw("equity = 0");
            }
            _ => {}
        }

        clause.build()
    }
}

impl From<JobSearchQuery> for JobFilter {
    fn from(query: JobSearchQuery) -> Self {
        Self {
            title: Some(match query.title.as_deref() {
                Some(term) => contains_pattern(term),
                None => NO_TITLE_FILTER.to_string(),
            }),
            min_salary: query.min_salary,
            has_equity: query.has_equity,
        }
    }
}

/// Raw query-string parameters of `GET /companies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchQuery {
    pub name: Option<String>,
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
}

/// Filter for the company listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    /// `ILIKE` pattern on `name`, already wrapped in `%`.
    pub name: Option<String>,
    /// Inclusive lower bound on `num_employees`. Zero means no bound.
    pub min_employees: Option<i32>,
    /// Inclusive upper bound on `num_employees`. Zero means no bound.
    pub max_employees: Option<i32>,
}

impl CompanyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, pattern: impl Into<String>) -> Self {
        self.name = Some(pattern.into());
        self
    }

    pub fn min_employees(mut self, min: i32) -> Self {
        self.min_employees = Some(min);
        self
    }

    pub fn max_employees(mut self, max: i32) -> Self {
        self.max_employees = Some(max);
        self
    }

    /// Build the `WHERE` body: name, then minimum, then maximum headcount.
    ///
    /// # Errors
    /// Returns [`JoblyError::BadRequest`] when both bounds are set and the minimum
    /// exceeds the maximum.
    pub fn build(&self) -> JoblyResult<BuiltClause> {
        let min = self.min_employees.filter(|m| *m != 0);
        let max = self.max_employees.filter(|m| *m != 0);
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(JoblyError::bad_request(format!(
                "minEmployees ({min}) cannot be greater than maxEmployees ({max})"
            )));
        }

        let mut clause = WhereClause::new();
        if let Some(pattern) = self.name.as_deref() {
            clause.push("name", Op::Ilike(pattern.into()));
        }
        if let Some(min) = min {
            clause.push("num_employees", Op::Gte(min.into()));
        }
        if let Some(max) = max {
            clause.push("num_employees", Op::Lte(max.into()));
        }
        Ok(clause.build())
    }
}

impl From<CompanySearchQuery> for CompanyFilter {
    fn from(query: CompanySearchQuery) -> Self {
        Self {
            name: query.name.as_deref().map(contains_pattern),
            min_employees: query.min_employees,
            max_employees: query.max_employees,
        }
    }
}
