//! WHERE-clause assembly with sequential placeholder numbering.
//!
//! Conditions are collected in the order they are pushed and joined with `AND`
//! at the end, so a condition never needs to know whether it comes first.
//! Columns and raw fragments are `&'static str`: they can only come from source
//! code, never from request input.

use super::BuiltClause;
use super::value::FieldValue;

/// Comparison operator for a parameterized condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Greater than or equal: column >= value
    Gte(FieldValue),
    /// Less than or equal: column <= value
    Lte(FieldValue),
    /// Case-insensitive pattern match (PostgreSQL ILIKE)
    Ilike(FieldValue),
}

impl Op {
    fn operator(&self) -> &'static str {
        match self {
            Op::Gte(_) => ">=",
            Op::Lte(_) => "<=",
            Op::Ilike(_) => "ILIKE",
        }
    }

    fn into_value(self) -> FieldValue {
        match self {
            Op::Gte(v) | Op::Lte(v) | Op::Ilike(v) => v,
        }
    }
}

/// Collects `AND`-joined conditions and their bound values.
#[derive(Debug, Clone, Default)]
pub struct WhereClause {
    fragments: Vec<String>,
    values: Vec<FieldValue>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `<column> <op> $n`, binding the operator's value.
    ///
    /// Returns the 1-based placeholder index assigned to the value.
    pub fn push(&mut self, column: &'static str, op: Op) -> usize {
        let operator = op.operator();
        self.values.push(op.into_value());
        let idx = self.values.len();
        self.fragments.push(format!("{column} {operator} ${idx}"));
        idx
    }

    /// Append a fixed condition that binds no value (e.g. `equity > 0`).
    pub fn push_raw(&mut self, fragment: &'static str) -> &mut Self {
        self.fragments.push(fragment.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Join the collected conditions with `AND`.
    ///
    /// An empty collector yields an empty clause.
    pub fn build(self) -> BuiltClause {
        BuiltClause {
            clause: self.fragments.join(" AND "),
            values: self.values,
        }
    }
}

/// Quote an identifier for PostgreSQL, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
