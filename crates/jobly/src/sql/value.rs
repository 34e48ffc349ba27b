//! Parameter values carried by built clauses.

use bytes::BytesMut;
use rust_decimal::Decimal;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};

/// A single bound parameter.
///
/// Unlike a boxed `dyn ToSql`, a `FieldValue` can be compared and printed, so
/// built clauses can be asserted on directly.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i32),
    Decimal(Decimal),
    Bool(bool),
    /// SQL `NULL`, e.g. clearing a nullable column in a partial update.
    Null,
}

impl FieldValue {
    /// Whether this value counts as "present" for optional numeric filters.
    ///
    /// Zero and `NULL` are treated as absent.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(v) => !v.is_empty(),
            FieldValue::Int(v) => *v != 0,
            FieldValue::Decimal(v) => !v.is_zero(),
            FieldValue::Bool(v) => *v,
            FieldValue::Null => false,
        }
    }
}

impl ToSql for FieldValue {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            FieldValue::Text(v) => v.to_sql_checked(ty, out),
            FieldValue::Int(v) => v.to_sql_checked(ty, out),
            FieldValue::Decimal(v) => v.to_sql_checked(ty, out),
            FieldValue::Bool(v) => v.to_sql_checked(ty, out),
            FieldValue::Null => Ok(IsNull::Yes),
        }
    }

    // The wrapped value re-checks the type in `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v)
    }
}

impl From<Decimal> for FieldValue {
    fn from(v: Decimal) -> Self {
        FieldValue::Decimal(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}
