//! `SET` clause generation for partial updates.

use super::BuiltClause;
use super::condition::quote_ident;
use super::field_map::{ColumnMap, FieldMap};
use crate::error::{JoblyError, JoblyResult};

/// Build a parameterized `SET` clause from the fields the caller wants to change.
///
/// Every entry becomes `"<column>"=$<n>`, numbered from 1 in the mapping's order,
/// with `<column>` taken from `columns` (or the logical name when the table has
/// no entry for it). The returned values line up with the placeholders.
///
/// ```ignore
/// let data = FieldMap::new().with("firstName", "Aliya").with("age", 32);
/// let set = sql_for_partial_update(data, &ColumnMap::new(&[("firstName", "first_name")]))?;
/// // set.clause == r#""first_name"=$1, "age"=$2"#
///
/// let sql = format!(
///     "UPDATE users SET {} WHERE username = ${} RETURNING username",
///     set.clause,
///     set.next_placeholder(),
/// );
/// ```
///
/// # Errors
/// Returns [`JoblyError::BadRequest`] when `data` is empty: an `UPDATE` with an
/// empty `SET` list is never issued.
pub fn sql_for_partial_update(data: FieldMap, columns: &ColumnMap) -> JoblyResult<BuiltClause> {
    if data.is_empty() {
        return Err(JoblyError::bad_request("No data"));
    }

    let (names, values) = data.into_parts();
    let clause = names
        .iter()
        .enumerate()
        .map(|(idx, name)| format!("{}=${}", quote_ident(columns.translate(name)), idx + 1))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(BuiltClause { clause, values })
}
