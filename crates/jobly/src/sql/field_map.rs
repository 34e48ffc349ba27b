//! Ordered field mappings and logical-to-physical column translation.

use super::value::FieldValue;

/// An ordered mapping of logical field names to the values to write.
///
/// Insertion order is preserved and decides both column order and parameter
/// order of the generated `SET` clause. Inserting a name that is already present
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Insert a field (consuming version).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a field only when `value` is `Some`.
    pub fn insert_opt<T: Into<FieldValue>>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.insert(name, v);
        }
        self
    }

    /// Look up a field's value by logical name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Split into names and values, both in insertion order.
    pub fn into_parts(self) -> (Vec<String>, Vec<FieldValue>) {
        self.entries.into_iter().unzip()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// A static translation table from logical (request-side) field names to
/// physical column names.
///
/// Names missing from the table are used verbatim.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    pairs: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    /// A table that translates nothing.
    pub const EMPTY: ColumnMap = ColumnMap { pairs: &[] };

    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// Physical column for `name`, falling back to `name` itself.
    pub fn translate<'a>(&self, name: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(logical, _)| *logical == name)
            .map_or(name, |(_, physical)| *physical)
    }
}
