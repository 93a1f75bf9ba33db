//! The query-executing capability the fetcher depends on.
//!
//! Results are kept semi-structured on purpose: an ordered list of field
//! names plus rows of optional strings. Only the adapter layer knows which
//! field names a given statement returns.

use async_trait::async_trait;

/// A result column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Rows and field metadata returned by one statement.
///
/// Every row holds one value per field, in field order. `None` is SQL NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub fields: Vec<FieldInfo>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResult {
    pub fn new(fields: Vec<FieldInfo>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { fields, rows }
    }

    /// Iterate rows as name-addressable views.
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().map(move |values| RowView {
            fields: &self.fields,
            values,
        })
    }

    /// Position of a field, matched case-insensitively.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }
}

/// One row, addressable by field name.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    fields: &'a [FieldInfo],
    values: &'a [Option<String>],
}

impl<'a> RowView<'a> {
    /// Value of a field, matched case-insensitively. `None` when the field is
    /// absent or NULL.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let idx = self
            .fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))?;
        self.values.get(idx)?.as_deref()
    }

    /// Value at a position. `None` when out of range or NULL.
    pub fn get_at(&self, idx: usize) -> Option<&'a str> {
        self.values.get(idx)?.as_deref()
    }
}

/// Executes a SQL string and returns its rows.
///
/// Implementations must tolerate concurrent calls; the fetcher issues the
/// per-table statements concurrently against the same executor.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> anyhow::Result<QueryResult>;
}
