//! Assembles adapter output into the normalized schema.

use crate::adapter;
use crate::error::{FetchError, Result};
use crate::executor::QueryResult;
use typegen_core::{DatabaseSchema, Table};

pub(crate) const SHOW_FULL_TABLES: &str = "SHOW FULL TABLES";

/// Quote an identifier with backticks. Embedded backticks are left as-is.
pub fn quote_identifier(name: &str) -> String {
    format!("`{name}`")
}

pub fn show_columns_sql(table: &str) -> String {
    format!("SHOW FULL COLUMNS FROM {}", quote_identifier(table))
}

pub fn show_indexes_sql(table: &str) -> String {
    format!("SHOW INDEXES FROM {}", quote_identifier(table))
}

pub fn show_create_table_sql(table: &str) -> String {
    format!("SHOW CREATE TABLE {}", quote_identifier(table))
}

/// The three raw results collected for one table.
#[derive(Debug, Clone)]
pub struct RawTableMetadata {
    pub name: String,
    pub columns: QueryResult,
    pub indexes: QueryResult,
    pub create: QueryResult,
}

impl RawTableMetadata {
    pub fn into_table(self) -> Result<Table> {
        let malformed = |query: String, message: String| FetchError::MalformedRow {
            table: self.name.clone(),
            query,
            message,
        };

        let columns = adapter::columns(&self.columns)
            .map_err(|m| malformed(show_columns_sql(&self.name), m))?;
        let indexes = adapter::indexes(&self.indexes)
            .map_err(|m| malformed(show_indexes_sql(&self.name), m))?;
        let create_statement = adapter::create_statement(&self.create)
            .map_err(|m| malformed(show_create_table_sql(&self.name), m))?;

        Ok(Table {
            name: self.name,
            columns,
            indexes,
            create_statement,
        })
    }
}

/// Database name and base-table names from a `SHOW FULL TABLES` result.
pub fn table_listing(result: &QueryResult) -> Result<(String, Vec<String>)> {
    adapter::table_listing(result).map_err(|message| FetchError::MalformedListing { message })
}

/// Build the schema from per-table metadata, keeping the given order.
pub fn normalize(database_name: String, raw: Vec<RawTableMetadata>) -> Result<DatabaseSchema> {
    let tables = raw
        .into_iter()
        .map(RawTableMetadata::into_table)
        .collect::<Result<Vec<_>>>()?;
    Ok(DatabaseSchema::new(database_name, tables))
}
