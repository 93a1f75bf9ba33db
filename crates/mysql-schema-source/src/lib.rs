//! MySQL schema introspection for mysql-typegen
//!
//! Reads table, column and index metadata through `SHOW` statements and
//! normalizes it into a [`typegen_core::DatabaseSchema`]. The database is
//! never written to.

mod adapter;
mod client;
pub mod error;
pub mod executor;
mod fetcher;
pub mod normalizer;
pub mod testing;

pub use client::{new_mysql_pool, sanitize_connection_string, MySqlExecutor};
pub use error::FetchError;
pub use executor::{FieldInfo, QueryExecutor, QueryResult, RowView};
pub use fetcher::fetch_schema;
