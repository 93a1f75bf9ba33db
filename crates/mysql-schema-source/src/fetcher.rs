//! Schema fetching over a [`QueryExecutor`].
//!
//! One `SHOW FULL TABLES`, then three statements per base table. Tables are
//! fetched concurrently and the result keeps listing order. Any failure
//! aborts the whole fetch.

use crate::error::{FetchError, Result};
use crate::executor::{QueryExecutor, QueryResult};
use crate::normalizer::{
    self, show_columns_sql, show_create_table_sql, show_indexes_sql, RawTableMetadata,
    SHOW_FULL_TABLES,
};
use futures::future::try_join_all;
use tracing::{debug, info};
use typegen_core::DatabaseSchema;

/// Fetch the full schema of the database the executor is connected to.
pub async fn fetch_schema<E>(executor: &E) -> Result<DatabaseSchema>
where
    E: QueryExecutor + ?Sized,
{
    let listing = executor
        .execute(SHOW_FULL_TABLES)
        .await
        .map_err(|source| FetchError::TableListing {
            source: source.into(),
        })?;
    let (database_name, tables) = normalizer::table_listing(&listing)?;

    info!(
        "Fetching schema for {} tables in database '{}'",
        tables.len(),
        database_name
    );

    let raw = try_join_all(tables.iter().map(|table| fetch_table(executor, table))).await?;
    let schema = normalizer::normalize(database_name, raw)?;

    info!("Fetched schema for database '{}'", schema.database_name);
    Ok(schema)
}

async fn fetch_table<E>(executor: &E, table: &str) -> Result<RawTableMetadata>
where
    E: QueryExecutor + ?Sized,
{
    debug!("Fetching metadata for table '{table}'");

    let (columns, indexes, create) = futures::try_join!(
        run_query(executor, table, show_columns_sql(table)),
        run_query(executor, table, show_indexes_sql(table)),
        run_query(executor, table, show_create_table_sql(table)),
    )?;

    debug!(
        "Table '{table}': {} column rows, {} index rows",
        columns.rows.len(),
        indexes.rows.len()
    );

    Ok(RawTableMetadata {
        name: table.to_string(),
        columns,
        indexes,
        create,
    })
}

async fn run_query<E>(executor: &E, table: &str, query: String) -> Result<QueryResult>
where
    E: QueryExecutor + ?Sized,
{
    match executor.execute(&query).await {
        Ok(result) => Ok(result),
        Err(source) => Err(FetchError::Query {
            table: table.to_string(),
            query,
            source: source.into(),
        }),
    }
}
