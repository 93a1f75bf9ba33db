//! Raw row adapter.
//!
//! Every assumption about the field names and value spellings of the `SHOW`
//! statements lives here. The rest of the pipeline only sees
//! [`typegen_core`] types.
//!
//! ```text
//! SHOW FULL TABLES        Tables_in_<db> | Table_type
//! SHOW FULL COLUMNS FROM  Field | Type | Collation | Null | Key | Default | Extra | Privileges | Comment
//! SHOW INDEXES FROM       Table | Non_unique | Key_name | Seq_in_index | Column_name | ... | Index_type | Comment | Index_comment | Visible | Expression
//! SHOW CREATE TABLE       Table | Create Table
//! ```

use crate::executor::{QueryResult, RowView};
use typegen_core::{Column, Index, KeyRole};

const TABLES_IN_PREFIX: &str = "Tables_in_";
const TABLE_TYPE: &str = "Table_type";
const BASE_TABLE: &str = "BASE TABLE";

/// Database name and base table names from `SHOW FULL TABLES`, in listing order.
///
/// The database name comes from the `Tables_in_<db>` field name. Rows whose
/// `Table_type` is anything other than `BASE TABLE` (views, system views)
/// are dropped.
pub fn table_listing(result: &QueryResult) -> Result<(String, Vec<String>), String> {
    let (name_idx, database_name) = result
        .fields
        .iter()
        .enumerate()
        .find_map(|(idx, field)| {
            let prefix = field.name.get(..TABLES_IN_PREFIX.len())?;
            prefix
                .eq_ignore_ascii_case(TABLES_IN_PREFIX)
                .then(|| (idx, field.name[TABLES_IN_PREFIX.len()..].to_string()))
        })
        .ok_or_else(|| format!("no '{TABLES_IN_PREFIX}<database>' field"))?;

    let type_idx = result.field_index(TABLE_TYPE);

    let mut tables = Vec::new();
    for row in result.rows() {
        if let Some(table_type) = type_idx.and_then(|idx| row.get_at(idx)) {
            if !table_type.eq_ignore_ascii_case(BASE_TABLE) {
                continue;
            }
        }
        let name = row
            .get_at(name_idx)
            .ok_or_else(|| "NULL table name".to_string())?;
        tables.push(name.to_string());
    }

    Ok((database_name, tables))
}

/// One `SHOW FULL COLUMNS` row.
pub fn column(row: &RowView<'_>) -> Result<Column, String> {
    let name = row.get("Field").ok_or("missing 'Field'")?;
    let column_type = row.get("Type").ok_or("missing 'Type'")?;

    Ok(Column {
        name: name.to_string(),
        column_type: column_type.to_string(),
        nullable: row
            .get("Null")
            .is_some_and(|v| v.eq_ignore_ascii_case("YES")),
        key: row.get("Key").map(KeyRole::from_mysql).unwrap_or_default(),
        extra: row.get("Extra").unwrap_or_default().to_string(),
        default_value: row.get("Default").map(str::to_string),
        comment: row.get("Comment").unwrap_or_default().to_string(),
    })
}

/// All `SHOW FULL COLUMNS` rows, in ordinal order.
pub fn columns(result: &QueryResult) -> Result<Vec<Column>, String> {
    result.rows().map(|row| column(&row)).collect()
}

/// Group `SHOW INDEXES` rows (one per index column) into indexes.
///
/// Indexes keep first-seen order; columns are ordered by `Seq_in_index`.
/// Functional key parts have no `Column_name` and are skipped.
pub fn indexes(result: &QueryResult) -> Result<Vec<Index>, String> {
    let mut grouped: Vec<(Index, Vec<(u32, String)>)> = Vec::new();

    for row in result.rows() {
        let key_name = row.get("Key_name").ok_or("missing 'Key_name'")?;
        let seq = row
            .get("Seq_in_index")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(u32::MAX);

        let idx = match grouped.iter().position(|(index, _)| index.name == key_name) {
            Some(idx) => idx,
            None => {
                grouped.push((
                    Index {
                        name: key_name.to_string(),
                        columns: Vec::new(),
                        unique: row.get("Non_unique").is_some_and(|v| v.trim() == "0"),
                        index_type: row.get("Index_type").unwrap_or_default().to_string(),
                        visible: row
                            .get("Visible")
                            .is_none_or(|v| !v.eq_ignore_ascii_case("NO")),
                        comment: row.get("Index_comment").unwrap_or_default().to_string(),
                    },
                    Vec::new(),
                ));
                grouped.len() - 1
            }
        };

        if let Some(column_name) = row.get("Column_name") {
            grouped[idx].1.push((seq, column_name.to_string()));
        }
    }

    Ok(grouped
        .into_iter()
        .map(|(mut index, mut columns)| {
            columns.sort_by_key(|(seq, _)| *seq);
            index.columns = columns.into_iter().map(|(_, name)| name).collect();
            index
        })
        .collect())
}

/// The DDL text from `SHOW CREATE TABLE`.
pub fn create_statement(result: &QueryResult) -> Result<String, String> {
    let row = result.rows().next().ok_or("no rows")?;
    row.get("Create Table")
        .map(str::to_string)
        .ok_or_else(|| "missing 'Create Table'".to_string())
}
