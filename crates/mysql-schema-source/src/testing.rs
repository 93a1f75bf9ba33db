//! In-memory [`QueryExecutor`] for tests.
//!
//! Responses are keyed by exact SQL text. Unregistered statements fail.

use crate::executor::{FieldInfo, QueryExecutor, QueryResult};
use crate::normalizer::{
    show_columns_sql, show_create_table_sql, show_indexes_sql, SHOW_FULL_TABLES,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

const COLUMN_FIELDS: [&str; 9] = [
    "Field",
    "Type",
    "Collation",
    "Null",
    "Key",
    "Default",
    "Extra",
    "Privileges",
    "Comment",
];

const INDEX_FIELDS: [&str; 15] = [
    "Table",
    "Non_unique",
    "Key_name",
    "Seq_in_index",
    "Column_name",
    "Collation",
    "Cardinality",
    "Sub_part",
    "Packed",
    "Null",
    "Index_type",
    "Comment",
    "Index_comment",
    "Visible",
    "Expression",
];

#[derive(Debug, Clone)]
enum Response {
    Rows(QueryResult),
    Fail(String),
}

/// A `SHOW FULL COLUMNS` row for [`MockExecutor::table`].
#[derive(Debug, Clone, Default)]
pub struct MockColumn {
    pub field: String,
    pub column_type: String,
    pub nullable: bool,
    pub key: String,
    pub default: Option<String>,
    pub extra: String,
    pub comment: String,
}

impl MockColumn {
    pub fn new(field: &str, column_type: &str) -> Self {
        Self {
            field: field.to_string(),
            column_type: column_type.to_string(),
            ..Default::default()
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn extra(mut self, extra: &str) -> Self {
        self.extra = extra.to_string();
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }
}

/// A `SHOW INDEXES` index for [`MockExecutor::table`].
#[derive(Debug, Clone)]
pub struct MockIndex {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
    pub index_type: String,
}

impl MockIndex {
    pub fn new(name: &str, columns: &[&str], unique: bool) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            unique,
            index_type: "BTREE".to_string(),
        }
    }

    pub fn full_text(name: &str, columns: &[&str]) -> Self {
        Self {
            index_type: "FULLTEXT".to_string(),
            ..Self::new(name, columns, false)
        }
    }
}

/// Executor that answers from a fixed table of responses and records the
/// statements it was asked to run.
#[derive(Debug, Default)]
pub struct MockExecutor {
    responses: HashMap<String, Response>,
    executed: Mutex<Vec<String>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw response for a statement.
    pub fn respond(mut self, sql: impl Into<String>, result: QueryResult) -> Self {
        self.responses.insert(sql.into(), Response::Rows(result));
        self
    }

    /// Make a statement fail with the given message.
    pub fn fail(mut self, sql: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses
            .insert(sql.into(), Response::Fail(message.into()));
        self
    }

    /// Register the `SHOW FULL TABLES` listing. Entries are (name, table type).
    pub fn listing(self, database: &str, tables: &[(&str, &str)]) -> Self {
        let result = QueryResult::new(
            vec![
                FieldInfo::new(format!("Tables_in_{database}")),
                FieldInfo::new("Table_type"),
            ],
            tables
                .iter()
                .map(|(name, kind)| vec![Some(name.to_string()), Some(kind.to_string())])
                .collect(),
        );
        self.respond(SHOW_FULL_TABLES, result)
    }

    /// Register the three per-table statements for one table.
    pub fn table(self, name: &str, columns: &[MockColumn], indexes: &[MockIndex]) -> Self {
        let column_rows = columns
            .iter()
            .map(|c| {
                vec![
                    Some(c.field.clone()),
                    Some(c.column_type.clone()),
                    None,
                    Some(if c.nullable { "YES" } else { "NO" }.to_string()),
                    Some(c.key.clone()),
                    c.default.clone(),
                    Some(c.extra.clone()),
                    Some("select,insert,update,references".to_string()),
                    Some(c.comment.clone()),
                ]
            })
            .collect();

        let index_rows = indexes
            .iter()
            .flat_map(|index| {
                index.columns.iter().enumerate().map(move |(seq, column)| {
                    vec![
                        Some(name.to_string()),
                        Some(if index.unique { "0" } else { "1" }.to_string()),
                        Some(index.name.clone()),
                        Some((seq + 1).to_string()),
                        Some(column.clone()),
                        Some("A".to_string()),
                        Some("0".to_string()),
                        None,
                        None,
                        Some(String::new()),
                        Some(index.index_type.clone()),
                        Some(String::new()),
                        Some(String::new()),
                        Some("YES".to_string()),
                        None,
                    ]
                })
            })
            .collect();

        let create = QueryResult::new(
            vec![FieldInfo::new("Table"), FieldInfo::new("Create Table")],
            vec![vec![
                Some(name.to_string()),
                Some(format!("CREATE TABLE `{name}` (...)")),
            ]],
        );

        self.respond(show_columns_sql(name), fields_result(&COLUMN_FIELDS, column_rows))
            .respond(show_indexes_sql(name), fields_result(&INDEX_FIELDS, index_rows))
            .respond(show_create_table_sql(name), create)
    }

    /// Statements executed so far, in call order.
    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .map(|executed| executed.clone())
            .unwrap_or_default()
    }
}

fn fields_result(fields: &[&str], rows: Vec<Vec<Option<String>>>) -> QueryResult {
    QueryResult::new(fields.iter().map(|f| FieldInfo::new(*f)).collect(), rows)
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn execute(&self, sql: &str) -> anyhow::Result<QueryResult> {
        if let Ok(mut executed) = self.executed.lock() {
            executed.push(sql.to_string());
        }
        match self.responses.get(sql) {
            Some(Response::Rows(result)) => Ok(result.clone()),
            Some(Response::Fail(message)) => Err(anyhow::anyhow!("{message}")),
            None => Err(anyhow::anyhow!("Unexpected statement: {sql}")),
        }
    }
}
