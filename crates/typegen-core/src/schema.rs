//! Canonical schema snapshot.
//!
//! These types are the normalized, database-variant-neutral form of what the
//! metadata fetcher collected. A [`DatabaseSchema`] is built once per run and
//! never mutated afterwards; every later stage takes it by reference.
//!
//! Ordering is significant everywhere: tables keep the order of the table
//! listing, columns keep `ORDINAL_POSITION` order and index columns keep
//! `Seq_in_index` order.

use serde::{Deserialize, Serialize};

/// Key role reported for a column (`SHOW FULL COLUMNS` `Key` field).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyRole {
    /// Part of the primary key (`PRI`)
    Primary,
    /// First column of a unique index (`UNI`)
    Unique,
    /// First column of a non-unique index (`MUL`)
    Multi,
    /// Not the leading column of any index
    #[default]
    None,
}

impl KeyRole {
    /// Parse the MySQL `Key` column value. Unrecognized values map to `None`.
    pub fn from_mysql(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "PRI" => Self::Primary,
            "UNI" => Self::Unique,
            "MUL" => Self::Multi,
            _ => Self::None,
        }
    }
}

/// Raw column metadata, one row of `SHOW FULL COLUMNS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Raw type string, e.g. `bigint(20) unsigned`
    #[serde(rename = "type")]
    pub column_type: String,

    /// Whether the column accepts NULL
    pub nullable: bool,

    /// Key role
    #[serde(default)]
    pub key: KeyRole,

    /// Free-text extra flags (`auto_increment`, `VIRTUAL GENERATED`, `INVISIBLE`, ...)
    #[serde(default)]
    pub extra: String,

    /// Default value. `None` is the explicit NULL default.
    #[serde(default)]
    pub default_value: Option<String>,

    /// Column comment, may carry annotations
    #[serde(default)]
    pub comment: String,
}

impl Column {
    /// Create a non-nullable column with no key, flags, default or comment.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            nullable: false,
            key: KeyRole::None,
            extra: String::new(),
            default_value: None,
            comment: String::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn key(mut self, key: KeyRole) -> Self {
        self.key = key;
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Index metadata, grouped from the rows of `SHOW INDEXES`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    /// Index name (`PRIMARY` for the primary key)
    pub name: String,

    /// Participating column names in index order
    pub columns: Vec<String>,

    /// Whether the index enforces uniqueness
    pub unique: bool,

    /// Index type as reported (`BTREE`, `FULLTEXT`, `SPATIAL`, ...)
    pub index_type: String,

    /// Index visibility (MySQL 8+). Older servers don't report it and are treated as visible.
    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Index comment
    #[serde(default)]
    pub comment: String,
}

fn default_visible() -> bool {
    true
}

impl Index {
    pub fn is_full_text(&self) -> bool {
        self.index_type.eq_ignore_ascii_case("FULLTEXT")
    }
}

/// One base table with its columns, indexes and raw DDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    pub name: String,

    /// Columns in ordinal order
    pub columns: Vec<Column>,

    /// Indexes in first-seen order
    #[serde(default)]
    pub indexes: Vec<Index>,

    /// Raw `CREATE TABLE` statement, kept for auditing and diffing only
    #[serde(default)]
    pub create_statement: String,
}

impl Table {
    /// Create a table definition with no indexes and an empty create statement.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            indexes: Vec::new(),
            create_statement: String::new(),
        }
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names in ordinal order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Immutable snapshot of one database's base tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Database (schema) name
    pub database_name: String,

    /// Tables in listing order
    pub tables: Vec<Table>,
}

impl DatabaseSchema {
    /// Create a schema snapshot.
    pub fn new(database_name: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            database_name: database_name.into(),
            tables,
        }
    }

    /// Get a table by name.
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Get all table names in listing order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_role_from_mysql() {
        assert_eq!(KeyRole::from_mysql("PRI"), KeyRole::Primary);
        assert_eq!(KeyRole::from_mysql("uni"), KeyRole::Unique);
        assert_eq!(KeyRole::from_mysql("MUL"), KeyRole::Multi);
        assert_eq!(KeyRole::from_mysql(""), KeyRole::None);
        assert_eq!(KeyRole::from_mysql("???"), KeyRole::None);
    }

    #[test]
    fn test_column_builder() {
        let column = Column::new("bio", "text")
            .nullable()
            .comment("about me")
            .extra("INVISIBLE");

        assert!(column.nullable);
        assert_eq!(column.key, KeyRole::None);
        assert_eq!(column.extra, "INVISIBLE");
        assert_eq!(column.default_value, None);
        assert_eq!(column.comment, "about me");
    }

    #[test]
    fn test_index_full_text() {
        let index = Index {
            name: "ft_bio".to_string(),
            columns: vec!["bio".to_string()],
            unique: false,
            index_type: "FULLTEXT".to_string(),
            visible: true,
            comment: String::new(),
        };
        assert!(index.is_full_text());
    }

    #[test]
    fn test_schema_lookup_preserves_order() {
        let schema = DatabaseSchema::new(
            "app",
            vec![
                Table::new("users", vec![Column::new("id", "int")]),
                Table::new("posts", vec![Column::new("id", "int")]),
            ],
        );

        assert_eq!(schema.table_names(), vec!["users", "posts"]);
        assert!(schema.get_table("posts").is_some());
        assert!(schema.get_table("comments").is_none());
    }

    #[test]
    fn test_column_serializes_type_field() {
        let json = serde_json::to_value(Column::new("id", "int(11)")).unwrap();
        assert_eq!(json["type"], "int(11)");
        assert_eq!(json["key"], "none");
    }
}
