//! Derived descriptors.
//!
//! A [`FieldDescriptor`] is the fully classified form of one column, a
//! [`ModelDescriptor`] groups the fields of one table and a
//! [`SchemaDescriptor`] is the serializable value shipped with the generated
//! code. All three are pure derivations of a [`crate::DatabaseSchema`] and are
//! rebuilt from scratch on every run.
//!
//! The shape predicates (`in_create_data`, `optional_on_create`, ...) encode
//! which columns appear in which generated shape, so the generator and any
//! other consumer agree on them.

use crate::error::ClassificationWarning;
use crate::types::{BaseSqlType, CastType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic record for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Identifier-safe lower camel case of the column name
    pub field_name: String,

    pub column_name: String,

    pub base_sql_type: BaseSqlType,

    /// Target type expression, e.g. `string`, `'a' | 'b'`
    pub language_type: String,

    pub cast_type: CastType,

    /// Enum or set members, when the field has any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,

    pub nullable: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub auto_increment: bool,
    pub always_generated: bool,
    pub invisible: bool,
    pub has_default: bool,

    /// Recoverable classification problems. Not shipped.
    #[serde(skip)]
    pub warnings: Vec<ClassificationWarning>,
}

impl FieldDescriptor {
    /// Present in the row shape returned by `SELECT *`.
    pub fn in_select_all(&self) -> bool {
        !self.invisible
    }

    /// Present in the create-input shape.
    pub fn in_create_data(&self) -> bool {
        !self.always_generated
    }

    /// May be left out of the create-input shape.
    pub fn optional_on_create(&self) -> bool {
        self.auto_increment || self.has_default
    }

    /// Present in the update-input shape. Every present field is optional there.
    pub fn in_update_data(&self) -> bool {
        !self.always_generated && !self.auto_increment
    }

    /// `language_type`, extended with `| null` for nullable fields.
    ///
    /// Function and conditional types are parenthesized first so `| null`
    /// applies to the whole type.
    pub fn value_type(&self) -> String {
        if !self.nullable {
            self.language_type.clone()
        } else if needs_grouping(&self.language_type) {
            format!("({}) | null", self.language_type)
        } else {
            format!("{} | null", self.language_type)
        }
    }
}

/// True when a type expression has a top-level `=>` or `?`, where a
/// trailing `| null` would bind to the return or branch type.
fn needs_grouping(ty: &str) -> bool {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = ty.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            match c {
                '\\' => {
                    chars.next();
                }
                _ if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '=' if chars.peek() == Some(&'>') => {
                chars.next();
                if depth == 0 {
                    return true;
                }
            }
            '?' if depth == 0 => return true,
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

/// Full-text index exposed to generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullTextIndexDescriptor {
    pub name: String,

    /// Field names (not column names) in index order
    pub fields: Vec<String>,
}

/// All fields of one table plus its derived names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub table_name: String,
    pub model_name: String,
    pub accessor_name: String,

    /// Fields in column order
    pub fields: Vec<FieldDescriptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub full_text_indexes: Vec<FullTextIndexDescriptor>,
}

impl ModelDescriptor {
    pub fn primary_key_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.primary_key)
    }

    /// Fields that are individually unique, excluding a single-column primary key.
    pub fn unique_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.unique && !f.primary_key)
    }

    pub fn field_by_column(&self, column_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.column_name == column_name)
    }
}

/// The serializable schema value shipped with generated code.
///
/// `cast_map` is keyed by `"table.column"` so consumers can look a column's
/// cast type up without walking `models`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescriptor {
    pub database_name: String,
    pub models: Vec<ModelDescriptor>,
    pub cast_map: BTreeMap<String, CastType>,
}

impl SchemaDescriptor {
    /// Build a descriptor, deriving the cast map from `models`.
    pub fn new(database_name: impl Into<String>, models: Vec<ModelDescriptor>) -> Self {
        let cast_map = models
            .iter()
            .flat_map(|model| {
                model.fields.iter().map(move |field| {
                    (
                        cast_key(&model.table_name, &field.column_name),
                        field.cast_type,
                    )
                })
            })
            .collect();

        Self {
            database_name: database_name.into(),
            models,
            cast_map,
        }
    }

    /// Look up the cast type of `table.column`.
    pub fn cast_type(&self, table: &str, column: &str) -> Option<CastType> {
        self.cast_map.get(&cast_key(table, column)).copied()
    }

    pub fn get_model(&self, table_name: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.table_name == table_name)
    }

    /// Iterate `(table, column, warning)` for every recorded classification warning.
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &str, &ClassificationWarning)> {
        self.models.iter().flat_map(|model| {
            model.fields.iter().flat_map(move |field| {
                field.warnings.iter().map(move |warning| {
                    (
                        model.table_name.as_str(),
                        field.column_name.as_str(),
                        warning,
                    )
                })
            })
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// The `"table.column"` key used by the cast map.
pub fn cast_key(table: &str, column: &str) -> String {
    format!("{table}.{column}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(column_name: &str, cast_type: CastType) -> FieldDescriptor {
        FieldDescriptor {
            field_name: column_name.to_string(),
            column_name: column_name.to_string(),
            base_sql_type: BaseSqlType::Int,
            language_type: "number".to_string(),
            cast_type,
            members: Vec::new(),
            nullable: false,
            primary_key: false,
            unique: false,
            auto_increment: false,
            always_generated: false,
            invisible: false,
            has_default: false,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_value_type_groups_function_and_conditional_types() {
        let mut f = field("handler", CastType::Json);
        f.nullable = true;

        f.language_type = "() => void".to_string();
        assert_eq!(f.value_type(), "(() => void) | null");

        f.language_type = "T extends string ? 'a' : 'b'".to_string();
        assert_eq!(f.value_type(), "(T extends string ? 'a' : 'b') | null");

        f.language_type = "Array<(x: number) => void>".to_string();
        assert_eq!(f.value_type(), "Array<(x: number) => void> | null");

        f.language_type = "{ a?: string }".to_string();
        assert_eq!(f.value_type(), "{ a?: string } | null");

        f.language_type = "'a' | 'b'".to_string();
        assert_eq!(f.value_type(), "'a' | 'b' | null");

        f.language_type = "'why?'".to_string();
        assert_eq!(f.value_type(), "'why?' | null");

        f.nullable = false;
        f.language_type = "() => void".to_string();
        assert_eq!(f.value_type(), "() => void");
    }

    fn model(table_name: &str, fields: Vec<FieldDescriptor>) -> ModelDescriptor {
        ModelDescriptor {
            table_name: table_name.to_string(),
            model_name: table_name.to_string(),
            accessor_name: table_name.to_string(),
            fields,
            full_text_indexes: Vec::new(),
        }
    }

    #[test]
    fn test_cast_map_covers_every_column() {
        let descriptor = SchemaDescriptor::new(
            "app",
            vec![
                model(
                    "users",
                    vec![field("id", CastType::BigInt), field("meta", CastType::Json)],
                ),
                model("posts", vec![field("id", CastType::Int)]),
            ],
        );

        assert_eq!(descriptor.cast_map.len(), 3);
        assert_eq!(descriptor.cast_type("users", "id"), Some(CastType::BigInt));
        assert_eq!(descriptor.cast_type("users", "meta"), Some(CastType::Json));
        assert_eq!(descriptor.cast_type("posts", "id"), Some(CastType::Int));
        assert_eq!(descriptor.cast_type("posts", "missing"), None);
    }

    #[test]
    fn test_shape_predicates() {
        let mut id = field("id", CastType::Int);
        id.primary_key = true;
        id.auto_increment = true;
        assert!(id.in_create_data());
        assert!(id.optional_on_create());
        assert!(!id.in_update_data());

        let mut total = field("total", CastType::Int);
        total.always_generated = true;
        assert!(!total.in_create_data());
        assert!(!total.in_update_data());

        let mut secret = field("secret", CastType::String);
        secret.invisible = true;
        assert!(!secret.in_select_all());
    }

    #[test]
    fn test_value_type_appends_null() {
        let mut bio = field("bio", CastType::String);
        bio.language_type = "string".to_string();
        assert_eq!(bio.value_type(), "string");
        bio.nullable = true;
        assert_eq!(bio.value_type(), "string | null");
    }

    #[test]
    fn test_json_uses_camel_case_and_skips_warnings() {
        let mut id = field("user_id", CastType::Int);
        id.warnings.push(ClassificationWarning::UnknownType {
            raw_type: "geometry".to_string(),
        });
        let descriptor = SchemaDescriptor::new("app", vec![model("users", vec![id])]);

        let json = descriptor.to_json_pretty().unwrap();
        assert!(json.contains("\"castMap\""));
        assert!(json.contains("\"users.user_id\": \"int\""));
        assert!(json.contains("\"hasDefault\": false"));
        assert!(!json.contains("warnings"));
        assert!(!json.contains("members"));

        let parsed = SchemaDescriptor::from_json(&json).unwrap();
        assert_eq!(parsed.cast_type("users", "user_id"), Some(CastType::Int));
        assert!(parsed.warnings().next().is_none());
        assert_eq!(descriptor.warnings().count(), 1);
    }
}
