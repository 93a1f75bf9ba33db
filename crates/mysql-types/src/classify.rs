//! Column classification.
//!
//! Precedence, first match wins:
//!
//! 1. Annotation override from the column comment
//! 2. Base type extracted from the raw type string
//! 3. Base type to language type mapping (bigint / tinyint(1) knobs apply)
//! 4. Enum/set members from the raw type string
//!
//! Nullability, defaults, key role and the `Extra` flags are derived
//! independently of the type.

use crate::annotation::{self, AnnotationConflict};
use crate::column_type::ParsedColumnType;
use crate::language::map_base_type;
use crate::naming::field_name;
use regex::Regex;
use std::sync::LazyLock;
use typegen_core::{
    BaseSqlType, ClassificationWarning, ClassifierConfig, Column, FieldDescriptor, KeyRole,
};

static AUTO_INCREMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bauto_increment\b").expect("valid pattern"));

static ALWAYS_GENERATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:virtual|stored)\s+generated\b").expect("valid pattern"));

static INVISIBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\binvisible\b").expect("valid pattern"));

/// Classify one column.
///
/// Never fails on unrecognized types; those degrade to `unknown` with a
/// warning on the returned descriptor. Fails only when the comment carries
/// more than one distinct annotation.
pub fn classify(
    column: &Column,
    config: &ClassifierConfig,
) -> Result<FieldDescriptor, AnnotationConflict> {
    let scan = annotation::scan(&column.comment);
    let cast_override = scan.resolve()?;
    let mut warnings = scan.warnings;

    let parsed = ParsedColumnType::parse(&column.column_type);

    let (language_type, cast_type, members) = match cast_override {
        Some(cast_override) => (
            cast_override.language_type(),
            cast_override.cast_type(),
            cast_override.members().to_vec(),
        ),
        None => {
            if parsed.base == BaseSqlType::Unknown {
                warnings.push(ClassificationWarning::UnknownType {
                    raw_type: column.column_type.clone(),
                });
            }
            let (language_type, cast_type) = map_base_type(&parsed, config);
            (language_type, cast_type, parsed.members.clone())
        }
    };

    Ok(FieldDescriptor {
        field_name: field_name(&column.name),
        column_name: column.name.clone(),
        base_sql_type: parsed.base,
        language_type,
        cast_type,
        members,
        nullable: column.nullable,
        primary_key: column.key == KeyRole::Primary,
        unique: column.key == KeyRole::Unique,
        auto_increment: AUTO_INCREMENT.is_match(&column.extra),
        always_generated: ALWAYS_GENERATED.is_match(&column.extra),
        invisible: INVISIBLE.is_match(&column.extra),
        // nullable columns default to NULL unless overridden
        has_default: column.default_value.is_some() || column.nullable,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use typegen_core::CastType;

    fn config() -> ClassifierConfig {
        ClassifierConfig::default()
    }

    fn classify_type(column_type: &str, config: &ClassifierConfig) -> FieldDescriptor {
        classify(&Column::new("value", column_type), config).unwrap()
    }

    fn pair(column_type: &str) -> (String, CastType) {
        let field = classify_type(column_type, &config());
        (field.language_type, field.cast_type)
    }

    #[test]
    fn test_recognized_base_types() {
        let expected = [
            ("tinyint(4)", "number", CastType::Int),
            ("smallint(6)", "number", CastType::Int),
            ("mediumint(9)", "number", CastType::Int),
            ("int(11)", "number", CastType::Int),
            ("integer", "number", CastType::Int),
            ("bigint(20)", "number", CastType::BigInt),
            ("float", "number", CastType::Float),
            ("double", "number", CastType::Float),
            ("real", "number", CastType::Float),
            ("decimal(10,2)", "string", CastType::String),
            ("numeric(18,4)", "string", CastType::String),
            ("bit(1)", "number", CastType::Int),
            ("boolean", "boolean", CastType::Boolean),
            ("char(10)", "string", CastType::String),
            ("varchar(255)", "string", CastType::String),
            ("tinytext", "string", CastType::String),
            ("text", "string", CastType::String),
            ("mediumtext", "string", CastType::String),
            ("longtext", "string", CastType::String),
            ("binary(16)", "Buffer", CastType::String),
            ("varbinary(255)", "Buffer", CastType::String),
            ("tinyblob", "Buffer", CastType::String),
            ("blob", "Buffer", CastType::String),
            ("mediumblob", "Buffer", CastType::String),
            ("longblob", "Buffer", CastType::String),
            ("date", "Date", CastType::Date),
            ("datetime(6)", "Date", CastType::Date),
            ("timestamp", "Date", CastType::Date),
            ("time", "string", CastType::String),
            ("year(4)", "number", CastType::Int),
            ("json", "unknown", CastType::Json),
        ];

        for (column_type, language_type, cast_type) in expected {
            assert_eq!(
                pair(column_type),
                (language_type.to_string(), cast_type),
                "classifying {column_type}"
            );
            assert_eq!(
                pair(&column_type.to_uppercase()),
                (language_type.to_string(), cast_type),
                "classifying {column_type} in upper case"
            );
        }
    }

    #[test]
    fn test_modifiers_do_not_change_classification() {
        let plain = classify_type("bigint", &config());
        let decorated = classify_type("BIGINT(20) UNSIGNED", &config());
        assert_eq!(plain.base_sql_type, decorated.base_sql_type);
        assert_eq!(plain.language_type, decorated.language_type);
        assert_eq!(plain.cast_type, decorated.cast_type);

        let zerofill = classify_type("int(10) unsigned zerofill", &config());
        assert_eq!(zerofill.base_sql_type, BaseSqlType::Int);
        assert_eq!(zerofill.language_type, "number");
    }

    #[test]
    fn test_bigint_as_string() {
        let config = ClassifierConfig {
            treat_bigint_as_string: true,
            ..ClassifierConfig::default()
        };
        let field = classify_type("bigint(20) unsigned", &config);
        assert_eq!(field.language_type, "string");
        assert_eq!(field.cast_type, CastType::BigInt);
    }

    #[test]
    fn test_tinyint_one() {
        let field = classify_type("tinyint(1)", &config());
        assert_eq!(field.language_type, "boolean");
        assert_eq!(field.cast_type, CastType::Boolean);

        let config = ClassifierConfig {
            treat_tinyint_one_as_boolean: false,
            ..ClassifierConfig::default()
        };
        let field = classify_type("tinyint(1)", &config);
        assert_eq!(field.language_type, "number");
        assert_eq!(field.cast_type, CastType::Int);

        // width other than 1 is never boolean
        let field = classify_type("tinyint(2)", &ClassifierConfig::default());
        assert_eq!(field.language_type, "number");
    }

    #[test]
    fn test_enum_and_set_without_annotation() {
        let field = classify_type("enum('a','b')", &config());
        assert_eq!(field.base_sql_type, BaseSqlType::Enum);
        assert_eq!(field.language_type, "'a' | 'b'");
        assert_eq!(field.cast_type, CastType::Enum);
        assert_eq!(field.members, vec!["a", "b"]);

        let field = classify_type("set('a','b')", &config());
        assert_eq!(field.base_sql_type, BaseSqlType::Set);
        assert_eq!(field.language_type, "('a' | 'b')[]");
        assert_eq!(field.cast_type, CastType::Set);
    }

    #[test]
    fn test_unknown_type_degrades_with_warning() {
        let field = classify_type("geometry", &config());
        assert_eq!(field.base_sql_type, BaseSqlType::Unknown);
        assert_eq!(field.language_type, "unknown");
        assert_eq!(field.cast_type, CastType::String);
        assert_eq!(
            field.warnings,
            vec![ClassificationWarning::UnknownType {
                raw_type: "geometry".to_string()
            }]
        );
    }

    #[test]
    fn test_json_annotation_overrides_int() {
        let column = Column::new("payload", "int").comment("@json");
        let field = classify(&column, &config()).unwrap();
        assert_eq!(field.cast_type, CastType::Json);
        assert_eq!(field.language_type, "unknown");
        assert_eq!(field.base_sql_type, BaseSqlType::Int);
        assert!(field.warnings.is_empty());
    }

    #[test]
    fn test_bigint_annotation_in_free_text() {
        let column = Column::new("legacy_id", "int").comment("legacy @bigint field");
        let field = classify(&column, &config()).unwrap();
        assert_eq!(field.cast_type, CastType::BigInt);
        assert_eq!(field.language_type, "bigint");
    }

    #[test]
    fn test_enum_annotation_overrides_varchar() {
        let column = Column::new("status", "varchar(20)").comment("@enum('open', 'closed')");
        let field = classify(&column, &config()).unwrap();
        assert_eq!(field.cast_type, CastType::Enum);
        assert_eq!(field.language_type, "'open' | 'closed'");
        assert_eq!(field.members, vec!["open", "closed"]);
    }

    #[test]
    fn test_json_hint_becomes_language_type() {
        let column = Column::new("prefs", "json").comment("@json({ theme: string })");
        let field = classify(&column, &config()).unwrap();
        assert_eq!(field.language_type, "{ theme: string }");
        assert_eq!(field.cast_type, CastType::Json);
    }

    #[test]
    fn test_malformed_annotation_falls_back_to_inference() {
        let column = Column::new("status", "varchar(20)").comment("@enum()");
        let field = classify(&column, &config()).unwrap();
        assert_eq!(field.cast_type, CastType::String);
        assert_eq!(field.language_type, "string");
        assert_eq!(field.warnings.len(), 1);
    }

    #[test]
    fn test_ambiguous_annotation_fails() {
        let column = Column::new("flags", "int").comment("@bigint @set(a,b)");
        let err = classify(&column, &config()).unwrap_err();
        assert_eq!(err.annotations, vec!["@bigint", "@set(a,b)"]);
    }

    #[test]
    fn test_extra_flags() {
        let column = Column::new("id", "bigint(20) unsigned")
            .key(KeyRole::Primary)
            .extra("auto_increment");
        let field = classify(&column, &config()).unwrap();
        assert!(field.primary_key);
        assert!(field.auto_increment);
        assert!(!field.always_generated);
        assert!(!field.invisible);

        let column = Column::new("total", "int").extra("STORED GENERATED");
        assert!(classify(&column, &config()).unwrap().always_generated);

        let column = Column::new("total", "int").extra("VIRTUAL GENERATED INVISIBLE");
        let field = classify(&column, &config()).unwrap();
        assert!(field.always_generated);
        assert!(field.invisible);

        // MySQL 8 marks expression defaults this way; not a generated column
        let column = Column::new("created_at", "timestamp")
            .default_value("CURRENT_TIMESTAMP")
            .extra("DEFAULT_GENERATED");
        let field = classify(&column, &config()).unwrap();
        assert!(!field.always_generated);
        assert!(field.has_default);
    }

    #[test]
    fn test_key_roles() {
        let column = Column::new("email", "varchar(255)").key(KeyRole::Unique);
        let field = classify(&column, &config()).unwrap();
        assert!(field.unique);
        assert!(!field.primary_key);

        let column = Column::new("author_id", "int").key(KeyRole::Multi);
        let field = classify(&column, &config()).unwrap();
        assert!(!field.unique);
        assert!(!field.primary_key);
    }

    #[test]
    fn test_nullability_and_defaults() {
        let required = classify_type("varchar(255)", &config());
        assert!(!required.nullable);
        assert!(!required.has_default);

        let nullable = classify(&Column::new("bio", "text").nullable(), &config()).unwrap();
        assert!(nullable.nullable);
        assert!(nullable.has_default);

        let defaulted =
            classify(&Column::new("role", "varchar(20)").default_value("member"), &config())
                .unwrap();
        assert!(!defaulted.nullable);
        assert!(defaulted.has_default);

        // an empty-string default is still a default
        let empty = classify(&Column::new("note", "varchar(20)").default_value(""), &config())
            .unwrap();
        assert!(empty.has_default);
    }

    #[test]
    fn test_field_name_is_camel_case() {
        let field = classify(&Column::new("created_at", "datetime"), &config()).unwrap();
        assert_eq!(field.field_name, "createdAt");
        assert_eq!(field.column_name, "created_at");
    }

    #[test]
    fn test_serialized_descriptor_drops_warnings() {
        let field = classify_type("geometry", &config());
        assert_eq!(field.warnings.len(), 1);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["castType"], "string");
        assert_eq!(json["languageType"], "unknown");
        assert_eq!(json["baseSqlType"], "unknown");
        assert!(json.get("warnings").is_none());
        assert!(json.get("members").is_none());
    }
}
