//! Error and warning types shared across the pipeline.

use thiserror::Error;

/// Fatal problems found while turning a schema snapshot into descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// More than one distinct cast-override annotation on a single column
    #[error(
        "Ambiguous annotations on column '{table}.{column}': {}",
        .annotations.join(", ")
    )]
    AmbiguousAnnotation {
        table: String,
        column: String,
        annotations: Vec<String>,
    },

    /// Two tables normalize to the same model name, or one table's model
    /// name equals another table's shape type name
    #[error(
        "Tables '{first_table}' and '{second_table}' both generate the type name '{model_name}'"
    )]
    NamingCollision {
        model_name: String,
        first_table: String,
        second_table: String,
    },

    /// A model name that would shadow a built-in type the generated code uses
    #[error(
        "Table '{table}' maps to model name '{model_name}', which shadows a built-in type"
    )]
    ReservedTypeName { table: String, model_name: String },

    /// Two columns of one table normalize to the same field name
    #[error(
        "Columns '{first_column}' and '{second_column}' of table '{table}' both map to field name '{field_name}'"
    )]
    FieldNameCollision {
        table: String,
        field_name: String,
        first_column: String,
        second_column: String,
    },
}

/// Recoverable classification problems, attached to the affected field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationWarning {
    #[error("Unrecognized column type '{raw_type}', using unknown")]
    UnknownType { raw_type: String },

    #[error("Ignoring malformed annotation '{annotation}': {reason}")]
    MalformedAnnotation { annotation: String, reason: String },
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offenders() {
        let err = SchemaError::NamingCollision {
            model_name: "UserProfile".to_string(),
            first_table: "user_profile".to_string(),
            second_table: "userProfile".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("user_profile"));
        assert!(message.contains("userProfile"));

        let err = SchemaError::AmbiguousAnnotation {
            table: "users".to_string(),
            column: "flags".to_string(),
            annotations: vec!["@bigint".to_string(), "@json".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous annotations on column 'users.flags': @bigint, @json"
        );
    }
}
