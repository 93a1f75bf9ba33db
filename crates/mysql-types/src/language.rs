//! Base type to language type mapping.
//!
//! Language types are TypeScript type expressions. The cast type is chosen
//! alongside but never derived from the language type.

use crate::column_type::ParsedColumnType;
use typegen_core::{BaseSqlType, CastType, ClassifierConfig};

/// Fallback language type for unrecognized or opaque values.
pub const UNKNOWN: &str = "unknown";

/// Map a parsed column type to its `(language type, cast type)` pair.
pub fn map_base_type(parsed: &ParsedColumnType, config: &ClassifierConfig) -> (String, CastType) {
    let (language, cast) = match parsed.base {
        BaseSqlType::TinyInt
            if config.treat_tinyint_one_as_boolean && parsed.display_width == Some(1) =>
        {
            ("boolean", CastType::Boolean)
        }
        BaseSqlType::Bool => ("boolean", CastType::Boolean),

        BaseSqlType::TinyInt
        | BaseSqlType::SmallInt
        | BaseSqlType::MediumInt
        | BaseSqlType::Int
        | BaseSqlType::Year
        | BaseSqlType::Bit => ("number", CastType::Int),

        BaseSqlType::BigInt if config.treat_bigint_as_string => ("string", CastType::BigInt),
        // values above 2^53 lose precision here
        BaseSqlType::BigInt => ("number", CastType::BigInt),

        BaseSqlType::Float | BaseSqlType::Double => ("number", CastType::Float),

        // decimals keep their exact text form
        BaseSqlType::Decimal => ("string", CastType::String),

        BaseSqlType::Char
        | BaseSqlType::VarChar
        | BaseSqlType::TinyText
        | BaseSqlType::Text
        | BaseSqlType::MediumText
        | BaseSqlType::LongText
        | BaseSqlType::Time => ("string", CastType::String),

        BaseSqlType::Binary
        | BaseSqlType::VarBinary
        | BaseSqlType::TinyBlob
        | BaseSqlType::Blob
        | BaseSqlType::MediumBlob
        | BaseSqlType::LongBlob => ("Buffer", CastType::String),

        BaseSqlType::Date | BaseSqlType::DateTime | BaseSqlType::Timestamp => {
            ("Date", CastType::Date)
        }

        BaseSqlType::Json => (UNKNOWN, CastType::Json),

        BaseSqlType::Enum => return (enum_type(&parsed.members), CastType::Enum),
        BaseSqlType::Set => return (set_type(&parsed.members), CastType::Set),

        BaseSqlType::Unknown => (UNKNOWN, CastType::String),
    };
    (language.to_string(), cast)
}

/// Union of string literals, or `string` when there are no members.
pub fn enum_type(members: &[String]) -> String {
    if members.is_empty() {
        return "string".to_string();
    }
    members
        .iter()
        .map(|m| string_literal(m))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Array of the literal union, or `string[]` when there are no members.
pub fn set_type(members: &[String]) -> String {
    match members.len() {
        0 => "string[]".to_string(),
        1 => format!("{}[]", enum_type(members)),
        _ => format!("({})[]", enum_type(members)),
    }
}

/// Render a single-quoted string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
