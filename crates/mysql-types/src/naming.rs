//! Column name to field name conversion.

use heck::ToLowerCamelCase;

/// Identifier-safe lower camel case of a column name.
///
/// E.g., "created_at" -> "createdAt", "2fa_secret" -> "_2faSecret"
pub fn field_name(column_name: &str) -> String {
    let name = column_name.to_lower_camel_case();
    match name.chars().next() {
        None => "_".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{name}"),
        Some(_) => name,
    }
}
