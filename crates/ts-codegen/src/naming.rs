//! Model namer.
//!
//! Every generated identifier is a pure function of the table name. The
//! model name is the upper camel case of the table name with its last word
//! singularised; the shape type names append a fixed suffix to it and the
//! accessor name is its lower camel case. Applying the rules to an already
//! derived model name returns it unchanged.

use heck::ToUpperCamelCase;
use mysql_types::field_name;

pub const CREATE_DATA_SUFFIX: &str = "CreateData";
pub const UPDATE_DATA_SUFFIX: &str = "UpdateData";
pub const PRIMARY_KEY_SUFFIX: &str = "PrimaryKey";
pub const FIND_UNIQUE_PARAMS_SUFFIX: &str = "FindUniqueParams";
pub const OMITTED_BY_SELECT_ALL_SUFFIX: &str = "OmittedBySelectAll";

/// Global type names generated declarations refer to unqualified. A model
/// with one of these names would shadow it inside `models.ts`.
pub const RESERVED_TYPE_NAMES: [&str; 14] = [
    "Array", "BigInt", "Boolean", "Buffer", "Date", "Map", "Number", "Object", "Partial",
    "Promise", "Readonly", "Record", "Set", "String",
];

/// True when `name` would shadow a type in [`RESERVED_TYPE_NAMES`].
pub fn is_reserved_type_name(name: &str) -> bool {
    RESERVED_TYPE_NAMES.contains(&name)
}

/// All names derived from one table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNames {
    pub model: String,
    pub accessor: String,
    pub create_data: String,
    pub update_data: String,
    pub primary_key: String,
    pub find_unique_params: String,
    pub omitted_by_select_all: String,
}

impl ModelNames {
    pub fn from_table_name(table_name: &str) -> Self {
        Self::from_model_name(model_name(table_name))
    }

    /// Derive the shape and accessor names for an already computed model name.
    pub fn from_model_name(model: String) -> Self {
        Self {
            accessor: field_name(&model),
            create_data: format!("{model}{CREATE_DATA_SUFFIX}"),
            update_data: format!("{model}{UPDATE_DATA_SUFFIX}"),
            primary_key: format!("{model}{PRIMARY_KEY_SUFFIX}"),
            find_unique_params: format!("{model}{FIND_UNIQUE_PARAMS_SUFFIX}"),
            omitted_by_select_all: format!("{model}{OMITTED_BY_SELECT_ALL_SUFFIX}"),
            model,
        }
    }

    /// Every exported type name, model name first.
    pub fn type_names(&self) -> [&str; 6] {
        [
            &self.model,
            &self.omitted_by_select_all,
            &self.primary_key,
            &self.create_data,
            &self.update_data,
            &self.find_unique_params,
        ]
    }
}

/// Identifier-safe upper camel case of a table name, last word singularised.
///
/// E.g., "users" -> "User", "user_profiles" -> "UserProfile", "categories" -> "Category"
pub fn model_name(table_name: &str) -> String {
    let camel = table_name.to_upper_camel_case();
    let name = match camel.chars().next() {
        None => return "_".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{camel}"),
        Some(_) => camel,
    };

    let split = name
        .char_indices()
        .filter(|(_, c)| c.is_uppercase())
        .map(|(idx, _)| idx)
        .last()
        .unwrap_or(0);
    let (head, last_word) = name.split_at(split);
    format!("{head}{}", singularize(last_word))
}

/// Suffix-based singular form of one word. Idempotent: no output ends in a
/// suffix that another rule would strip.
fn singularize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let len = word.len();

    if len > 3 && lower.ends_with("ies") {
        return format!("{}y", &word[..len - 3]);
    }
    if lower.ends_with("sses") {
        return word[..len - 2].to_string();
    }
    if ["xes", "zes", "ches", "shes"]
        .iter()
        .any(|suffix| len > suffix.len() && lower.ends_with(suffix))
    {
        return word[..len - 2].to_string();
    }
    if len > 1 && lower.ends_with('s') && !matches!(lower.as_bytes()[len - 2], b's' | b'u' | b'i')
    {
        return word[..len - 1].to_string();
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names() {
        assert_eq!(model_name("users"), "User");
        assert_eq!(model_name("user"), "User");
        assert_eq!(model_name("user_profiles"), "UserProfile");
        assert_eq!(model_name("categories"), "Category");
        assert_eq!(model_name("addresses"), "Address");
        assert_eq!(model_name("boxes"), "Box");
        assert_eq!(model_name("matches"), "Match");
        assert_eq!(model_name("order_status"), "OrderStatus");
        assert_eq!(model_name("analysis"), "Analysis");
        assert_eq!(model_name("news_items"), "NewsItem");
    }

    #[test]
    fn test_acronyms_are_not_special_cased() {
        assert_eq!(model_name("http_logs"), "HttpLog");
        assert_eq!(model_name("HTTPLogs"), model_name(&model_name("HTTPLogs")));
    }

    #[test]
    fn test_casing_variants_collide() {
        assert_eq!(model_name("user_profile"), "UserProfile");
        assert_eq!(model_name("userProfile"), "UserProfile");
        assert_eq!(model_name("UserProfile"), "UserProfile");
    }

    #[test]
    fn test_model_name_is_idempotent() {
        for table in [
            "users",
            "categories",
            "addresses",
            "boxes",
            "buses",
            "status",
            "user_profiles",
            "2fa_codes",
            "s",
            "ies",
            "",
        ] {
            let once = model_name(table);
            assert_eq!(model_name(&once), once, "table '{table}'");
        }
    }

    #[test]
    fn test_leading_digit_and_empty_names() {
        assert!(model_name("2fa_codes").starts_with("_2"));
        assert_eq!(model_name("___"), "_");
    }

    #[test]
    fn test_reserved_type_names() {
        assert!(is_reserved_type_name(&model_name("dates")));
        assert!(is_reserved_type_name(&model_name("buffers")));
        assert!(!is_reserved_type_name(&model_name("date_ranges")));
        assert!(!is_reserved_type_name("date"));
    }

    #[test]
    fn test_derived_names() {
        let names = ModelNames::from_table_name("user_profiles");
        assert_eq!(names.model, "UserProfile");
        assert_eq!(names.accessor, "userProfile");
        assert_eq!(names.create_data, "UserProfileCreateData");
        assert_eq!(names.update_data, "UserProfileUpdateData");
        assert_eq!(names.primary_key, "UserProfilePrimaryKey");
        assert_eq!(names.find_unique_params, "UserProfileFindUniqueParams");
        assert_eq!(names.omitted_by_select_all, "UserProfileOmittedBySelectAll");
        assert_eq!(ModelNames::from_table_name(&names.model), names);
    }
}
