//! Column comment annotations.
//!
//! A column comment may carry one cast-override annotation:
//!
//! | Annotation      | Argument                          | Effect                          |
//! |-----------------|-----------------------------------|---------------------------------|
//! | `@bigint`       | none                              | cast `bigint`, type `bigint`    |
//! | `@enum(a,b)`    | required, comma-separated members | cast `enum`, literal union      |
//! | `@set(a,b)`     | required, comma-separated members | cast `set`, array of union      |
//! | `@json`         | optional free-form type hint      | cast `json`, type hint/unknown  |
//!
//! Keywords are case-insensitive and must stand as whole words. A malformed
//! annotation is dropped with a warning; more than one distinct well-formed
//! annotation on one column is an [`AnnotationConflict`].

use crate::column_type::parse_literal_list;
use crate::language::{enum_type, set_type, UNKNOWN};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use typegen_core::{CastType, ClassificationWarning, SchemaError};

static ANNOTATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^\w@])@([a-z]+)\b").expect("annotation pattern is valid")
});

/// What a well-formed annotation overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastOverride {
    BigInt,
    Enum(Vec<String>),
    Set(Vec<String>),
    Json(Option<String>),
}

impl CastOverride {
    pub fn cast_type(&self) -> CastType {
        match self {
            Self::BigInt => CastType::BigInt,
            Self::Enum(_) => CastType::Enum,
            Self::Set(_) => CastType::Set,
            Self::Json(_) => CastType::Json,
        }
    }

    pub fn language_type(&self) -> String {
        match self {
            Self::BigInt => "bigint".to_string(),
            Self::Enum(members) => enum_type(members),
            Self::Set(members) => set_type(members),
            Self::Json(Some(hint)) => hint.clone(),
            Self::Json(None) => UNKNOWN.to_string(),
        }
    }

    pub fn members(&self) -> &[String] {
        match self {
            Self::Enum(members) | Self::Set(members) => members,
            Self::BigInt | Self::Json(_) => &[],
        }
    }
}

/// One entry of the ordered rule list.
struct AnnotationRule {
    keyword: &'static str,
    parse: fn(Option<&str>) -> Result<CastOverride, String>,
}

static RULES: [AnnotationRule; 4] = [
    AnnotationRule {
        keyword: "bigint",
        parse: parse_bigint,
    },
    AnnotationRule {
        keyword: "enum",
        parse: parse_enum,
    },
    AnnotationRule {
        keyword: "set",
        parse: parse_set,
    },
    AnnotationRule {
        keyword: "json",
        parse: parse_json,
    },
];

fn parse_bigint(argument: Option<&str>) -> Result<CastOverride, String> {
    match argument {
        None => Ok(CastOverride::BigInt),
        Some(_) => Err("@bigint takes no argument".to_string()),
    }
}

fn parse_members(argument: Option<&str>) -> Result<Vec<String>, String> {
    let argument = argument.ok_or_else(|| "missing member list".to_string())?;
    parse_literal_list(argument)
}

fn parse_enum(argument: Option<&str>) -> Result<CastOverride, String> {
    parse_members(argument).map(CastOverride::Enum)
}

fn parse_set(argument: Option<&str>) -> Result<CastOverride, String> {
    parse_members(argument).map(CastOverride::Set)
}

fn parse_json(argument: Option<&str>) -> Result<CastOverride, String> {
    match argument.map(str::trim) {
        None => Ok(CastOverride::Json(None)),
        Some("") => Err("empty type hint".to_string()),
        Some(hint) => Ok(CastOverride::Json(Some(hint.to_string()))),
    }
}

/// Two or more distinct annotations on one column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Conflicting annotations: {}", .annotations.join(", "))]
pub struct AnnotationConflict {
    /// Source text of each conflicting annotation
    pub annotations: Vec<String>,
}

impl AnnotationConflict {
    /// Attach the table and column the conflict was found on.
    pub fn into_schema_error(self, table: &str, column: &str) -> SchemaError {
        SchemaError::AmbiguousAnnotation {
            table: table.to_string(),
            column: column.to_string(),
            annotations: self.annotations,
        }
    }
}

/// Result of scanning one comment.
#[derive(Debug, Default)]
pub struct AnnotationScan {
    /// Well-formed annotations as `(source text, override)`, in comment order
    pub found: Vec<(String, CastOverride)>,
    pub warnings: Vec<ClassificationWarning>,
}

impl AnnotationScan {
    /// The single override that applies, if any.
    pub fn resolve(&self) -> Result<Option<CastOverride>, AnnotationConflict> {
        let mut distinct: Vec<&(String, CastOverride)> = Vec::new();
        for entry in &self.found {
            if !distinct.iter().any(|(_, o)| *o == entry.1) {
                distinct.push(entry);
            }
        }

        match distinct.as_slice() {
            [] => Ok(None),
            [(_, single)] => Ok(Some(single.clone())),
            many => Err(AnnotationConflict {
                annotations: many.iter().map(|(source, _)| source.clone()).collect(),
            }),
        }
    }
}

/// Scan a column comment for annotations.
pub fn scan(comment: &str) -> AnnotationScan {
    let mut result = AnnotationScan::default();
    let mut consumed = 0;

    for captures in ANNOTATION_PATTERN.captures_iter(comment) {
        let Some(keyword) = captures.get(1) else {
            continue;
        };
        // `@` inside an earlier annotation's argument is not an annotation
        if keyword.start() <= consumed {
            continue;
        }
        let Some(rule) = RULES
            .iter()
            .find(|rule| rule.keyword.eq_ignore_ascii_case(keyword.as_str()))
        else {
            continue;
        };

        // the `@` sits right before the keyword
        let start = keyword.start() - 1;
        let (argument, end) = match read_argument(comment, keyword.end()) {
            Ok(found) => found,
            Err(reason) => {
                result.warnings.push(ClassificationWarning::MalformedAnnotation {
                    annotation: comment[start..].trim_end().to_string(),
                    reason,
                });
                continue;
            }
        };
        consumed = end;
        let source = comment[start..end].to_string();

        match (rule.parse)(argument) {
            Ok(cast_override) => result.found.push((source, cast_override)),
            Err(reason) => result
                .warnings
                .push(ClassificationWarning::MalformedAnnotation {
                    annotation: source,
                    reason,
                }),
        }
    }

    result
}

/// Read a parenthesized argument starting at `from`.
///
/// Returns the argument text (without parentheses) and the byte offset just
/// past the annotation. Nested parentheses are balanced so type hints such as
/// `Array<(string | number)>` stay intact.
fn read_argument(comment: &str, from: usize) -> Result<(Option<&str>, usize), String> {
    let rest = &comment[from..];
    if !rest.starts_with('(') {
        return Ok((None, from));
    }

    let mut depth = 0usize;
    for (idx, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((Some(&rest[1..idx]), from + idx + 1));
                }
            }
            _ => {}
        }
    }
    Err("unterminated argument".to_string())
}
