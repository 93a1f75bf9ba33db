//! Closed type vocabularies shared by the classifier and the generator.
//!
//! [`BaseSqlType`] is the canonical keyword extracted from a raw MySQL type
//! string. [`CastType`] is the small runtime tag shipped in the schema
//! descriptor; it is independent of the compile-time language type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized MySQL base types, stripped of width, precision and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseSqlType {
    // Integer types
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,

    // Floating point
    Float,
    Double,

    // Exact numeric
    Decimal,

    Bit,
    Bool,

    // String types
    Char,
    VarChar,
    TinyText,
    Text,
    MediumText,
    LongText,

    // Binary types
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,

    // Date/time types
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,

    Json,
    Enum,
    Set,

    /// Anything not in the list above
    Unknown,
}

impl BaseSqlType {
    /// Map a lowercase type keyword (aliases included) to its base type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let base = match keyword {
            "tinyint" => Self::TinyInt,
            "smallint" => Self::SmallInt,
            "mediumint" => Self::MediumInt,
            "int" | "integer" => Self::Int,
            "bigint" => Self::BigInt,
            "float" => Self::Float,
            "double" | "real" => Self::Double,
            "decimal" | "numeric" | "dec" | "fixed" => Self::Decimal,
            "bit" => Self::Bit,
            "bool" | "boolean" => Self::Bool,
            "char" => Self::Char,
            "varchar" => Self::VarChar,
            "tinytext" => Self::TinyText,
            "text" => Self::Text,
            "mediumtext" => Self::MediumText,
            "longtext" => Self::LongText,
            "binary" => Self::Binary,
            "varbinary" => Self::VarBinary,
            "tinyblob" => Self::TinyBlob,
            "blob" => Self::Blob,
            "mediumblob" => Self::MediumBlob,
            "longblob" => Self::LongBlob,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "timestamp" => Self::Timestamp,
            "time" => Self::Time,
            "year" => Self::Year,
            "json" => Self::Json,
            "enum" => Self::Enum,
            "set" => Self::Set,
            _ => return None,
        };
        Some(base)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::MediumInt => "mediumint",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Bit => "bit",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::VarChar => "varchar",
            Self::TinyText => "tinytext",
            Self::Text => "text",
            Self::MediumText => "mediumtext",
            Self::LongText => "longtext",
            Self::Binary => "binary",
            Self::VarBinary => "varbinary",
            Self::TinyBlob => "tinyblob",
            Self::Blob => "blob",
            Self::MediumBlob => "mediumblob",
            Self::LongBlob => "longblob",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Year => "year",
            Self::Json => "json",
            Self::Enum => "enum",
            Self::Set => "set",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BaseSqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime (de)serialization tag for a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastType {
    String,
    BigInt,
    Int,
    Float,
    Json,
    Date,
    Boolean,
    Set,
    Enum,
}

impl CastType {
    /// Every cast type, in declaration order.
    pub const ALL: [CastType; 9] = [
        Self::String,
        Self::BigInt,
        Self::Int,
        Self::Float,
        Self::Json,
        Self::Date,
        Self::Boolean,
        Self::Set,
        Self::Enum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::BigInt => "bigint",
            Self::Int => "int",
            Self::Float => "float",
            Self::Json => "json",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Set => "set",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for CastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
