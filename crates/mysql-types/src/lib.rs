//! MySQL column classification for mysql-typegen.
//!
//! This crate turns raw `SHOW FULL COLUMNS` metadata into
//! [`typegen_core::FieldDescriptor`]s.
//!
//! # Structure
//!
//! - `column_type`: Raw type string parsing (base type, width, modifiers, enum/set members)
//! - `annotation`: Comment annotation rules (`@bigint`, `@enum(...)`, `@set(...)`, `@json(...)`)
//! - `language`: Base type to language type and cast type mapping
//! - `naming`: Column name to field name conversion
//! - `classify`: The classifier combining the above
//!
//! # Example
//!
//! ```rust
//! use mysql_types::classify;
//! use typegen_core::{CastType, ClassifierConfig, Column};
//!
//! let column = Column::new("legacy_id", "int(11)").comment("legacy @bigint field");
//! let field = classify(&column, &ClassifierConfig::default()).unwrap();
//! assert_eq!(field.cast_type, CastType::BigInt);
//! ```

pub mod annotation;
pub mod classify;
pub mod column_type;
pub mod language;
pub mod naming;

pub use annotation::{AnnotationConflict, CastOverride};
pub use classify::classify;
pub use column_type::ParsedColumnType;
pub use naming::field_name;
