//! Core types for mysql-typegen.
//!
//! This crate provides the foundational types used across the pipeline:
//!
//! - [`DatabaseSchema`] - Canonical, immutable schema snapshot (tables, columns, indexes)
//! - [`BaseSqlType`] / [`CastType`] - Closed type vocabularies
//! - [`FieldDescriptor`] / [`ModelDescriptor`] / [`SchemaDescriptor`] - Derived descriptors
//! - [`ClassifierConfig`] - The classification knobs
//!
//! # Architecture
//!
//! ```text
//! typegen-core (this crate)
//!    │
//!    ├─── mysql-schema-source  (fetches and normalizes into DatabaseSchema)
//!    ├─── mysql-types          (classifies Column into FieldDescriptor)
//!    └─── ts-codegen           (names models, renders SchemaDescriptor)
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod schema;
pub mod types;

pub use config::ClassifierConfig;
pub use descriptor::{
    cast_key, FieldDescriptor, FullTextIndexDescriptor, ModelDescriptor, SchemaDescriptor,
};
pub use error::{ClassificationWarning, SchemaError};
pub use schema::{Column, DatabaseSchema, Index, KeyRole, Table};
pub use types::{BaseSqlType, CastType};
