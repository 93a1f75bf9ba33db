//! TypeScript generation for mysql-typegen.
//!
//! - `naming`: Model namer (model, shape and accessor names)
//! - `describe`: [`DatabaseSchema`](typegen_core::DatabaseSchema) to
//!   [`SchemaDescriptor`](typegen_core::SchemaDescriptor), with collision checks
//! - `render`: The three generated file roles
//!
//! ```rust
//! use chrono::Utc;
//! use ts_codegen::{describe_schema, generate, GeneratedFileRole};
//! use typegen_core::{ClassifierConfig, Column, DatabaseSchema, KeyRole, Table};
//!
//! let schema = DatabaseSchema::new(
//!     "shop",
//!     vec![Table::new("users", vec![Column::new("id", "int").key(KeyRole::Primary)])],
//! );
//! let descriptor = describe_schema(&schema, &ClassifierConfig::default()).unwrap();
//! let files = generate(&descriptor, Utc::now()).unwrap();
//! assert_eq!(files[0].role, GeneratedFileRole::Models);
//! assert!(files[0].contents.contains("export interface User {"));
//! ```

pub mod describe;
pub mod error;
pub mod naming;
pub mod render;

pub use describe::describe_schema;
pub use error::CodegenError;
pub use naming::ModelNames;
pub use render::{generate, GeneratedFile, GeneratedFileRole};
