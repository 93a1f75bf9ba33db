//! Declaration text rendering.
//!
//! Each file role has its own renderer. All of them are pure functions of
//! the [`SchemaDescriptor`]; only the header line carries the run time.

mod db;
mod models;
mod schema;

use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use typegen_core::SchemaDescriptor;

pub use db::render_db;
pub use models::render_models;
pub use schema::render_schema;

/// Logical role of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratedFileRole {
    /// Model shape declarations
    Models,
    /// Schema descriptor value and cast map
    Schema,
    /// Typed access surface
    Db,
}

impl GeneratedFileRole {
    pub const ALL: [GeneratedFileRole; 3] = [Self::Models, Self::Schema, Self::Db];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Models => "models.ts",
            Self::Schema => "schema.ts",
            Self::Db => "db.ts",
        }
    }

    /// Import specifier other generated files use for this one.
    pub fn module_path(&self) -> &'static str {
        match self {
            Self::Models => "./models",
            Self::Schema => "./schema",
            Self::Db => "./db",
        }
    }
}

impl fmt::Display for GeneratedFileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Rendered text for one file role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub role: GeneratedFileRole,
    pub contents: String,
}

impl GeneratedFile {
    pub fn file_name(&self) -> &'static str {
        self.role.file_name()
    }

    /// Contents without the header line.
    pub fn body(&self) -> &str {
        self.contents
            .split_once('\n')
            .map_or("", |(_, body)| body)
    }
}

/// The single header line every generated file starts with.
pub fn header(generated_at: DateTime<Utc>) -> String {
    format!(
        "// Generated by mysql-typegen at {}. Do not edit.\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Render all file roles, in [`GeneratedFileRole::ALL`] order.
pub fn generate(
    descriptor: &SchemaDescriptor,
    generated_at: DateTime<Utc>,
) -> Result<Vec<GeneratedFile>> {
    let header = header(generated_at);

    GeneratedFileRole::ALL
        .iter()
        .map(|&role| {
            let body = match role {
                GeneratedFileRole::Models => render_models(descriptor),
                GeneratedFileRole::Schema => render_schema(descriptor)?,
                GeneratedFileRole::Db => render_db(descriptor),
            };
            Ok(GeneratedFile {
                role,
                contents: format!("{header}{body}"),
            })
        })
        .collect()
}

/// Render `export interface` with one property per entry.
///
/// Entries are `(name, optional, type)`.
pub(crate) fn interface(out: &mut String, name: &str, properties: &[(&str, bool, String)]) {
    if properties.is_empty() {
        out.push_str(&format!("export interface {name} {{}}\n"));
        return;
    }
    out.push_str(&format!("export interface {name} {{\n"));
    for (property, optional, ty) in properties {
        let marker = if *optional { "?" } else { "" };
        out.push_str(&format!("  {property}{marker}: {ty};\n"));
    }
    out.push_str("}\n");
}
