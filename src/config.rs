//! Configuration file loading and CLI override merging.
//!
//! ```toml
//! out_dir = "src/generated"
//! treat_bigint_as_string = true
//! treat_tinyint_one_as_boolean = false
//! ```
//!
//! Every key is optional. CLI flags win over file values, file values win
//! over defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use typegen_core::ClassifierConfig;

/// Output directory used when neither the file nor the CLI names one.
pub const DEFAULT_OUT_DIR: &str = "generated";

/// Contents of a TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub out_dir: Option<PathBuf>,
    pub treat_bigint_as_string: Option<bool>,
    pub treat_tinyint_one_as_boolean: Option<bool>,
}

impl FileConfig {
    /// Load a config file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file {path:?}"))
    }

    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }
}

/// Values given on the command line. `None` means not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub out_dir: Option<PathBuf>,
    pub treat_bigint_as_string: Option<bool>,
    pub treat_tinyint_one_as_boolean: Option<bool>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub classifier: ClassifierConfig,
    pub out_dir: PathBuf,
}

impl ResolvedConfig {
    pub fn resolve(file: Option<FileConfig>, overrides: &ConfigOverrides) -> Self {
        let file = file.unwrap_or_default();
        let defaults = ClassifierConfig::default();

        Self {
            classifier: ClassifierConfig {
                treat_bigint_as_string: overrides
                    .treat_bigint_as_string
                    .or(file.treat_bigint_as_string)
                    .unwrap_or(defaults.treat_bigint_as_string),
                treat_tinyint_one_as_boolean: overrides
                    .treat_tinyint_one_as_boolean
                    .or(file.treat_tinyint_one_as_boolean)
                    .unwrap_or(defaults.treat_tinyint_one_as_boolean),
            },
            out_dir: overrides
                .out_dir
                .clone()
                .or(file.out_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let resolved = ResolvedConfig::resolve(None, &ConfigOverrides::default());
        assert_eq!(resolved.classifier, ClassifierConfig::default());
        assert_eq!(resolved.out_dir, PathBuf::from("generated"));
    }

    #[test]
    fn test_file_values_apply() {
        let file = FileConfig::from_toml(
            "out_dir = \"src/db\"\ntreat_bigint_as_string = true\n",
        )
        .unwrap();
        let resolved = ResolvedConfig::resolve(Some(file), &ConfigOverrides::default());

        assert!(resolved.classifier.treat_bigint_as_string);
        assert!(resolved.classifier.treat_tinyint_one_as_boolean);
        assert_eq!(resolved.out_dir, PathBuf::from("src/db"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig::from_toml(
            "out_dir = \"src/db\"\ntreat_tinyint_one_as_boolean = true\n",
        )
        .unwrap();
        let overrides = ConfigOverrides {
            out_dir: Some(PathBuf::from("out")),
            treat_bigint_as_string: None,
            treat_tinyint_one_as_boolean: Some(false),
        };
        let resolved = ResolvedConfig::resolve(Some(file), &overrides);

        assert!(!resolved.classifier.treat_tinyint_one_as_boolean);
        assert_eq!(resolved.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml("treat_bigints = true").is_err());
    }
}
