//! Classifier configuration.

use serde::{Deserialize, Serialize};

/// The only knobs that change classification output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Map `bigint` columns to `string` instead of `number`.
    ///
    /// With this off, values above 2^53 lose precision in the generated
    /// `number` type. That is a known limitation; annotate the column with
    /// `@bigint` or turn this on when it matters.
    pub treat_bigint_as_string: bool,

    /// Map `tinyint(1)` columns to `boolean` instead of `number`.
    pub treat_tinyint_one_as_boolean: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            treat_bigint_as_string: false,
            treat_tinyint_one_as_boolean: true,
        }
    }
}
