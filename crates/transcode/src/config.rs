//! Transcoder configuration via `tagdex.toml`
//!
//! Covers the parts of the import that vary between deployments: the export
//! column names, the identifier and paths field names of the index schema,
//! and how a batch reacts to a failing row. The dynamic field suffixes are a
//! fixed contract and deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tagdex_core::FieldKind;
use thiserror::Error;

/// Config file name looked up by the CLI
pub const CONFIG_FILE_NAME: &str = "tagdex.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("Failed to access config file '{path}': {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Parsed values are inconsistent
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Export column names read by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Column holding the object id
    #[serde(default = "default_object_id_column")]
    pub object_id_column: String,
    /// Column holding the composite pair literal
    #[serde(default = "default_pairs_column")]
    pub pairs_column: String,
}

fn default_object_id_column() -> String {
    "object_id".to_string()
}

fn default_pairs_column() -> String {
    "path_value_pair".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            object_id_column: default_object_id_column(),
            pairs_column: default_pairs_column(),
        }
    }
}

/// Fixed field names of the index schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Identifier field, holding the unchanged object id
    #[serde(default = "default_id_field")]
    pub id_field: String,
    /// Multi-valued field listing every tag path present
    #[serde(default = "default_paths_field")]
    pub paths_field: String,
}

fn default_id_field() -> String {
    "fluiddb/id".to_string()
}

fn default_paths_field() -> String {
    "paths".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            id_field: default_id_field(),
            paths_field: default_paths_field(),
        }
    }
}

/// What a batch does when one row fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing row
    #[default]
    Abort,
    /// Log the failing row, keep going
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip" => Ok(ErrorPolicy::Skip),
            other => Err(ConfigError::Invalid(format!(
                "unknown error policy '{}'. Expected \"abort\" or \"skip\".",
                other
            ))),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Abort => f.write_str("abort"),
            ErrorPolicy::Skip => f.write_str("skip"),
        }
    }
}

/// Batch driver settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Failure policy
    #[serde(default)]
    pub on_error: ErrorPolicy,
    /// Transcode rows on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

/// Configuration loaded from `tagdex.toml`
///
/// # Example
///
/// ```toml
/// [output]
/// id_field = "fluiddb/id"
/// paths_field = "paths"
///
/// [batch]
/// on_error = "skip"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagdexConfig {
    /// Export column names
    #[serde(default)]
    pub input: InputConfig,
    /// Index schema field names
    #[serde(default)]
    pub output: OutputConfig,
    /// Batch behaviour
    #[serde(default)]
    pub batch: BatchConfig,
}

impl TagdexConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# tagdex transcoder configuration

# Export columns read from each input row.
[input]
object_id_column = "object_id"
pairs_column = "path_value_pair"

# Fixed fields of the search index schema. Dynamic tag fields always use
# the _tag_number/_tag_bool/_tag_null/_tag_raw_str/_tag_set_str suffixes.
[output]
id_field = "fluiddb/id"
paths_field = "paths"

# Failure policy: "abort" (default) stops at the first bad row,
# "skip" logs it and carries on.
[batch]
on_error = "abort"
parallel = false
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TagdexConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Check field names for consistency
    ///
    /// Names must be non-empty, the identifier and paths fields must differ,
    /// and neither may look like a dynamic tag field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("input.object_id_column", &self.input.object_id_column),
            ("input.pairs_column", &self.input.pairs_column),
            ("output.id_field", &self.output.id_field),
            ("output.paths_field", &self.output.paths_field),
        ];
        for (key, value) in names {
            if value.is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }

        if self.input.object_id_column == self.input.pairs_column {
            return Err(ConfigError::Invalid(
                "input.object_id_column and input.pairs_column must differ".to_string(),
            ));
        }
        if self.output.id_field == self.output.paths_field {
            return Err(ConfigError::Invalid(
                "output.id_field and output.paths_field must differ".to_string(),
            ));
        }
        for (key, value) in [
            ("output.id_field", &self.output.id_field),
            ("output.paths_field", &self.output.paths_field),
        ] {
            if let Some((_, kind)) = FieldKind::parse_field_name(value) {
                return Err(ConfigError::Invalid(format!(
                    "{} '{}' collides with the reserved {} suffix",
                    key, value, kind
                )));
            }
        }
        Ok(())
    }
}
