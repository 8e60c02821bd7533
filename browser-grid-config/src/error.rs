//! Typed error variants for the browser-grid-config crate.
//!
//! Callers that work with `anyhow` can still downcast to [`ConfigError`] to
//! match on a specific failure mode.

use thiserror::Error;

/// Errors that can occur when loading or saving configuration and grid state.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing a config or state file.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that could not be read or written.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file contained YAML that could not be parsed.
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A value could not be serialized back to YAML.
    #[error("YAML serialization failed: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn parse(path: &std::path::Path, source: serde_yaml_ng::Error) -> Self {
        ConfigError::Parse {
            path: path.display().to_string(),
            source,
        }
    }
}
