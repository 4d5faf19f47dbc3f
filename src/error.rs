//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading configuration.
///
/// A missing configuration file is deliberately not represented here:
/// the loader treats it as "no file layer" and proceeds with defaults
/// and environment values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config file {}", path.display())]
    FileRead {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The merged sources could not be decoded into the schema.
    ///
    /// Covers malformed file syntax, uncoercible scalar types and
    /// malformed duration strings; wraps the underlying cause.
    #[error("failed to decode configuration")]
    Decode(#[from] figment::Error),
}
