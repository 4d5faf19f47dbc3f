//! Configuration loader with hierarchical merging.
//!
//! Precedence (lowest to highest):
//! 1. Zero-valued defaults (`Serialized`)
//! 2. The first `<config_name>.<ext>` found in the search paths
//! 3. Environment variables (optionally prefixed, highest priority)
//!
//! A missing file is not an error; the remaining layers still apply.
//! Each call builds its own [`Figment`], so repeated loads with
//! different options never share parser state.

use std::fs;
use std::path::PathBuf;

use figment::providers::{Env, Format, Json, Serialized, Yaml};
use figment::Figment;
use tracing::debug;

use crate::error::ConfigError;
use crate::model::Config;
use crate::schema;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// YAML document, `<config_name>.yaml`.
    Yaml,
    /// JSON document, `<config_name>.json`.
    Json,
}

impl FileFormat {
    /// File extension used when probing search paths.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Options controlling a single load.
///
/// No defaults are invented here; callers supply every value explicitly.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Base file name without extension, e.g. "config".
    pub config_name: String,

    /// Format (and extension) of the configuration file.
    pub format: FileFormat,

    /// Directories probed for the file, in order. The first directory
    /// containing the file wins; later ones are not consulted.
    pub search_paths: Vec<PathBuf>,

    /// Optional prefix for environment overrides: `Some("MYAPP")` reads
    /// `MYAPP_DATABASE_HOST`, `None` reads `DATABASE_HOST`.
    pub env_prefix: Option<String>,
}

/// Stateless loader: [`LoadOptions`] in, [`Config`] out.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and decode configuration using the given options.
    ///
    /// Environment variables are consulted automatically for every
    /// declared field; values found there override file values.
    pub fn load(opts: &LoadOptions) -> Result<Config, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = Self::find_file(opts) {
            let contents = fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "loaded configuration file");
            figment = match opts.format {
                FileFormat::Yaml => figment.merge(Yaml::string(&contents)),
                FileFormat::Json => figment.merge(Json::string(&contents)),
            };
        } else {
            debug!(
                config_name = %opts.config_name,
                "no configuration file found, using defaults and environment"
            );
        }

        let config = figment
            .merge(Self::env_provider(opts.env_prefix.as_deref()))
            .extract()?;
        Ok(config)
    }

    /// Resolve the candidate file: first search path containing
    /// `<config_name>.<ext>` wins.
    fn find_file(opts: &LoadOptions) -> Option<PathBuf> {
        let file_name = format!("{}.{}", opts.config_name, opts.format.extension());
        opts.search_paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
    }

    /// Environment provider mapping `[PREFIX_]SECTION_FIELD` variables
    /// onto dotted schema keys via the explicit table in [`schema`].
    ///
    /// Names outside the schema pass through lowercased and are ignored
    /// during decoding.
    fn env_provider(prefix: Option<&str>) -> Env {
        let env = match prefix {
            Some(prefix) => Env::prefixed(&format!("{prefix}_")),
            None => Env::raw(),
        };
        env.map(|key| match schema::dotted_key(key.as_str()) {
            Some(dotted) => dotted.into(),
            None => key.as_str().to_ascii_lowercase().into(),
        })
    }
}
