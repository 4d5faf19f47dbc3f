//! Configloader - Layered Application Configuration
//!
//! Loads a fixed, strongly-typed [`Config`] from an optional YAML or
//! JSON file merged with environment variable overrides, and offers two
//! ways to share the result across a program:
//!
//! - **Loader** (`loader`): stateless `Options -> Config` pipeline with
//!   hierarchical merging (defaults, then file, then environment)
//! - **Schema** (`model`, `schema`): the fixed section structs and the
//!   explicit environment-key mapping table
//! - **Global holder** (`global`): one-shot, thread-safe singleton with
//!   a fail-fast accessor
//! - **Scoped propagation** (`scope`): task-local attachment for passing
//!   configuration through call chains without the global
//!
//! A missing configuration file is not an error; every field falls back
//! to its zero value unless the file or the environment says otherwise.
//!
//! # Example
//!
//! ```no_run
//! use configloader::{ConfigLoader, FileFormat, LoadOptions};
//!
//! let opts = LoadOptions {
//!     config_name: "config".into(),
//!     format: FileFormat::Yaml,
//!     search_paths: vec![".".into(), "/etc/myapp".into()],
//!     env_prefix: Some("MYAPP".into()),
//! };
//! let config = ConfigLoader::load(&opts)?;
//! println!("http server on port {}", config.http.port);
//! # Ok::<(), configloader::ConfigError>(())
//! ```

pub mod error;
pub mod global;
pub mod loader;
pub mod model;
mod schema;
pub mod scope;

// Re-export commonly used types for convenience
pub use error::ConfigError;
pub use loader::{ConfigLoader, FileFormat, LoadOptions};
pub use model::{
    AppConfig, Config, DatabaseConfig, HttpConfig, OAuthConfig, RedisConfig, TokenConfig,
};
