//! The fixed configuration schema.
//!
//! Every struct here maps one-to-one onto a top-level key of the source
//! document. Missing keys decode to zero values; the loader has no
//! mandatory fields. Unknown keys in the source are ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration aggregating every section.
///
/// Field names double as the top-level keys of the YAML/JSON document
/// (`application`, `database`, `http`, `redis`, `oauth2`, `tokens`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Application identity and filesystem roots.
    pub application: AppConfig,

    /// Database connection and pool settings.
    pub database: DatabaseConfig,

    /// HTTP server settings.
    pub http: HttpConfig,

    /// Redis connection settings.
    pub redis: RedisConfig,

    /// OAuth2 client settings.
    pub oauth2: OAuthConfig,

    /// Token issuance settings.
    pub tokens: TokenConfig,
}

/// Application section (`application`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct AppConfig {
    /// Human-readable application name.
    pub name: String,

    /// Deployment environment, e.g. "development" or "production".
    pub environment: String,

    /// Port the application announces itself on.
    pub port: u16,

    /// Application version string.
    pub version: String,

    /// Root directory of the project checkout.
    pub project_root: String,

    /// Directory where generated artifacts are written.
    pub generation_root: String,
}

/// Database section (`database`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct DatabaseConfig {
    /// Database driver name, e.g. "postgres".
    pub driver: String,

    /// Connection user.
    pub user: String,

    /// Connection password.
    pub password: String,

    /// Database host.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Database name.
    pub name: String,

    /// Maximum number of pooled connections.
    pub max_connections: u32,

    /// Minimum number of pooled connections.
    pub min_connections: u32,

    /// Maximum lifetime of a pooled connection, e.g. "30m".
    #[serde(with = "duration_str")]
    pub max_connection_life_time: Duration,

    /// Maximum idle time before a pooled connection is closed, e.g. "5m".
    #[serde(with = "duration_str")]
    pub max_connection_idle_time: Duration,

    /// Interval between pool health checks, e.g. "1m".
    #[serde(with = "duration_str")]
    pub health_check_period: Duration,
}

/// HTTP section (`http`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct HttpConfig {
    /// Port the HTTP server listens on.
    pub port: u16,

    /// Comma-joined list of allowed CORS origins.
    pub allowed_origins: String,
}

/// Redis section (`redis`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RedisConfig {
    /// Redis address, host:port.
    pub address: String,

    /// Redis password.
    pub password: String,
}

/// OAuth2 section (`oauth2`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct OAuthConfig {
    /// OAuth2 client identifier.
    pub client_id: String,

    /// OAuth2 client secret.
    pub client_secret: String,

    /// Redirect URI registered with the provider.
    pub redirect_uri: String,

    /// Secret used to sign session cookies.
    pub session_secret: String,
}

/// Tokens section (`tokens`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct TokenConfig {
    /// Validity duration of issued tokens, e.g. "24h".
    #[serde(with = "duration_str")]
    pub duration: Duration,
}

/// Serde adapter for duration fields expressed as humantime strings.
///
/// Decodes "15s", "1h30m", "100ms" and friends into an exact
/// [`Duration`]; malformed strings are a decode error. Serializes back
/// through [`humantime::format_duration`] so defaults round-trip.
pub(crate) mod duration_str {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(de::Error::custom)
    }
}
