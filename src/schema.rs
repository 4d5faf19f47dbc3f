//! Explicit mapping from environment variable names to logical keys.
//!
//! Rather than inferring the mapping through reflection, every declared
//! field is enumerated here once: the flat environment form on the left,
//! the dotted key it feeds on the right. A test validates the table
//! against the serde schema so the two cannot drift apart.

/// Flat environment form paired with the dotted logical key it feeds.
///
/// The flat form is the dotted key with `.` replaced by `_`; environment
/// lookups add upper-casing and an optional `<PREFIX>_` on top.
pub(crate) const ENV_KEY_MAP: &[(&str, &str)] = &[
    ("application_name", "application.name"),
    ("application_environment", "application.environment"),
    ("application_port", "application.port"),
    ("application_version", "application.version"),
    ("application_project_root", "application.project_root"),
    ("application_generation_root", "application.generation_root"),
    ("database_driver", "database.driver"),
    ("database_user", "database.user"),
    ("database_password", "database.password"),
    ("database_host", "database.host"),
    ("database_port", "database.port"),
    ("database_name", "database.name"),
    ("database_max_connections", "database.max_connections"),
    ("database_min_connections", "database.min_connections"),
    (
        "database_max_connection_life_time",
        "database.max_connection_life_time",
    ),
    (
        "database_max_connection_idle_time",
        "database.max_connection_idle_time",
    ),
    ("database_health_check_period", "database.health_check_period"),
    ("http_port", "http.port"),
    ("http_allowed_origins", "http.allowed_origins"),
    ("redis_address", "redis.address"),
    ("redis_password", "redis.password"),
    ("oauth2_client_id", "oauth2.client_id"),
    ("oauth2_client_secret", "oauth2.client_secret"),
    ("oauth2_redirect_uri", "oauth2.redirect_uri"),
    ("oauth2_session_secret", "oauth2.session_secret"),
    ("tokens_duration", "tokens.duration"),
];

/// Looks up the dotted logical key for a flat environment name.
///
/// Case-insensitive; returns `None` for names outside the schema.
pub(crate) fn dotted_key(flat: &str) -> Option<&'static str> {
    ENV_KEY_MAP
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(flat))
        .map(|&(_, dotted)| dotted)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::Config;

    fn flatten(prefix: &str, value: &serde_yaml::Value, out: &mut BTreeSet<String>) {
        if let serde_yaml::Value::Mapping(map) = value {
            for (key, nested) in map {
                let key = key.as_str().expect("schema keys are strings");
                let path = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, nested, out);
            }
        } else {
            out.insert(prefix.to_string());
        }
    }

    #[test]
    fn test_env_key_map_covers_schema_exactly() {
        let value = serde_yaml::to_value(Config::default()).expect("serialize default config");
        let mut schema_keys = BTreeSet::new();
        flatten("", &value, &mut schema_keys);

        let mapped: BTreeSet<String> = ENV_KEY_MAP
            .iter()
            .map(|&(_, dotted)| dotted.to_string())
            .collect();

        assert_eq!(mapped, schema_keys);
        assert_eq!(mapped.len(), ENV_KEY_MAP.len(), "no duplicate entries");
    }

    #[test]
    fn test_flat_form_is_dotted_with_underscores() {
        for (flat, dotted) in ENV_KEY_MAP {
            assert_eq!(*flat, dotted.replace('.', "_"));
        }
    }

    #[test]
    fn test_dotted_key_lookup() {
        assert_eq!(
            dotted_key("DATABASE_MAX_CONNECTIONS"),
            Some("database.max_connections")
        );
        assert_eq!(
            dotted_key("database_max_connections"),
            Some("database.max_connections")
        );
        assert_eq!(dotted_key("not_a_key"), None);
    }
}
