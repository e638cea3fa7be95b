//! Load [`ServerConfig`] from environment variables.

use crate::config::types::*;
use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::str::FromStr;

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or blank variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                message: "must be at least 1".into(),
            });
        }
        let schema = get("DATABASE_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_identifier(&schema) {
            return Err(ConfigError::Invalid {
                var: "DATABASE_SCHEMA",
                message: format!("'{}' is not a plain identifier", schema),
            });
        }
        let bind_addr = parse_var("BIND_ADDR", get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()))?;
        let cors_allowed_origin = get("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into());
        if HeaderValue::from_str(&cors_allowed_origin).is_err() {
            return Err(ConfigError::Invalid {
                var: "CORS_ALLOWED_ORIGIN",
                message: format!("'{}' is not a valid header value", cors_allowed_origin),
            });
        }
        let max_body_bytes = parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), DEFAULT_MAX_BODY_BYTES)?;
        let store = match get("TUTORIAL_STORE").as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "TUTORIAL_STORE",
                    message: format!("unknown store '{}' (expected postgres or memory)", other),
                })
            }
        };

        Ok(ServerConfig {
            database_url,
            max_connections,
            schema,
            bind_addr,
            cors_allowed_origin,
            max_body_bytes,
            store,
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map_or(Ok(default), |s| parse_var(var, s))
}

fn parse_var<T>(var: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        message: format!("'{}': {}", raw, e),
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
