//! Server configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

/// Worst-case growth of a string when encoded as JSON.
const JSON_ESCAPE_FACTOR: usize = 6;
/// Room for the surrounding `{"text": ...}` object.
const JSON_ENVELOPE_BYTES: usize = 4096;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the deck server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of the study front end, served for every unknown GET.
    pub static_dir: PathBuf,
    pub deck_id_length: usize,
    pub max_deck_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
            static_dir: PathBuf::from("public"),
            deck_id_length: 6,
            max_deck_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognised variables:
    /// - HOST: bind address (default 0.0.0.0)
    /// - PORT: listen port (default 10000)
    /// - STATIC_DIR: front end directory (default "public")
    /// - DECK_ID_LENGTH: characters per share id, 4 to 32 (default 6)
    /// - MAX_DECK_BYTES: largest accepted deck text (default 1 MiB)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT", defaults.port)?;
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let deck_id_length = parse_var(&lookup, "DECK_ID_LENGTH", defaults.deck_id_length)?;
        let max_deck_bytes = parse_var(&lookup, "MAX_DECK_BYTES", defaults.max_deck_bytes)?;

        if !(4..=32).contains(&deck_id_length) {
            return Err(ConfigError::Invalid {
                key: "DECK_ID_LENGTH",
                value: deck_id_length.to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            static_dir,
            deck_id_length,
            max_deck_bytes,
        })
    }

    /// Largest request body accepted. Sized so that a deck of
    /// `max_deck_bytes` still fits after JSON escaping (at most six bytes per
    /// input byte, for `\u00XX`), leaving the text length check in the
    /// handler as the real limit.
    pub fn body_limit(&self) -> usize {
        self.max_deck_bytes
            .saturating_mul(JSON_ESCAPE_FACTOR)
            .saturating_add(JSON_ENVELOPE_BYTES)
    }

    /// Socket address string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:10000");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STATIC_DIR", "web"),
            ("DECK_ID_LENGTH", "10"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("web"));
        assert_eq!(config.deck_id_length, 10);
    }

    #[test]
    fn body_limit_covers_escaped_deck() {
        let config = ServerConfig {
            max_deck_bytes: 8 * 1024 * 1024,
            ..ServerConfig::default()
        };
        assert!(config.body_limit() > 6 * config.max_deck_bytes);

        let huge = ServerConfig {
            max_deck_bytes: usize::MAX,
            ..ServerConfig::default()
        };
        assert_eq!(huge.body_limit(), usize::MAX);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "http".to_string(),
            }
        );
    }

    #[test]
    fn rejects_short_ids() {
        let result = ServerConfig::from_lookup(lookup_from(&[("DECK_ID_LENGTH", "2")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "DECK_ID_LENGTH",
                ..
            })
        ));
    }
}
