//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `realmeet.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::str::FromStr;

use serde::Deserialize;

use realmeet_domain::room::RoomLimits;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Room validation bounds.
    pub rooms: RoomsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown log format {other:?}, expected \"pretty\" or \"json\""
            ))),
        }
    }
}

/// Optional upper bounds for room creation. Unset means unbounded.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoomsConfig {
    /// Largest accepted seat capacity.
    pub max_seats: Option<u32>,
    /// Longest accepted room name, in characters.
    pub max_name_length: Option<usize>,
}

impl Config {
    /// Load configuration from `realmeet.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("realmeet.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("REALMEET_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("REALMEET_PORT") {
            self.server.port = parse_var("REALMEET_PORT", &val)?;
        }
        if let Some(val) = lookup("REALMEET_BIND") {
            let Some((host, port)) = val.rsplit_once(':') else {
                return Err(ConfigError::Validation(format!(
                    "REALMEET_BIND must be host:port, got {val:?}"
                )));
            };
            self.server.host = host.to_string();
            self.server.port = parse_var("REALMEET_BIND", port)?;
        }
        if let Some(val) = lookup("REALMEET_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = lookup("REALMEET_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("REALMEET_LOG_FORMAT") {
            self.logging.format = val.parse()?;
        }
        if let Some(val) = lookup("REALMEET_MAX_SEATS") {
            self.rooms.max_seats = Some(parse_var("REALMEET_MAX_SEATS", &val)?);
        }
        if let Some(val) = lookup("REALMEET_MAX_NAME_LENGTH") {
            self.rooms.max_name_length = Some(parse_var("REALMEET_MAX_NAME_LENGTH", &val)?);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.rooms.max_seats == Some(0) {
            return Err(ConfigError::Validation(
                "rooms.max_seats must be at least 1".to_string(),
            ));
        }
        if self.rooms.max_name_length == Some(0) {
            return Err(ConfigError::Validation(
                "rooms.max_name_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Return the limits the room service enforces on creation.
    #[must_use]
    pub fn room_limits(&self) -> RoomLimits {
        RoomLimits {
            max_seats: self.rooms.max_seats,
            max_name_length: self.rooms.max_name_length,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, val: &str) -> Result<T, ConfigError> {
    val.parse()
        .map_err(|_| ConfigError::Validation(format!("{key} has an invalid value: {val:?}")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:realmeet.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "realmeetd=info,realmeet=info,tower_http=debug".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite:realmeet.db?mode=rwc");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.room_limits(), RoomLimits::default());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'
            format = 'json'

            [rooms]
            max_seats = 20
            max_name_length = 20
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.room_limits(),
            RoomLimits {
                max_seats: Some(20),
                max_name_length: Some(20),
            }
        );
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:realmeet.db?mode=rwc");
        assert!(config.rooms.max_seats.is_none());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_unknown_log_format_in_toml() {
        let result: Result<Config, _> = toml::from_str("[logging]\nformat = 'xml'");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_overrides_over_file_values() {
        let mut config = Config::default();
        config
            .apply_overrides(overrides(&[
                ("REALMEET_BIND", "127.0.0.1:4000"),
                ("REALMEET_DATABASE_URL", "sqlite::memory:"),
                ("REALMEET_LOG_FORMAT", "json"),
                ("REALMEET_MAX_SEATS", "12"),
                ("REALMEET_MAX_NAME_LENGTH", "30"),
            ]))
            .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.rooms.max_seats, Some(12));
        assert_eq!(config.rooms.max_name_length, Some(30));
    }

    #[test]
    fn should_prefer_rust_log_over_realmeet_log() {
        let mut config = Config::default();
        config
            .apply_overrides(overrides(&[("REALMEET_LOG", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_unparsable_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(overrides(&[("REALMEET_PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_bind_without_port() {
        let mut config = Config::default();
        let result = config.apply_overrides(overrides(&[("REALMEET_BIND", "localhost")]));
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_room_limits() {
        let mut config = Config::default();
        config.rooms.max_seats = Some(0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.rooms.max_name_length = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
