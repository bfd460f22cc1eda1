use std::env;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the calculator service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from the process environment, honoring a local `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup so callers (and tests) can supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment =
            AppEnvironment::parse(&lookup("APP_ENV").unwrap_or_else(|| "development".to_string()));

        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => 3000,
        };

        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let log_format = match lookup("APP_LOG_FORMAT") {
            Some(raw) => LogFormat::parse(&raw)?,
            None => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                value: self.host.clone(),
                source,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Output layout for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::InvalidLogFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16 (found '{value}')")]
    InvalidPort { value: String },
    #[error("APP_HOST must parse to an IPv4 or IPv6 address (found '{value}')")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("APP_LOG_FORMAT must be 'compact' or 'pretty' (found '{value}')")]
    InvalidLogFormat { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let config = load_with(&[]).expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Compact);
    }

    #[test]
    fn accepts_localhost_host() {
        let config = load_with(&[("APP_HOST", "localhost"), ("APP_PORT", "8080")])
            .expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 8080));
    }

    #[test]
    fn recognizes_production_aliases() {
        let config = load_with(&[("APP_ENV", " PROD ")]).expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);

        let config = load_with(&[("APP_ENV", "ci")]).expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
    }

    #[test]
    fn rejects_invalid_port() {
        match load_with(&[("APP_PORT", "70000")]) {
            Err(ConfigError::InvalidPort { value }) => assert_eq!(value, "70000"),
            other => panic!("expected invalid port, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparseable_host() {
        let config = load_with(&[("APP_HOST", "not-an-ip")]).expect("config loads");
        assert!(matches!(
            config.server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }

    #[test]
    fn parses_pretty_log_format() {
        let config = load_with(&[("APP_LOG_FORMAT", "Pretty")]).expect("config loads");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(load_with(&[("APP_LOG_FORMAT", "json")]).is_err());
    }
}
