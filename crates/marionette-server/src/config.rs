//! Server configuration loading from file and environment variables.

use marionette_voice::ConvaiConfig;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Conversational voice provider credentials.
    #[serde(default)]
    pub convai: ConvaiConfig,

    /// Browser client static files.
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Static client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Directory holding the built browser client (`index.html` and assets).
    #[serde(default = "default_client_dir")]
    pub dir: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "marionette_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3000
}

fn default_client_dir() -> String {
    "dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            dir: default_client_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults, then
/// applies process environment overrides.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = read_config_file(path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(ConfigError::FileRead(e)),
        },
        None => Ok(Config::default()),
    }
}

/// Applies environment overrides using `lookup` to read variables.
///
/// - `MARIONETTE_HOST` overrides `server.host`
/// - `PORT`, then `MARIONETTE_PORT`, override `server.port`
/// - `AGENT_ID` overrides `convai.agent_id`
/// - `XI_API_KEY` overrides `convai.api_key`
/// - `MARIONETTE_CONVAI_BASE_URL` overrides `convai.base_url`
/// - `MARIONETTE_CLIENT_DIR` overrides `client.dir`
/// - `MARIONETTE_LOG_LEVEL` overrides `logging.level`
/// - `MARIONETTE_LOG_JSON` overrides `logging.json` (set to "true" or "1" to enable)
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(host) = lookup("MARIONETTE_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    for key in ["PORT", "MARIONETTE_PORT"] {
        if let Some(port) = lookup(key) {
            if let Ok(parsed) = port.parse() {
                config.server.port = parsed;
            }
        }
    }
    if let Some(agent_id) = lookup("AGENT_ID") {
        config.convai.agent_id = agent_id;
    }
    if let Some(api_key) = lookup("XI_API_KEY") {
        config.convai.api_key = api_key;
    }
    if let Some(base_url) = lookup("MARIONETTE_CONVAI_BASE_URL") {
        config.convai.base_url = base_url;
    }
    if let Some(dir) = lookup("MARIONETTE_CLIENT_DIR") {
        config.client.dir = dir;
    }
    if let Some(level) = lookup("MARIONETTE_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = lookup("MARIONETTE_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_file() {
        let config = read_config_file(None).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.client.dir, "dist");
        assert_eq!(config.logging.level, "info");
        assert!(!config.convai.is_complete());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = read_config_file(Some("/nonexistent/marionette.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn parses_toml_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[convai]
agent_id = "agent-1"
api_key = "key-1"

[client]
dir = "/srv/marionette"

[logging]
level = "debug"
json = true
"#
        )
        .unwrap();

        let config = read_config_file(file.path().to_str()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.convai.agent_id, "agent-1");
        assert!(config.convai.is_complete());
        assert_eq!(config.client.dir, "/srv/marionette");
        assert!(config.logging.json);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        assert!(matches!(
            read_config_file(file.path().to_str()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            env(&[
                ("AGENT_ID", "agent-env"),
                ("XI_API_KEY", "key-env"),
                ("PORT", "4000"),
                ("MARIONETTE_LOG_JSON", "1"),
                ("MARIONETTE_CLIENT_DIR", "public"),
            ]),
        );
        assert_eq!(config.convai.agent_id, "agent-env");
        assert_eq!(config.convai.api_key, "key-env");
        assert_eq!(config.server.port, 4000);
        assert!(config.logging.json);
        assert_eq!(config.client.dir, "public");
    }

    #[test]
    fn marionette_port_wins_over_port() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            env(&[("PORT", "4000"), ("MARIONETTE_PORT", "5000")]),
        );
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn unparsable_overrides_are_ignored() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            env(&[("MARIONETTE_HOST", "not-an-ip"), ("PORT", "eighty")]),
        );
        assert_eq!(config.server.host, default_host());
        assert_eq!(config.server.port, 3000);
    }
}
