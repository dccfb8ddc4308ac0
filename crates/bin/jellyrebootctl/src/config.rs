//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `jellyreboot.toml` in the working directory unless a path is
//! given on the command line. Every field has a default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::Path;

use jellyreboot_adapter_http_reqwest::TransportConfig;
use jellyreboot_domain::credentials::LoginForm;
use serde::Deserialize;

const DEFAULT_PATH: &str = "jellyreboot.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Management API location.
    pub server: TransportConfig,
    /// Login used for every command.
    pub credentials: CredentialsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// `watch` command settings.
    pub watch: WatchConfig,
}

/// Username and password sent as Basic auth.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl CredentialsConfig {
    /// The login form these credentials would fill in.
    #[must_use]
    pub fn login_form(&self) -> LoginForm {
        LoginForm::new(self.username.clone(), self.password.clone())
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Status polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Seconds between two status fetches.
    pub interval_secs: u64,
}

impl Config {
    /// Load configuration from `path` (or `jellyreboot.toml` when `None`),
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicitly given
    /// file is missing, or if validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, true)?,
            None => Self::from_file(Path::new(DEFAULT_PATH), false)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("JELLYREBOOT_URL") {
            self.server.base_url = val;
        }
        if let Some(val) = var("JELLYREBOOT_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.server.timeout_secs = Some(secs);
            }
        }
        if let Some(val) = var("JELLYREBOOT_USERNAME") {
            self.credentials.username = val;
        }
        if let Some(val) = var("JELLYREBOOT_PASSWORD") {
            self.credentials.password = val;
        }
        if let Some(val) = var("JELLYREBOOT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.server.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "server.base_url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.credentials.username.is_empty() {
            return Err(ConfigError::Validation(
                "credentials.username must be set (or JELLYREBOOT_USERNAME)".to_string(),
            ));
        }
        if self.watch.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "watch.interval_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "jellyrebootctl=info,jellyreboot=info,warn".to_string(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_secs: 10 }
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

    fn with_user() -> Config {
        let mut config = Config::default();
        config.credentials.username = "admin".to_string();
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://localhost:8000");
        assert!(config.server.timeout_secs.is_none());
        assert!(config.credentials.username.is_empty());
        assert_eq!(config.watch.interval_secs, 10);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            base_url = 'https://nas.local'
            timeout_secs = 15

            [credentials]
            username = 'admin'
            password = 'secret'

            [logging]
            filter = 'debug'

            [watch]
            interval_secs = 30
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.base_url, "https://nas.local");
        assert_eq!(config.server.timeout_secs, Some(15));
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(config.credentials.password, "secret");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.watch.interval_secs, 30);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [credentials]
            username = 'admin'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(config.server.base_url, "http://localhost:8000");
        assert_eq!(config.watch.interval_secs, 10);
    }

    #[test]
    fn should_return_default_when_default_file_missing() {
        let config = Config::from_file(Path::new("nonexistent.toml"), false).unwrap();
        assert_eq!(config.server.base_url, "http://localhost:8000");
    }

    #[test]
    fn should_fail_when_explicit_file_missing() {
        let result = Config::from_file(Path::new("nonexistent.toml"), true);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn should_apply_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("JELLYREBOOT_URL", "http://10.0.0.2:8000"),
            ("JELLYREBOOT_TIMEOUT", "7"),
            ("JELLYREBOOT_USERNAME", "ops"),
            ("JELLYREBOOT_PASSWORD", "pw"),
            ("JELLYREBOOT_LOG", "trace"),
        ]);
        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.server.base_url, "http://10.0.0.2:8000");
        assert_eq!(config.server.timeout_secs, Some(7));
        assert_eq!(config.credentials.username, "ops");
        assert_eq!(config.credentials.password, "pw");
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_prefer_rust_log_over_jellyreboot_log() {
        let env: HashMap<&str, &str> =
            HashMap::from([("JELLYREBOOT_LOG", "trace"), ("RUST_LOG", "warn")]);
        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(ToString::to_string));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_ignore_unparsable_timeout() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "JELLYREBOOT_TIMEOUT").then(|| "soon".to_string()));
        assert!(config.server.timeout_secs.is_none());
    }

    #[test]
    fn should_accept_valid_config() {
        assert!(with_user().validate().is_ok());
    }

    #[test]
    fn should_reject_non_http_url() {
        let mut config = with_user();
        config.server.base_url = "nas.local:8000".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_missing_username() {
        assert!(matches!(
            Config::default().validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_zero_watch_interval() {
        let mut config = with_user();
        config.watch.interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_not_leak_password_in_debug_output() {
        let mut config = with_user();
        config.credentials.password = "hunter2".to_string();
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
