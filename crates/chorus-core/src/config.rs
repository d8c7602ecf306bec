use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_cdn_url")]
    pub cdn_url: String,
    /// Bot token sent as `Authorization: Bot <token>`. Usually supplied
    /// through `CHORUS_TOKEN` rather than the file.
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cdn_url: default_cdn_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Entries older than this are treated as missing. Unset means entries
    /// live until evicted or overwritten.
    pub time_to_live_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            time_to_live_secs: None,
        }
    }
}

impl CacheConfig {
    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    "https://discord.com/api/v6".into()
}
fn default_cdn_url() -> String {
    "https://cdn.discordapp.com".into()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_user_agent() -> String {
    concat!("Chorus (https://github.com/chorus-rs/chorus, ", env!("CARGO_PKG_VERSION"), ")").into()
}
fn default_max_capacity() -> u64 {
    10_000
}

impl ClientConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file not found at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `CHORUS_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("CHORUS_TOKEN") {
            self.api.token = Some(value);
        }
        if let Some(value) = lookup("CHORUS_API_BASE_URL") {
            self.api.base_url = value;
        }
        if let Some(value) = lookup("CHORUS_CDN_URL") {
            self.api.cdn_url = value;
        }
        if let Some(value) = lookup("CHORUS_API_TIMEOUT_SECS") {
            match value.parse::<u64>() {
                Ok(parsed) => self.api.timeout_secs = parsed,
                Err(_) => tracing::warn!(
                    "Ignoring invalid CHORUS_API_TIMEOUT_SECS value '{}'",
                    value
                ),
            }
        }
        if let Some(value) = lookup("CHORUS_CACHE_TTL_SECS") {
            match value.parse::<u64>() {
                Ok(parsed) => self.cache.time_to_live_secs = Some(parsed),
                Err(_) => tracing::warn!("Ignoring invalid CHORUS_CACHE_TTL_SECS value '{}'", value),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config.api.base_url, "https://discord.com/api/v6");
        assert_eq!(config.api.timeout(), Duration::from_secs(15));
        assert!(config.api.token.is_none());
        assert_eq!(config.cache.max_capacity, 10_000);
        assert!(config.cache.time_to_live().is_none());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            [api]
            base_url = "http://localhost:9000/api"

            [cache]
            time_to_live_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.api.cdn_url, "https://cdn.discordapp.com");
        assert_eq!(config.cache.time_to_live(), Some(Duration::from_secs(30)));
        assert_eq!(config.cache.max_capacity, 10_000);
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = ClientConfig::from_toml_str("[api]\ntimeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file_and_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chorus.toml");
        assert_eq!(
            ClientConfig::load(&path).unwrap().api.timeout_secs,
            default_timeout_secs()
        );

        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[api]\ntimeout_secs = 3").unwrap();
        assert_eq!(ClientConfig::load(&path).unwrap().api.timeout_secs, 3);
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CHORUS_TOKEN", "secret"),
            ("CHORUS_API_TIMEOUT_SECS", "not-a-number"),
            ("CHORUS_CACHE_TTL_SECS", "60"),
        ]);
        let mut config = ClientConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.api.token.as_deref(), Some("secret"));
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.cache.time_to_live_secs, Some(60));
    }
}
