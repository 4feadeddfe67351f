use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchBackend {
    #[default]
    Mock,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default)]
    pub backend: SearchBackend,
    /// Artificial latency of the mock backend.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
    /// Upper bound on a single search, whichever backend runs it.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    pub base_url: Option<String>,
    /// Fixed RNG seed for reproducible mock data.
    pub seed: Option<u64>,
    /// Identical concurrent searches share one backend call. When off, a
    /// duplicate is refused while the first is still running.
    #[serde(default = "default_coalesce")]
    pub coalesce: bool,
}

fn default_mock_delay_ms() -> u64 { 1000 }
fn default_timeout_ms() -> u64 { 10_000 }
fn default_coalesce() -> bool { true }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            backend: SearchBackend::default(),
            mock_delay_ms: default_mock_delay_ms(),
            timeout_ms: default_timeout_ms(),
            base_url: None,
            seed: None,
            coalesce: default_coalesce(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `FAREVIEW__SEARCH__BACKEND=http`
            .add_source(config::Environment::with_prefix("FAREVIEW").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_defaults() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.backend, SearchBackend::Mock);
        assert_eq!(config.search.mock_delay_ms, 1000);
        assert_eq!(config.search.timeout_ms, 10_000);
        assert!(config.search.coalesce);
        assert!(config.search.seed.is_none());
    }

    #[test]
    fn test_http_backend_section() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 3000

            [search]
            backend = "http"
            base_url = "http://fares.internal:9000"
            timeout_ms = 2500
            coalesce = false
            "#,
        )
        .unwrap();
        assert_eq!(config.search.backend, SearchBackend::Http);
        assert_eq!(config.search.base_url.as_deref(), Some("http://fares.internal:9000"));
        assert_eq!(config.search.timeout_ms, 2500);
        assert!(!config.search.coalesce);
    }

    #[test]
    fn test_missing_server_section_fails() {
        assert!(Config::from_toml("[search]\nbackend = \"mock\"\n").is_err());
    }
}
