//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `PLAGCHECK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_DUCKDUCKGO_URL, DEFAULT_EMBEDDING_CACHE_CAPACITY,
    DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_SENTENCES,
    DEFAULT_MIN_CALL_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_USER_AGENT,
    DEFAULT_WIKIPEDIA_URL,
};
use crate::pipeline::DetectorConfig;
use crate::retrieval::RetrieverConfig;

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PLAGCHECK_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory with the MiniLM model files. `None` runs the stub embedder.
    pub model_path: Option<PathBuf>,

    /// Similarity a candidate must exceed. Default: `0.65`.
    pub match_threshold: f32,

    /// Sentences checked per document. Default: `12`.
    pub max_sentences: usize,

    /// Candidates scored per sentence. Default: `3`.
    pub max_candidates: usize,

    /// Sentence pipelines in flight. Default: `4`.
    pub concurrency: usize,

    /// Per-call timeout for external sources. Default: `8000`.
    pub request_timeout_ms: u64,

    /// Minimum spacing between outbound calls. Default: `250`.
    pub min_call_interval_ms: u64,

    /// Embedding cache entries; `0` disables the cache. Default: `1024`.
    pub embedding_cache_capacity: u64,

    pub wikipedia_url: String,
    pub duckduckgo_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            max_sentences: DEFAULT_MAX_SENTENCES,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            concurrency: DEFAULT_CONCURRENCY,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            min_call_interval_ms: DEFAULT_MIN_CALL_INTERVAL_MS,
            embedding_cache_capacity: DEFAULT_EMBEDDING_CACHE_CAPACITY,
            wikipedia_url: DEFAULT_WIKIPEDIA_URL.to_string(),
            duckduckgo_url: DEFAULT_DUCKDUCKGO_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "PLAGCHECK_PORT";
    const ENV_BIND_ADDR: &'static str = "PLAGCHECK_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "PLAGCHECK_MODEL_PATH";
    const ENV_MATCH_THRESHOLD: &'static str = "PLAGCHECK_MATCH_THRESHOLD";
    const ENV_MAX_SENTENCES: &'static str = "PLAGCHECK_MAX_SENTENCES";
    const ENV_MAX_CANDIDATES: &'static str = "PLAGCHECK_MAX_CANDIDATES";
    const ENV_CONCURRENCY: &'static str = "PLAGCHECK_CONCURRENCY";
    const ENV_REQUEST_TIMEOUT_MS: &'static str = "PLAGCHECK_REQUEST_TIMEOUT_MS";
    const ENV_MIN_CALL_INTERVAL_MS: &'static str = "PLAGCHECK_MIN_CALL_INTERVAL_MS";
    const ENV_EMBEDDING_CACHE_CAPACITY: &'static str = "PLAGCHECK_EMBEDDING_CACHE_CAPACITY";
    const ENV_WIKIPEDIA_URL: &'static str = "PLAGCHECK_WIKIPEDIA_URL";
    const ENV_DUCKDUCKGO_URL: &'static str = "PLAGCHECK_DUCKDUCKGO_URL";
    const ENV_USER_AGENT: &'static str = "PLAGCHECK_USER_AGENT";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            port: Self::parse_port_from_env(defaults.port)?,
            bind_addr: Self::parse_bind_addr_from_env(defaults.bind_addr)?,
            model_path: Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH),
            match_threshold: Self::parse_from_env(
                Self::ENV_MATCH_THRESHOLD,
                defaults.match_threshold,
            )?,
            max_sentences: Self::parse_from_env(Self::ENV_MAX_SENTENCES, defaults.max_sentences)?,
            max_candidates: Self::parse_from_env(
                Self::ENV_MAX_CANDIDATES,
                defaults.max_candidates,
            )?,
            concurrency: Self::parse_from_env(Self::ENV_CONCURRENCY, defaults.concurrency)?,
            request_timeout_ms: Self::parse_from_env(
                Self::ENV_REQUEST_TIMEOUT_MS,
                defaults.request_timeout_ms,
            )?,
            min_call_interval_ms: Self::parse_from_env(
                Self::ENV_MIN_CALL_INTERVAL_MS,
                defaults.min_call_interval_ms,
            )?,
            embedding_cache_capacity: Self::parse_from_env(
                Self::ENV_EMBEDDING_CACHE_CAPACITY,
                defaults.embedding_cache_capacity,
            )?,
            wikipedia_url: Self::parse_string_from_env(
                Self::ENV_WIKIPEDIA_URL,
                defaults.wikipedia_url,
            ),
            duckduckgo_url: Self::parse_string_from_env(
                Self::ENV_DUCKDUCKGO_URL,
                defaults.duckduckgo_url,
            ),
            user_agent: Self::parse_string_from_env(Self::ENV_USER_AGENT, defaults.user_agent),
        })
    }

    /// Validates paths and value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_MATCH_THRESHOLD,
                value: self.match_threshold.to_string(),
                expected: "a value between 0 and 1",
            });
        }

        for (name, value) in [
            (Self::ENV_MAX_SENTENCES, self.max_sentences),
            (Self::ENV_MAX_CANDIDATES, self.max_candidates),
            (Self::ENV_CONCURRENCY, self.concurrency),
        ] {
            if value == 0 {
                return Err(ConfigError::OutOfRange {
                    name,
                    value: value.to_string(),
                    expected: "a positive integer",
                });
            }
        }

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_REQUEST_TIMEOUT_MS,
                value: "0".to_string(),
                expected: "a positive number of milliseconds",
            });
        }

        for (name, url) in [
            (Self::ENV_WIKIPEDIA_URL, &self.wikipedia_url),
            (Self::ENV_DUCKDUCKGO_URL, &self.duckduckgo_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    name,
                    value: url.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig::default()
            .with_match_threshold(self.match_threshold)
            .with_max_sentences(self.max_sentences)
            .with_concurrency(self.concurrency)
    }

    pub fn retriever_config(&self) -> RetrieverConfig {
        RetrieverConfig::default()
            .with_max_candidates(self.max_candidates)
            .with_request_timeout(self.request_timeout())
            .with_min_call_interval(Duration::from_millis(self.min_call_interval_ms))
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    name: var_name,
                    value,
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    }
}
