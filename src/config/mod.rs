//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so `Config::from_env` works out of the box on a laptop. Values that need
//! parsing (addresses, URLs, numbers, flags) are validated up front and fail
//! with a `ConfigError` instead of surfacing later at request time.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::extractor::{Continuation, DEFAULT_MAX_VERSE, ExtractOptions, VerseOffset};

/// Environment variable names. Public so tests and tooling can refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_UPSTREAM_BASE_URL: &str = "UPSTREAM_BASE_URL";
pub const ENV_DEFAULT_VERSION: &str = "DEFAULT_VERSION";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_PRESERVE_VERSE_OFFSET: &str = "PRESERVE_VERSE_OFFSET";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://www.biblegateway.com/passage/";
pub const DEFAULT_VERSION: &str = "NKJV";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: ENV_LOG_FORMAT,
                reason: format!("expected 'pretty' or 'json', got '{other}'"),
            }),
        }
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: SocketAddr,
    upstream_base_url: Url,
    default_version: String,
    fetch_timeout: Option<Duration>,
    preserve_verse_offset: bool,
    log_format: LogFormat,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = var_or(ENV_BIND_ADDR, DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                field: ENV_BIND_ADDR,
                reason: e.to_string(),
            })?;

        let upstream_base_url = Url::parse(&var_or(
            ENV_UPSTREAM_BASE_URL,
            DEFAULT_UPSTREAM_BASE_URL,
        ))
        .map_err(|e| ConfigError::InvalidValue {
            field: ENV_UPSTREAM_BASE_URL,
            reason: e.to_string(),
        })?;

        let default_version = var_or(ENV_DEFAULT_VERSION, DEFAULT_VERSION);
        if default_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: ENV_DEFAULT_VERSION,
                reason: "must not be empty".to_string(),
            });
        }

        let timeout_secs = match env::var(ENV_FETCH_TIMEOUT_SECS) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: ENV_FETCH_TIMEOUT_SECS,
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_FETCH_TIMEOUT_SECS,
        };
        // 0 disables the deadline entirely.
        let fetch_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let preserve_verse_offset = match env::var(ENV_PRESERVE_VERSE_OFFSET) {
            Ok(raw) => parse_flag(ENV_PRESERVE_VERSE_OFFSET, &raw)?,
            Err(_) => true,
        };

        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => LogFormat::parse(&raw)?,
            Err(_) => LogFormat::Pretty,
        };

        Ok(Self {
            bind_addr,
            upstream_base_url,
            default_version,
            fetch_timeout,
            preserve_verse_offset,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
    /// Base URL of the upstream passage page; the query string is appended.
    pub fn upstream_base_url(&self) -> &Url {
        &self.upstream_base_url
    }
    /// Translation code used when a request carries no `version`.
    pub fn default_version(&self) -> &str {
        &self.default_version
    }
    /// Deadline for one upstream fetch. `None` means unbounded.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout
    }
    pub fn preserve_verse_offset(&self) -> bool {
        self.preserve_verse_offset
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Extraction options derived from this configuration.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            max_verse: DEFAULT_MAX_VERSE,
            verse_offset: if self.preserve_verse_offset {
                VerseOffset::Legacy
            } else {
                VerseOffset::None
            },
            continuation: Continuation::Replace,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(field: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
