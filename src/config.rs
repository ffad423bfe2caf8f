// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `TOKEN_SYMMETRIC_KEY` | 32-byte key used to seal access tokens | Required |
//! | `ACCESS_TOKEN_DURATION_SECS` | Access token lifetime in seconds | `900` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;

use chrono::Duration;

/// Symmetric key for sealing access tokens. Must be exactly 32 bytes.
pub const TOKEN_SYMMETRIC_KEY_ENV: &str = "TOKEN_SYMMETRIC_KEY";

/// Access token lifetime in whole seconds.
pub const ACCESS_TOKEN_DURATION_ENV: &str = "ACCESS_TOKEN_DURATION_SECS";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default access token lifetime (15 minutes).
pub const DEFAULT_ACCESS_TOKEN_DURATION_SECS: i64 = 900;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value. Anything other than `json` is pretty.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub token_symmetric_key: String,
    pub access_token_duration: Duration,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token_symmetric_key = lookup(TOKEN_SYMMETRIC_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing(TOKEN_SYMMETRIC_KEY_ENV))?;

        let duration_secs = match lookup(ACCESS_TOKEN_DURATION_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| ConfigError::Invalid {
                    name: ACCESS_TOKEN_DURATION_ENV,
                    reason: e.to_string(),
                })?,
            None => DEFAULT_ACCESS_TOKEN_DURATION_SECS,
        };
        if duration_secs <= 0 {
            return Err(ConfigError::Invalid {
                name: ACCESS_TOKEN_DURATION_ENV,
                reason: "must be a positive number of seconds".to_string(),
            });
        }
        let access_token_duration =
            Duration::try_seconds(duration_secs).ok_or_else(|| ConfigError::Invalid {
                name: ACCESS_TOKEN_DURATION_ENV,
                reason: "out of range".to_string(),
            })?;

        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            token_symmetric_key,
            access_token_duration,
            host,
            port,
            log_format: LogFormat::parse(lookup(LOG_FORMAT_ENV).as_deref()),
        })
    }

    /// Socket address to bind the HTTP server to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: HOST_ENV,
                reason: e.to_string(),
            })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token_symmetric_key", &"<redacted>")
            .field("access_token_duration", &self.access_token_duration)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_format", &self.log_format)
            .finish()
    }
}
