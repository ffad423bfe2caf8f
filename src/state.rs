// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use axum::extract::FromRef;
use chrono::Duration;

use crate::config::Config;
use crate::token::{IssuedToken, TokenError, TokenMaker};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub token_maker: Arc<TokenMaker>,
    pub access_token_duration: Duration,
}

impl AppState {
    pub fn new(token_maker: TokenMaker, access_token_duration: Duration) -> Self {
        Self {
            token_maker: Arc::new(token_maker),
            access_token_duration,
        }
    }

    /// Build state from configuration. Fails on a key of the wrong length.
    pub fn from_config(config: &Config) -> Result<Self, TokenError> {
        let token_maker = TokenMaker::new(config.token_symmetric_key.as_bytes())?;
        Ok(Self::new(token_maker, config.access_token_duration))
    }

    /// Issue an access token with the configured lifetime.
    ///
    /// Login handlers call this once the subject's credentials check out.
    pub fn issue_access_token(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        self.token_maker.issue(subject, self.access_token_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogFormat, DEFAULT_HOST, DEFAULT_PORT};

    fn config_with_key(key: &str) -> Config {
        Config {
            token_symmetric_key: key.to_string(),
            access_token_duration: Duration::minutes(15),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn from_config_rejects_bad_key_eagerly() {
        let result = AppState::from_config(&config_with_key("short"));
        assert!(matches!(
            result,
            Err(TokenError::KeyConfiguration { expected: 32, actual: 5 })
        ));
    }

    #[test]
    fn issued_tokens_use_configured_lifetime() {
        let state = AppState::from_config(&config_with_key("12345678901234567890123456789012"))
            .unwrap();
        let issued = state.issue_access_token("alice").unwrap();

        assert_eq!(
            issued.claims.expires_at - issued.claims.issued_at,
            Duration::minutes(15)
        );
        let verified = state.token_maker.verify(&issued.token).unwrap();
        assert_eq!(verified, issued.claims);
    }
}
