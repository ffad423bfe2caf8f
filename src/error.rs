// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Startup errors.
//!
//! Anything in here stops the process before it serves a request.
//! Per-request failures live in [`crate::auth::AuthError`].

use crate::config::ConfigError;
use crate::token::TokenError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot create token maker: {0}")]
    TokenMaker(#[from] TokenError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_errors_are_reported_with_context() {
        let err: StartupError = TokenError::KeyConfiguration {
            expected: 32,
            actual: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "cannot create token maker: invalid key size: must be exactly 32 bytes, got 3"
        );
    }

    #[test]
    fn config_errors_convert() {
        let err: StartupError = ConfigError::Missing("TOKEN_SYMMETRIC_KEY").into();
        assert!(matches!(err, StartupError::Config(_)));
        assert_eq!(
            err.to_string(),
            "configuration error: TOKEN_SYMMETRIC_KEY is not set"
        );
    }
}
