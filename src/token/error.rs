// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token errors.

/// Failure to build a [`TokenMaker`](super::TokenMaker), issue a token, or
/// verify one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The symmetric key does not have the length the cipher requires.
    /// Raised only at construction.
    #[error("invalid key size: must be exactly {expected} bytes, got {actual}")]
    KeyConfiguration { expected: usize, actual: usize },

    /// Malformed token, unknown version, or failed authentication.
    #[error("token is invalid")]
    InvalidToken,

    /// Authentic token whose `expires_at` is in the past.
    #[error("token has expired")]
    ExpiredToken,

    /// Token could not be issued (entropy source failure or a lifetime
    /// outside the timestamp range). Not recoverable.
    #[error("token issuance failed: {0}")]
    Issue(&'static str),
}

impl TokenError {
    /// Stable diagnostic code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::KeyConfiguration { .. } => "key_configuration",
            TokenError::InvalidToken => "invalid_token",
            TokenError::ExpiredToken => "expired_token",
            TokenError::Issue(_) => "token_issue_failed",
        }
    }
}
