// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Every variant maps to the same outward result (HTTP 401 / RPC
//! `Unauthenticated`) with the same message. The specific cause only ever
//! reaches the logs.

use std::error::Error as _;

use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::token::TokenError;

/// Message and code returned to callers for every rejection.
pub const UNAUTHENTICATED: &str = "unauthenticated";

/// Authentication error type.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `authorization` value present
    #[error("authorization header is not provided")]
    MissingHeader,

    /// Value present but not `<scheme> <credential>`
    #[error("invalid authorization header format")]
    MalformedHeader,

    /// Scheme other than `bearer`
    #[error("unsupported authorization scheme: {0}")]
    UnsupportedScheme(String),

    /// Token failed verification (invalid or expired)
    #[error("invalid access token")]
    InvalidCredentials(#[source] TokenError),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: &'static str,
    error_code: &'static str,
}

impl AuthError {
    /// Diagnostic code for this error. Logged, never sent to the caller.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "missing_auth_header",
            AuthError::MalformedHeader => "malformed_auth_header",
            AuthError::UnsupportedScheme(_) => "unsupported_auth_scheme",
            AuthError::InvalidCredentials(err) => err.error_code(),
        }
    }

    /// HTTP status for this error. Always 401.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    /// Record the real cause before it is collapsed into the generic result.
    fn log_rejection(&self, transport: &'static str) {
        tracing::debug!(
            transport,
            error_code = self.error_code(),
            error = %self,
            cause = self.source().map(tracing::field::display),
            "request authentication rejected"
        );
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log_rejection("http");

        let body = Json(AuthErrorBody {
            error: UNAUTHENTICATED,
            error_code: UNAUTHENTICATED,
        });
        let mut response = (self.status_code(), body).into_response();
        response
            .headers_mut()
            .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        response
    }
}

impl From<AuthError> for tonic::Status {
    fn from(err: AuthError) -> Self {
        err.log_rejection("rpc");
        tonic::Status::unauthenticated(UNAUTHENTICATED)
    }
}
