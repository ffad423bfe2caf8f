// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated requests.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(claims): Auth) -> impl IntoResponse {
//!     // claims.subject is the authenticated identity
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use super::{header::authorize, AuthError};
use crate::token::{Claims, TokenMaker};

/// Extractor for verified token claims.
///
/// Reuses claims already placed in the request extensions by
/// [`require_auth`](super::middleware::require_auth); otherwise verifies the
/// `Authorization` header itself.
pub struct Auth(pub Claims);

impl<S> FromRequestParts<S> for Auth
where
    Arc<TokenMaker>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>().cloned() {
            return Ok(Auth(claims));
        }

        let maker = Arc::<TokenMaker>::from_ref(state);
        authorize_headers(&parts.headers, &maker).map(Auth)
    }
}

/// Run [`authorize`] over the first `Authorization` header.
///
/// Header bytes that are not visible ASCII count as a malformed header.
pub fn authorize_headers(headers: &HeaderMap, maker: &TokenMaker) -> Result<Claims, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
        None => None,
    };

    authorize(value, maker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};
    use chrono::Duration;

    use crate::token::TokenError;

    fn test_maker() -> Arc<TokenMaker> {
        Arc::new(TokenMaker::new("12345678901234567890123456789012").unwrap())
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/test");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn auth_extractor_requires_auth_header() {
        let maker = test_maker();
        let mut parts = parts_with_auth(None);

        let result = Auth::from_request_parts(&mut parts, &maker).await;
        assert!(matches!(result, Err(AuthError::MissingHeader)));
    }

    #[tokio::test]
    async fn auth_extractor_succeeds_with_token() {
        let maker = test_maker();
        let token = maker.create("user_123", Duration::minutes(1)).unwrap();
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let result = Auth::from_request_parts(&mut parts, &maker).await;
        assert_eq!(result.unwrap().0.subject, "user_123");
    }

    #[tokio::test]
    async fn auth_extractor_rejects_basic_scheme() {
        let maker = test_maker();
        let mut parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));

        let result = Auth::from_request_parts(&mut parts, &maker).await;
        assert!(matches!(result, Err(AuthError::UnsupportedScheme(_))));
    }

    #[tokio::test]
    async fn auth_extractor_rejects_expired_token() {
        let maker = test_maker();
        let token = maker.create("user_123", Duration::seconds(-1)).unwrap();
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let result = Auth::from_request_parts(&mut parts, &maker).await;
        assert!(matches!(
            result,
            Err(AuthError::InvalidCredentials(TokenError::ExpiredToken))
        ));
    }

    #[tokio::test]
    async fn auth_extractor_prefers_extensions() {
        let maker = test_maker();
        let mut parts = parts_with_auth(None);

        let claims = Claims::new("user_from_middleware", Duration::minutes(1), chrono::Utc::now())
            .unwrap();
        parts.extensions.insert(claims);

        let result = Auth::from_request_parts(&mut parts, &maker).await;
        assert_eq!(result.unwrap().0.subject, "user_from_middleware");
    }

    #[test]
    fn non_ascii_header_is_malformed() {
        let maker = test_maker();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );

        let result = authorize_headers(&headers, &maker);
        assert!(matches!(result, Err(AuthError::MalformedHeader)));
    }
}
