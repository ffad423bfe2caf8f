// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication middleware for Axum.
//!
//! Applies token authentication to a whole router subtree. On success the
//! verified [`Claims`] are stored in the request extensions, where the
//! [`Auth`](super::Auth) extractor picks them up without verifying twice.
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/whoami", get(whoami))
//!     .route_layer(axum::middleware::from_fn_with_state(
//!         token_maker.clone(),
//!         require_auth,
//!     ));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::extractor::authorize_headers;
use crate::token::TokenMaker;

/// Reject unauthenticated requests with 401, forward the rest.
pub async fn require_auth(
    State(maker): State<Arc<TokenMaker>>,
    mut request: Request,
    next: Next,
) -> Response {
    match authorize_headers(request.headers(), &maker) {
        Ok(claims) => {
            tracing::debug!(subject = %claims.subject, token_id = %claims.id, "request authenticated");
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::AUTHORIZATION, Request as HttpRequest, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Extension, Router,
    };
    use chrono::Duration;
    use tower::ServiceExt;

    use crate::token::Claims;

    fn test_app(maker: Arc<TokenMaker>) -> Router {
        Router::new()
            .route(
                "/protected",
                get(|Extension(claims): Extension<Claims>| async move { claims.subject }),
            )
            .route_layer(from_fn_with_state(maker, require_auth))
    }

    fn test_maker() -> Arc<TokenMaker> {
        Arc::new(TokenMaker::new("12345678901234567890123456789012").unwrap())
    }

    #[tokio::test]
    async fn forwards_authenticated_requests() {
        let maker = test_maker();
        let token = maker.create("alice", Duration::minutes(1)).unwrap();

        let response = test_app(maker)
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"alice");
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let response = test_app(test_maker())
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_token_from_other_key() {
        let other = TokenMaker::new("abcdefghijklmnopqrstuvwxyz012345").unwrap();
        let token = other.create("alice", Duration::minutes(1)).unwrap();

        let response = test_app(test_maker())
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
