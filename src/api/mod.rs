// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{auth::require_auth, state::AppState};

pub mod health;
pub mod tokens;
pub mod whoami;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/whoami", get(whoami::whoami))
        .route_layer(from_fn_with_state(
            state.token_maker.clone(),
            require_auth,
        ))
        .with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(health::health, whoami::whoami),
    components(schemas(
        health::HealthResponse,
        tokens::AccessTokenResponse,
        whoami::WhoAmIResponse
    )),
    tags(
        (name = "Health", description = "Liveness checks"),
        (name = "Auth", description = "Access token introspection")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::AUTHORIZATION, Request, StatusCode},
    };
    use chrono::Duration;
    use tower::ServiceExt;

    use crate::token::TokenMaker;

    fn test_state() -> AppState {
        AppState::new(
            TokenMaker::new("12345678901234567890123456789012").unwrap(),
            Duration::minutes(15),
        )
    }

    async fn send(app: Router, uri: &str, auth: Option<String>) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(test_state());
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn health_needs_no_token() {
        let (status, body) = send(router(test_state()), "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn whoami_returns_token_subject() {
        let state = test_state();
        let issued = state.issue_access_token("alice").unwrap();

        let (status, body) = send(
            router(state),
            "/v1/whoami",
            Some(format!("Bearer {}", issued.token)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subject"], "alice");
        assert_eq!(body["token_id"], issued.claims.id.to_string());
    }

    #[tokio::test]
    async fn whoami_rejections_share_one_body() {
        let state = test_state();
        let expired = state
            .token_maker
            .create("alice", Duration::seconds(-1))
            .unwrap();

        let cases = [
            None,
            Some("Bearer".to_string()),
            Some("Basic abc".to_string()),
            Some("Bearer abc".to_string()),
            Some(format!("Bearer {expired}")),
        ];

        for auth in cases {
            let (status, body) = send(router(state.clone()), "/v1/whoami", auth).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(
                body,
                serde_json::json!({"error": "unauthenticated", "error_code": "unauthenticated"})
            );
        }
    }
}
