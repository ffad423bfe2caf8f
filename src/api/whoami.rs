// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Auth;

/// Identity carried by the caller's access token.
#[derive(Debug, Serialize, ToSchema)]
pub struct WhoAmIResponse {
    /// Authenticated subject
    pub subject: String,
    /// Identifier of the presented token
    pub token_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Return the identity of the authenticated caller.
#[utoipa::path(
    get,
    path = "/v1/whoami",
    tag = "Auth",
    responses(
        (status = 200, description = "Token is valid", body = WhoAmIResponse),
        (status = 401, description = "Missing, malformed, invalid or expired token")
    )
)]
pub async fn whoami(Auth(claims): Auth) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        subject: claims.subject,
        token_id: claims.id,
        issued_at: claims.issued_at,
        expires_at: claims.expires_at,
    })
}
