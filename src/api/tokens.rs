// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::token::IssuedToken;

/// Body returned by login paths after an access token is issued.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenResponse {
    /// Opaque bearer token for the `Authorization` header
    pub access_token: String,
    /// Instant after which the token is rejected
    pub access_token_expires_at: DateTime<Utc>,
    /// Token lifetime in whole seconds, counted from issuance
    pub expires_in: i64,
    pub token_type: &'static str,
}

impl From<IssuedToken> for AccessTokenResponse {
    fn from(issued: IssuedToken) -> Self {
        let expires_in = issued
            .claims
            .remaining_at(issued.claims.issued_at)
            .num_seconds();

        Self {
            access_token: issued.token,
            access_token_expires_at: issued.claims.expires_at,
            expires_in,
            token_type: "Bearer",
        }
    }
}
