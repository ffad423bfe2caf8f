// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access token claims.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload sealed inside an access token.
///
/// Claims are built once per issued token and never mutated afterwards.
/// Downstream handlers may rely on `subject` being authenticated only when
/// the claims came out of [`TokenMaker::verify`](super::TokenMaker::verify).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Random per-token identifier (UUIDv4)
    pub id: Uuid,

    /// Identity the token asserts (e.g. a username)
    pub subject: String,

    /// Creation time
    pub issued_at: DateTime<Utc>,

    /// Instant after which the token is rejected
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// Build fresh claims for `subject`, valid for `duration` from `now`.
    ///
    /// A zero or negative `duration` is accepted and yields claims that are
    /// already expired. Returns `None` only when `now + duration` falls
    /// outside the representable timestamp range.
    pub fn new(subject: impl Into<String>, duration: Duration, now: DateTime<Utc>) -> Option<Self> {
        let expires_at = now.checked_add_signed(duration)?;
        Some(Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            issued_at: now,
            expires_at,
        })
    }

    /// Strict comparison: a token is still valid at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Time left before expiry, clamped at zero.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}
