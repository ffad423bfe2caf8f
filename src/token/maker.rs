// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance and verification.

use base64ct::{Base64UrlUnpadded, Encoding};
use chrono::{DateTime, Duration, Utc};
use ring::{
    aead::{Aad, LessSafeKey, Nonce, UnboundKey, CHACHA20_POLY1305, NONCE_LEN},
    rand::{SecureRandom, SystemRandom},
};

use super::{Claims, TokenError};

/// Required symmetric key length in bytes (ChaCha20-Poly1305).
pub const KEY_LEN: usize = 32;

/// Version and purpose header, authenticated as associated data.
const TOKEN_HEADER: &str = "v1.local.";

/// Poly1305 tag length.
const TAG_LEN: usize = 16;

/// A freshly issued token together with the claims sealed inside it.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Creates and verifies access tokens under a single symmetric key.
///
/// The key is fixed at construction and only ever read afterwards, so one
/// instance can be shared (`Arc<TokenMaker>`) across any number of request
/// handlers without locking.
pub struct TokenMaker {
    key: LessSafeKey,
    rng: SystemRandom,
}

impl TokenMaker {
    /// Build a token maker from a symmetric key.
    ///
    /// Fails with [`TokenError::KeyConfiguration`] unless the key is exactly
    /// [`KEY_LEN`] bytes.
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self, TokenError> {
        let key = key.as_ref();
        let key_error = TokenError::KeyConfiguration {
            expected: KEY_LEN,
            actual: key.len(),
        };

        if key.len() != KEY_LEN {
            return Err(key_error);
        }

        let unbound = UnboundKey::new(&CHACHA20_POLY1305, key).map_err(|_| key_error)?;

        Ok(Self {
            key: LessSafeKey::new(unbound),
            rng: SystemRandom::new(),
        })
    }

    /// Issue a token for `subject`, valid for `duration` from now.
    pub fn create(&self, subject: &str, duration: Duration) -> Result<String, TokenError> {
        self.create_at(subject, duration, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn create_at(
        &self,
        subject: &str,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.issue_at(subject, duration, now).map(|issued| issued.token)
    }

    /// Issue a token and hand back the claims it carries.
    pub fn issue(&self, subject: &str, duration: Duration) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, duration, Utc::now())
    }

    fn issue_at(
        &self,
        subject: &str,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let claims = Claims::new(subject, duration, now)
            .ok_or(TokenError::Issue("token lifetime exceeds timestamp range"))?;
        let token = self.seal(&claims)?;
        Ok(IssuedToken { token, claims })
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// Authentication always runs first; [`TokenError::ExpiredToken`] is
    /// only ever returned for a token this key actually produced.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let claims = self.open(token)?;

        if claims.is_expired_at(now) {
            return Err(TokenError::ExpiredToken);
        }

        Ok(claims)
    }

    fn seal(&self, claims: &Claims) -> Result<String, TokenError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| TokenError::Issue("system randomness unavailable"))?;

        let mut in_out = serde_json::to_vec(claims)
            .map_err(|_| TokenError::Issue("claims serialization failed"))?;

        self.key
            .seal_in_place_append_tag(
                Nonce::assume_unique_for_key(nonce_bytes),
                Aad::from(TOKEN_HEADER.as_bytes()),
                &mut in_out,
            )
            .map_err(|_| TokenError::Issue("token sealing failed"))?;

        let mut raw = Vec::with_capacity(NONCE_LEN + in_out.len());
        raw.extend_from_slice(&nonce_bytes);
        raw.extend_from_slice(&in_out);

        Ok(format!("{TOKEN_HEADER}{}", Base64UrlUnpadded::encode_string(&raw)))
    }

    fn open(&self, token: &str) -> Result<Claims, TokenError> {
        let Some(body) = token.strip_prefix(TOKEN_HEADER) else {
            if let Some(version) = foreign_header(token) {
                tracing::debug!(version, "rejecting token with unsupported version header");
            }
            return Err(TokenError::InvalidToken);
        };

        let mut raw = Base64UrlUnpadded::decode_vec(body).map_err(|_| TokenError::InvalidToken)?;
        if raw.len() < NONCE_LEN + TAG_LEN {
            return Err(TokenError::InvalidToken);
        }

        let (nonce_bytes, sealed) = raw.split_at_mut(NONCE_LEN);
        let nonce =
            Nonce::try_assume_unique_for_key(nonce_bytes).map_err(|_| TokenError::InvalidToken)?;

        let plaintext = self
            .key
            .open_in_place(nonce, Aad::from(TOKEN_HEADER.as_bytes()), sealed)
            .map_err(|_| TokenError::InvalidToken)?;

        serde_json::from_slice(plaintext).map_err(|_| TokenError::InvalidToken)
    }
}

impl std::fmt::Debug for TokenMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenMaker")
            .field("algorithm", &"chacha20-poly1305")
            .field("header", &TOKEN_HEADER)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Returns the `<version>.<purpose>` prefix of a token that looks like one
/// of ours but carries a different header (e.g. `v2.local`).
fn foreign_header(token: &str) -> Option<&str> {
    let mut parts = token.splitn(3, '.');
    let version = parts.next()?;
    let purpose = parts.next()?;
    parts.next()?;

    let versioned = version.len() > 1
        && version.starts_with('v')
        && version[1..].bytes().all(|b| b.is_ascii_digit());
    let known_purpose = matches!(purpose, "local" | "public");

    if versioned && known_purpose {
        Some(&token[..version.len() + 1 + purpose.len()])
    } else {
        None
    }
}
