// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transport-agnostic `authorization` carrier parsing.
//!
//! HTTP headers and RPC metadata both hand their raw `authorization` values
//! to [`authorize`], so every transport accepts and rejects exactly the same
//! inputs.

use super::AuthError;
use crate::token::{Claims, TokenMaker};

/// Carrier key, matched case-insensitively by every transport.
pub const AUTHORIZATION_KEY: &str = "authorization";

/// The only supported scheme (compared case-insensitively).
pub const BEARER_SCHEME: &str = "bearer";

/// Split a carrier value into scheme and credential and return the
/// credential if the scheme is `bearer`.
///
/// Fields are separated by any run of whitespace; anything after the second
/// field is ignored.
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let mut fields = value.split_whitespace();
    let (Some(scheme), Some(credential)) = (fields.next(), fields.next()) else {
        return Err(AuthError::MalformedHeader);
    };

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(AuthError::UnsupportedScheme(scheme.to_string()));
    }

    Ok(credential)
}

/// Authenticate a request from its `authorization` values.
///
/// Only the first value is considered.
pub fn authorize<'a, I>(values: I, maker: &TokenMaker) -> Result<Claims, AuthError>
where
    I: IntoIterator<Item = &'a str>,
{
    let value = values
        .into_iter()
        .next()
        .ok_or(AuthError::MissingHeader)?;

    let credential = parse_bearer(value)?;

    maker
        .verify(credential)
        .map_err(AuthError::InvalidCredentials)
}
