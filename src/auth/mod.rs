// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token authentication for HTTP and RPC requests.
//!
//! ## Auth Flow
//!
//! 1. A login path calls [`TokenMaker::create`](crate::token::TokenMaker::create)
//!    for an authenticated subject
//! 2. The client sends `authorization: Bearer <token>`
//! 3. The transport adapter (axum middleware/extractor or tonic interceptor)
//!    hands the raw value to [`authorize`], which:
//!    - parses `<scheme> <credential>` and requires the `bearer` scheme
//!    - verifies the token
//!    - yields the verified [`Claims`](crate::token::Claims)
//!
//! ## Security
//!
//! - Every rejection looks the same to the caller (401 / `Unauthenticated`)
//! - The specific cause is logged at debug level only
//! - No clock skew tolerance: a token is rejected the instant it expires

pub mod error;
pub mod extractor;
pub mod header;
pub mod interceptor;
pub mod middleware;

pub use error::AuthError;
pub use extractor::Auth;
pub use header::{authorize, parse_bearer};
pub use interceptor::{AuthInterceptor, ClaimsExt};
pub use middleware::require_auth;
