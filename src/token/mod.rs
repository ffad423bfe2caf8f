// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Access Tokens
//!
//! Stateless, self-contained access tokens sealed with ChaCha20-Poly1305.
//!
//! ## Token Format
//!
//! ```text
//! v1.local.<base64url(nonce || ciphertext || tag)>
//! ```
//!
//! - `v1.local.` is bound to the ciphertext as associated data
//! - `nonce` is 12 random bytes, fresh per token
//! - `ciphertext` is the sealed JSON [`Claims`]
//! - `tag` is the 16-byte Poly1305 tag
//!
//! ## Security
//!
//! - Nothing inside a token is readable without the symmetric key
//! - Expiry is only checked after the token authenticates
//! - No server-side record of issued tokens exists; a token lives until it
//!   expires

pub mod claims;
pub mod error;
pub mod maker;

pub use claims::Claims;
pub use error::TokenError;
pub use maker::{IssuedToken, TokenMaker, KEY_LEN};
