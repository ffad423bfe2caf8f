// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Tonic interceptor for authenticated RPCs.
//!
//! ```rust,ignore
//! let service = BankServiceServer::with_interceptor(server, AuthInterceptor::new(maker));
//!
//! async fn get_account(&self, request: Request<GetAccountRequest>) -> Result<Response<_>, Status> {
//!     let claims = request.claims().ok_or_else(|| Status::unauthenticated("unauthenticated"))?;
//!     // claims.subject is the authenticated identity
//! }
//! ```

use std::sync::Arc;

use tonic::{metadata::MetadataMap, service::Interceptor, Request, Status};

use super::{
    header::{authorize, AUTHORIZATION_KEY},
    AuthError,
};
use crate::token::{Claims, TokenMaker};

/// Rejects RPCs without a valid bearer token with `Unauthenticated`.
///
/// Verified claims are stored in the request extensions; read them back with
/// [`ClaimsExt::claims`].
#[derive(Clone)]
pub struct AuthInterceptor {
    maker: Arc<TokenMaker>,
}

impl AuthInterceptor {
    pub fn new(maker: Arc<TokenMaker>) -> Self {
        Self { maker }
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let claims = authorize_metadata(request.metadata(), &self.maker)?;
        tracing::debug!(subject = %claims.subject, token_id = %claims.id, "rpc authenticated");
        request.extensions_mut().insert(claims);
        Ok(request)
    }
}

/// Run [`authorize`] over the first `authorization` metadata entry.
pub fn authorize_metadata(metadata: &MetadataMap, maker: &TokenMaker) -> Result<Claims, AuthError> {
    let value = match metadata.get(AUTHORIZATION_KEY) {
        Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
        None => None,
    };

    authorize(value, maker)
}

/// Access to claims stored by [`AuthInterceptor`].
pub trait ClaimsExt {
    fn claims(&self) -> Option<&Claims>;
}

impl<T> ClaimsExt for Request<T> {
    fn claims(&self) -> Option<&Claims> {
        self.extensions().get::<Claims>()
    }
}
