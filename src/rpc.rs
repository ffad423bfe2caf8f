// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request tracing for tonic servers.
//!
//! The HTTP router gets [`TraceLayer::new_for_http`] in [`crate::api::router`].
//! RPC servers use [`trace_layer`], which records the method path, the
//! `grpc-status` outcome and the latency of every call:
//!
//! ```rust,ignore
//! Server::builder()
//!     .layer(bank_auth::rpc::trace_layer())
//!     .add_service(BankServiceServer::with_interceptor(server, AuthInterceptor::new(maker)))
//!     .serve(addr)
//!     .await?;
//! ```

use tower_http::{
    trace::{DefaultMakeSpan, DefaultOnResponse, GrpcMakeClassifier, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

/// Trace layer classifying responses by `grpc-status`.
pub fn trace_layer() -> TraceLayer<GrpcMakeClassifier> {
    TraceLayer::new_for_grpc()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
