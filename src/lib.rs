// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bank Auth - Stateless Bearer-Token Authentication
//!
//! This crate issues opaque, tamper-evident, time-bounded access tokens and
//! verifies them on incoming HTTP and RPC requests. Tokens are sealed with
//! ChaCha20-Poly1305 under a single symmetric key; nothing about issued
//! tokens is stored server-side.
//!
//! ## Modules
//!
//! - `token` - Claims, token issuance and verification
//! - `auth` - `authorization` parsing, error mapping, axum and tonic adapters
//! - `api` - HTTP routes (Axum)
//! - `config` - Environment configuration
//! - `logging` - Tracing subscriber setup
//! - `rpc` - Request tracing for tonic servers

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod rpc;
pub mod state;
pub mod token;
