// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use bank_auth::{
    api::router,
    config::{Config, LogFormat},
    error::StartupError,
    logging,
    state::AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            logging::init(LogFormat::default());
            error!(error = %StartupError::from(err), "Bank auth server failed to start");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Bank auth server failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    let addr = config.bind_addr()?;

    // Key length is checked here, before the listener opens
    let state = AppState::from_config(&config)?;
    info!(
        access_token_secs = config.access_token_duration.num_seconds(),
        "Token maker initialized"
    );

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Bank auth server listening (docs at /docs)");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Bank auth server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
