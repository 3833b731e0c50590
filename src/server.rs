// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

// HTTP server startup logic

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use log::info;
use tokio::net::TcpListener;

use crate::auth::Credentials;
use crate::services::{get_forecast_summary, get_version};
use crate::weather::ForecastProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ForecastProvider>, credentials: Credentials) -> Self {
        Self {
            provider,
            credentials: Arc::new(credentials),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/version", get(get_version))
        .route("/api/locations/{location}", get(get_forecast_summary))
        .route("/api/locations/{location}/", get(get_forecast_summary))
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
