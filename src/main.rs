// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

mod args;
mod auth;
mod config;
mod days;
mod error;
mod server;
mod services;
mod sysconfig;
mod weather;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use args::{Args, Command};
use auth::Credentials;
use config::Config;
use server::{start_server, AppState};
use services::summarize_forecast;
use sysconfig::SYSCONFIG;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger with default level set to info
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = Config::from_args(&args);
    let client = config
        .forecast_client()
        .context("Failed to build forecast client")?;

    match args.command {
        Command::Start {
            listen,
            auth_user,
            auth_password,
        } => {
            println!("{}", SYSCONFIG.app_info());
            info!("Forecast provider: {}", config.api_url);

            let credentials = Credentials::new(auth_user, auth_password);
            info!("API access restricted to user '{}'", credentials.username());
            let state = AppState::new(Arc::new(client), credentials);
            start_server(listen, state).await?;
        }
        Command::Summarize { location, days } => {
            let summary = summarize_forecast(&client, &location, days)
                .await
                .with_context(|| format!("Failed to summarize forecast for {location}"))?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
