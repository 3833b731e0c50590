// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::days::DayCount;
use crate::weather::DEFAULT_FORECAST_API_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Forecast endpoint of the weather provider
    #[arg(long, env = "FORECAST_API_URL", default_value = DEFAULT_FORECAST_API_URL)]
    pub api_url: String,

    /// API key for the weather provider
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Timeout for a single provider request, in seconds
    #[arg(long, env = "API_TIMEOUT_IN_SECONDS", default_value_t = 10)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the forecast API over HTTP
    Start {
        #[arg(long, default_value = "0.0.0.0:8000")]
        listen: SocketAddr,

        /// User allowed to call the API
        #[arg(long, env = "FORECAST_AUTH_USER")]
        auth_user: String,

        #[arg(long, env = "FORECAST_AUTH_PASSWORD", hide_env_values = true)]
        auth_password: String,
    },
    /// Print the summary for one location and exit
    Summarize {
        location: String,

        /// Number of upcoming days (1-14)
        #[arg(short, long, default_value_t = DayCount::default())]
        days: DayCount,
    },
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
