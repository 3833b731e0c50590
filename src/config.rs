// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

//! Runtime configuration, resolved once from the command line at startup.

use std::time::Duration;

use crate::args::Args;
use crate::weather::{ForecastError, WeatherApiClient};

#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            api_url: args.api_url.clone(),
            api_key: args.api_key.clone(),
            timeout: args.timeout(),
        }
    }

    pub fn forecast_client(&self) -> Result<WeatherApiClient, ForecastError> {
        WeatherApiClient::new(&self.api_url, &self.api_key, self.timeout)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
