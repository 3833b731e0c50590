// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

//! Client for the weatherapi.com forecast endpoint.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, error, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::days::DayCount;

pub const DEFAULT_FORECAST_API_URL: &str = "http://api.weatherapi.com/v1/forecast.json";

#[derive(Error, Debug)]
pub enum ForecastError {
    /// The provider refused the request (unknown location, bad key, quota).
    #[error("forecast request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("forecast provider failed with status {status}")]
    Upstream { status: StatusCode },
    #[error("failed to reach forecast provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected forecast payload: {0}")]
    Malformed(String),
}

#[derive(Deserialize, Debug)]
pub struct ForecastResponse {
    pub location: Location,
    pub forecast: ForecastBody,
}

#[derive(Deserialize, Debug)]
pub struct Location {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct ForecastBody {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Deserialize, Debug)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: DaySummary,
}

#[derive(Deserialize, Debug)]
pub struct DaySummary {
    pub avgtemp_c: f64,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub avg_temp_c: f64,
}

/// Forecast for one location, days in calendar order.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub location: String,
    pub days: Vec<DailyForecast>,
}

impl Forecast {
    /// Average daily temperatures in day order.
    pub fn series(&self) -> Vec<f64> {
        self.days.iter().map(|day| day.avg_temp_c).collect()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.days.first()?.date, self.days.last()?.date))
    }
}

impl From<ForecastResponse> for Forecast {
    fn from(response: ForecastResponse) -> Self {
        Self {
            location: response.location.name,
            days: response
                .forecast
                .forecastday
                .into_iter()
                .map(|day| DailyForecast {
                    date: day.date,
                    avg_temp_c: day.day.avgtemp_c,
                })
                .collect(),
        }
    }
}

#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch(&self, location: &str, days: DayCount) -> Result<Forecast, ForecastError>;
}

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ForecastError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiClient {
    async fn fetch(&self, location: &str, days: DayCount) -> Result<Forecast, ForecastError> {
        info!("Fetching {days} day forecast for {location}");

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", days.to_string().as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Forecast request for {location} failed: {e}");
                ForecastError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read forecast body for {location}: {e}");
            ForecastError::Transport(e)
        })?;
        debug!("Forecast provider answered {status} with {} bytes", body.len());

        if !status.is_success() {
            let err = classify_failure(status, &body);
            error!("Forecast provider refused {location}: {err}");
            return Err(err);
        }

        parse_forecast(&body).inspect_err(|e| error!("{e}"))
    }
}

/// Decodes a successful forecast body.
pub fn parse_forecast(body: &str) -> Result<Forecast, ForecastError> {
    serde_json::from_str::<ForecastResponse>(body)
        .map(Forecast::from)
        .map_err(|e| ForecastError::Malformed(e.to_string()))
}

/// Maps a non-success response to an error. The provider wraps business
/// errors (unknown location, invalid key, quota) in 4xx responses.
pub fn classify_failure(status: StatusCode, body: &str) -> ForecastError {
    if status.is_client_error() {
        ForecastError::Rejected {
            status,
            message: rejection_message(status, body),
        }
    } else {
        ForecastError::Upstream { status }
    }
}

fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|detail| detail.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Forecast request rejected")
                .to_string()
        })
}
