// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

//! Helpers shared by handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::prelude::*;
use chrono::{Days, NaiveDate};
use reqwest::StatusCode;

use crate::auth::Credentials;
use crate::days::DayCount;
use crate::server::AppState;
use crate::weather::{DailyForecast, Forecast, ForecastError, ForecastProvider};

pub const TEST_USER: &str = "tester";
pub const TEST_PASSWORD: &str = "123";

/// What the stub answers to every fetch.
#[derive(Debug, Clone)]
pub enum StubReply {
    Forecast(Forecast),
    Rejected(StatusCode, String),
    Upstream(StatusCode),
    Malformed,
}

/// Provider that replays a canned reply and records each request.
pub struct StubProvider {
    reply: StubReply,
    calls: Mutex<Vec<(String, u8)>>,
}

impl StubProvider {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, u8)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForecastProvider for StubProvider {
    async fn fetch(&self, location: &str, days: DayCount) -> Result<Forecast, ForecastError> {
        self.calls
            .lock()
            .unwrap()
            .push((location.to_string(), days.get()));
        match &self.reply {
            StubReply::Forecast(forecast) => Ok(forecast.clone()),
            StubReply::Rejected(status, message) => Err(ForecastError::Rejected {
                status: *status,
                message: message.clone(),
            }),
            StubReply::Upstream(status) => Err(ForecastError::Upstream { status: *status }),
            StubReply::Malformed => Err(ForecastError::Malformed("missing field".to_string())),
        }
    }
}

/// Forecast with one day per temperature, starting 2026-10-17.
pub fn forecast(location: &str, temperatures: &[f64]) -> Forecast {
    let first = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    Forecast {
        location: location.to_string(),
        days: temperatures
            .iter()
            .enumerate()
            .map(|(offset, temperature)| DailyForecast {
                date: first + Days::new(offset as u64),
                avg_temp_c: *temperature,
            })
            .collect(),
    }
}

pub fn stub_state(reply: StubReply) -> (AppState, Arc<StubProvider>) {
    let provider = Arc::new(StubProvider::new(reply));
    let state = AppState::new(
        provider.clone(),
        Credentials::new(TEST_USER, TEST_PASSWORD),
    );
    (state, provider)
}

/// Header value a client sends for `username:password`.
pub fn basic_header(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{username}:{password}"))
    )
}

pub fn auth_header() -> String {
    basic_header(TEST_USER, TEST_PASSWORD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_records_requests() {
        let stub = StubProvider::new(StubReply::Forecast(forecast("Rome", &[20.0, 21.0])));
        let result = stub.fetch("rome", DayCount::new(2).unwrap()).await.unwrap();
        assert_eq!(result.series(), vec![20.0, 21.0]);
        assert_eq!(
            result.date_range(),
            Some((
                NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
                NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
            ))
        );
        assert_eq!(stub.calls(), vec![("rome".to_string(), 2)]);
    }
}
