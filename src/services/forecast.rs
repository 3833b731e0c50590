// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

//! `GET /api/locations/{location}?days=N`
//!
//! Fetches the forecast for `location` and answers with the minimum, maximum,
//! average and median of the daily average temperatures:
//!
//! ```json
//! {"location": "London", "days": 3, "start_date": "2026-10-17",
//!  "end_date": "2026-10-19", "minimum": 10.2, "maximum": 12.9,
//!  "average": 11.5, "median": 11.4}
//! ```

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::days::DayCount;
use crate::error::{ApiError, SummaryError};
use crate::server::AppState;
use crate::weather::ForecastProvider;

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    // Kept as text so validation can report its own messages.
    days: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub location: String,
    pub days: usize,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub minimum: f64,
    pub maximum: f64,
    pub average: f64,
    pub median: f64,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Fetches `days` of forecast for `location` and summarizes it.
///
/// A forecast shorter than requested is still summarized.
pub async fn summarize_forecast(
    provider: &dyn ForecastProvider,
    location: &str,
    days: DayCount,
) -> Result<ForecastSummary, SummaryError> {
    let forecast = provider.fetch(location, days).await?;
    let series = forecast.series();
    if series.len() < usize::from(days.get()) {
        warn!(
            "Provider returned {} of {days} requested days for {}",
            series.len(),
            forecast.location
        );
    }

    let summary = stats::summarize(&series)
        .map_err(|source| SummaryError::Stats {
            location: forecast.location.clone(),
            source,
        })?
        .map(round_tenth);
    let range = forecast.date_range();

    Ok(ForecastSummary {
        days: series.len(),
        start_date: range.map(|(start, _)| start),
        end_date: range.map(|(_, end)| end),
        location: forecast.location,
        minimum: summary.minimum,
        maximum: summary.maximum,
        average: summary.average,
        median: summary.median,
    })
}

pub async fn get_forecast_summary(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(query): Query<ForecastQuery>,
    headers: HeaderMap,
) -> Result<Json<ForecastSummary>, ApiError> {
    state.credentials.verify(headers.get(header::AUTHORIZATION))?;
    let days = DayCount::parse(query.days.as_deref())?;
    info!("Forecast summary requested for {location} over {days} days");

    let summary = summarize_forecast(state.provider.as_ref(), &location, days).await?;
    Ok(Json(summary))
}
