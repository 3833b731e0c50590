// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use stats::StatsError;
use thiserror::Error;

use crate::auth::AuthError;
use crate::days::DayCountError;
use crate::weather::ForecastError;

/// Failure while turning a forecast into a summary.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),
    #[error("cannot summarize forecast for {location}: {source}")]
    Stats {
        location: String,
        #[source]
        source: StatsError,
    },
}

/// Errors returned by the HTTP handlers. Bodies are a bare JSON string.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Unauthorized(#[from] AuthError),
    #[error(transparent)]
    InvalidDays(#[from] DayCountError),
    #[error("{0}")]
    Rejected(String),
    #[error("Internal server error.")]
    Internal,
}

impl From<SummaryError> for ApiError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::Forecast(ForecastError::Rejected { message, .. }) => {
                ApiError::Rejected(message)
            }
            other => {
                error!("Forecast summary failed: {other}");
                ApiError::Internal
            }
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidDays(_) | ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(self.to_string());
        if status == StatusCode::UNAUTHORIZED {
            (
                status,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="forecast""#)],
                body,
            )
                .into_response()
        } else {
            (status, body).into_response()
        }
    }
}
