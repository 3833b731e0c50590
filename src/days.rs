// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DayCountError {
    #[error("Invalid number of days provided.")]
    NotANumber,
    #[error("The API can only forecast up to 14 days.")]
    AboveHorizon,
    #[error("Number of days should range from 1 to 14.")]
    BelowMinimum,
}

/// Number of upcoming days to summarize, always within `1..=14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayCount(u8);

impl DayCount {
    pub const MIN: u8 = 1;
    /// Longest horizon the upstream provider forecasts.
    pub const MAX: u8 = 14;

    pub fn new(days: u8) -> Result<Self, DayCountError> {
        if days > Self::MAX {
            return Err(DayCountError::AboveHorizon);
        }
        if days < Self::MIN {
            return Err(DayCountError::BelowMinimum);
        }
        Ok(Self(days))
    }

    /// Parses the raw `days` query value. A missing value means one day.
    pub fn parse(raw: Option<&str>) -> Result<Self, DayCountError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let days: i64 = raw.trim().parse().map_err(|_| DayCountError::NotANumber)?;
        // Clamped values stay on the side of the range they fell on.
        Self::new(days.clamp(0, i64::from(Self::MAX) + 1) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DayCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl FromStr for DayCount {
    type Err = DayCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
