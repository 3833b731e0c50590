// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

use axum::Json;
use log::debug;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Version {
    pub version: &'static str,
}

pub async fn get_version() -> Json<Version> {
    debug!("Got a version request");
    Json(Version {
        version: env!("CARGO_PKG_VERSION"),
    })
}
