// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

use crate::days::DayCount;

pub const SYSCONFIG: SysConfig = SysConfig {
    app_name: env!("CARGO_PKG_NAME"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    version: env!("CARGO_PKG_VERSION"),
    license: env!("CARGO_PKG_LICENSE"),
};

#[derive(Debug, Clone)]
pub struct SysConfig {
    pub app_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub license: &'static str,
}

impl SysConfig {
    /// Startup banner printed by `start`.
    pub fn app_info(&self) -> String {
        format!(
            "{} v{}: {}\n\
            Routes: GET /api/locations/{{location}}?days={}..={}, GET /api/version\n\
            License: {}",
            self.app_name,
            self.version,
            self.description,
            DayCount::MIN,
            DayCount::MAX,
            self.license
        )
    }
}
