//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Default number of upcoming tasks on the dashboard.
const fn default_dashboard_limit() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// How many upcoming tasks the dashboard shows.
    #[serde(default = "default_dashboard_limit")]
    pub dashboard_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            dashboard_limit: default_dashboard_limit(),
        }
    }
}
