//! Outbound links and attribution.

use serde::{Deserialize, Serialize};

fn default_schedule_url() -> String {
    String::from(ready_core::DEFAULT_SCHEDULE_URL)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinksConfig {
    /// Strategy-session booking page.
    #[serde(default = "default_schedule_url")]
    pub schedule_url: String,

    /// Page URL recorded in payloads. Its query string becomes the `utm` map.
    #[serde(default)]
    pub page_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            schedule_url: default_schedule_url(),
            page_url: String::new(),
        }
    }
}
