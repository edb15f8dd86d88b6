use serde::{Deserialize, Serialize};
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<String>,
    pub tracker_config: TrackerConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig,
    pub http_server: Vec<HttpTrackersConfig>
}
