use std::thread::available_parallelism;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            interval: 1800,
            default_num_want: 50,
            max_num_want: 200,
        }
    }
}

impl Default for HttpTrackersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: String::from("127.0.0.1:8080"),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            max_connections: 25000,
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
        }
    }
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dsn: String::new(),
            debug: false,
            sample_rate: 1.0,
            max_breadcrumbs: 100,
            attach_stacktrace: true,
            send_default_pii: false,
            traces_sample_rate: 1.0,
        }
    }
}
