use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Seconds a client should wait before announcing again.
    pub interval: u64,
    /// Peers returned when the client does not send `numwant`.
    pub default_num_want: u64,
    /// Upper bound applied to every requested `numwant`.
    pub max_num_want: u64
}
