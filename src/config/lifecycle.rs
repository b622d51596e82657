use std::time::Duration;

use serde::Deserialize;

/// Timing policy for the registration and heartbeat lifecycle.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LifecycleConfig {
    /// Delay between failed registration attempts (unit: seconds).
    /// Fixed-interval, unbounded retries; there is deliberately no backoff
    /// growth, since the registry may be transiently unavailable for a long
    /// time and the cadence must stay predictable.
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,

    /// Heartbeat cadence used when the registry does not assign one
    /// (unit: seconds).
    #[serde(default = "default_heartbeat_secs")]
    pub default_heartbeat_secs: u64,
}

impl LifecycleConfig {
    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }

    pub fn default_heartbeat(&self) -> Duration {
        Duration::from_secs(self.default_heartbeat_secs)
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            retry_interval_secs: default_retry_interval_secs(),
            default_heartbeat_secs: default_heartbeat_secs(),
        }
    }
}

fn default_retry_interval_secs() -> u64 {
    10
}
fn default_heartbeat_secs() -> u64 {
    60
}
