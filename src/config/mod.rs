//! Configuration for the registration lifecycle.
//!
//! Loading priority, lowest to highest:
//! 1. Default values (hardcoded)
//! 2. Config file (TOML, optional)
//! 3. Environment variables with the `NF` prefix

mod lifecycle;
pub use lifecycle::*;

//---
use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Registration retry and heartbeat cadence policy
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
}

impl Settings {
    /// Load configuration from an optional TOML file with an environment
    /// variable overlay, e.g. `NF__LIFECYCLE__RETRY_INTERVAL_SECS=5`.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = Config::builder();

        if let Some(path) = path {
            config = config.add_source(File::with_name(path).required(true));
        }

        // Environment variables (highest priority)
        config = config.add_source(
            Environment::with_prefix("NF")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        Ok(config.build()?.try_deserialize()?)
    }
}
