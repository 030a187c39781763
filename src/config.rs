//! Component configuration parameters
//!
//! All tunable parameters for the hello component.  The defaults are the
//! compiled-in values a deployment runs with; a real deployment would
//! externalise the device identifier and intervals.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::reading::{COMPONENT_NAME, DEFAULT_DEVICE_ID, DeviceId, SCHEMA_VERSION};
use crate::error::ConfigError;

/// Core component configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    // --- Identity ---
    /// Device identifier stamped on every reading
    pub device_id: DeviceId,
    /// Component name stamped on every reading
    pub component_name: String,
    /// Reading schema version
    pub version: String,

    // --- Timing ---
    /// Sleep after a successful publish (seconds)
    pub publish_interval_secs: u64,
    /// Sleep after a failed iteration (seconds)
    pub retry_backoff_secs: u64,
    /// Consecutive failures tolerated before giving up (`None` = retry forever)
    pub max_consecutive_failures: Option<u32>,

    // --- Shutdown ---
    /// Cut the current sleep short when a termination signal arrives
    pub wake_on_shutdown: bool,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        let mut device_id = DeviceId::new();
        // Capacity is a compile-time constant well above the default id.
        let _ = device_id.push_str(DEFAULT_DEVICE_ID);

        Self {
            // Identity
            device_id,
            component_name: COMPONENT_NAME.to_string(),
            version: SCHEMA_VERSION.to_string(),

            // Timing
            publish_interval_secs: 30,
            retry_backoff_secs: 10,
            max_consecutive_failures: None,

            // Shutdown
            wake_on_shutdown: true,
        }
    }
}

impl ComponentConfig {
    /// Build a config for the given device, leaving everything else default.
    pub fn for_device(device_id: &str) -> Result<Self, ConfigError> {
        let mut id = DeviceId::new();
        id.push_str(device_id)
            .map_err(|()| ConfigError::TooLong("device_id"))?;
        Ok(Self {
            device_id: id,
            ..Self::default()
        })
    }

    /// Reject values the main loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.device_id.is_empty() {
            return Err(ConfigError::ValidationFailed("device_id must not be empty"));
        }
        if self.component_name.is_empty() {
            return Err(ConfigError::ValidationFailed("component_name must not be empty"));
        }
        if self.publish_interval_secs == 0 {
            return Err(ConfigError::ValidationFailed("publish_interval_secs must be > 0"));
        }
        if self.retry_backoff_secs == 0 {
            return Err(ConfigError::ValidationFailed("retry_backoff_secs must be > 0"));
        }
        if self.retry_backoff_secs >= self.publish_interval_secs {
            return Err(ConfigError::ValidationFailed(
                "retry_backoff_secs must be shorter than publish_interval_secs",
            ));
        }
        if self.max_consecutive_failures == Some(0) {
            return Err(ConfigError::ValidationFailed(
                "max_consecutive_failures must be > 0 when set",
            ));
        }
        Ok(())
    }

    pub fn publish_interval(&self) -> Duration {
        Duration::from_secs(self.publish_interval_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_secs(self.retry_backoff_secs)
    }
}
