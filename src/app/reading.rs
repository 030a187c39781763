//! The Reading record published every iteration.

use serde::{Deserialize, Serialize};

/// Fixed-capacity device identifier.
pub type DeviceId = heapless::String<64>;

pub const DEFAULT_DEVICE_ID: &str = "raspberry-pi-001";
pub const COMPONENT_NAME: &str = "HelloWorld";
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Placeholder sensor values.
pub const TEMPERATURE_C: f64 = 25.5;
pub const HUMIDITY_PERCENT: f64 = 60.0;
pub const PRESSURE_HPA: f64 = 1013.25;

/// One simulated sensor sample plus its metadata.
///
/// Field order is the JSON key order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// RFC 3339 generation time with local offset.
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub device_id: DeviceId,
    #[serde(rename = "component")]
    pub component_name: String,
    #[serde(rename = "version")]
    pub schema_version: String,
}

impl Reading {
    /// Pretty-printed JSON, two-space indented.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// True when both readings carry the same values apart from the timestamp.
    pub fn same_payload(&self, other: &Self) -> bool {
        self.temperature == other.temperature
            && self.humidity == other.humidity
            && self.pressure == other.pressure
            && self.device_id == other.device_id
            && self.component_name == other.component_name
            && self.schema_version == other.schema_version
    }
}
