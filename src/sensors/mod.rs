//! Simulated sensor used as the component's reading source.
//!
//! Every call stamps the current wall-clock time onto the fixed
//! placeholder values.  A real board would replace this with drivers
//! behind the same [`ReadingSource`] port.

use chrono::SecondsFormat;

use crate::app::ports::{Clock, ReadingSource};
use crate::app::reading::{DeviceId, HUMIDITY_PERCENT, PRESSURE_HPA, Reading, TEMPERATURE_C};
use crate::config::ComponentConfig;
use crate::error::SensorError;

pub struct SimulatedSensor<C> {
    clock: C,
    device_id: DeviceId,
    component_name: String,
    version: String,
}

impl<C: Clock> SimulatedSensor<C> {
    pub fn new(config: &ComponentConfig, clock: C) -> Self {
        Self {
            clock,
            device_id: config.device_id.clone(),
            component_name: config.component_name.clone(),
            version: config.version.clone(),
        }
    }

    /// Build a reading without going through the port.
    pub fn sample(&self) -> Reading {
        Reading {
            // AutoSi keeps every significant sub-second digit.
            timestamp: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::AutoSi, false),
            temperature: TEMPERATURE_C,
            humidity: HUMIDITY_PERCENT,
            pressure: PRESSURE_HPA,
            device_id: self.device_id.clone(),
            component_name: self.component_name.clone(),
            schema_version: self.version.clone(),
        }
    }
}

impl<C: Clock> ReadingSource for SimulatedSensor<C> {
    fn generate(&mut self) -> Result<Reading, SensorError> {
        Ok(self.sample())
    }
}
