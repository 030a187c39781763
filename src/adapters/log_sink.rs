//! Log-based adapters.
//!
//! [`LogPublisher`] implements [`Publisher`] by writing the reading as
//! pretty-printed JSON to the log; an MQTT/IPC publisher would implement
//! the same trait.  [`LogEventSink`] implements [`EventSink`] for the
//! loop's lifecycle events.

use log::{debug, error, info};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, Publisher};
use crate::app::reading::Reading;
use crate::app::service::LoopState;
use crate::error::PublishError;

/// Simulated publisher: one info line per reading.
#[derive(Debug, Default)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl Publisher for LogPublisher {
    fn publish(&mut self, reading: &Reading) -> Result<(), PublishError> {
        let body = reading.to_pretty_json()?;
        info!("Publishing data: {}", body);
        Ok(())
    }
}

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { device_id, interval } => {
                info!("Hello World component started");
                info!("Device ID: {}", device_id);
                info!("Publish interval: {} seconds", interval.as_secs());
            }
            AppEvent::StateChanged { from, to } => {
                debug!("STATE | {:?} -> {:?}", from, to);
                if *to == LoopState::Stopping {
                    info!("Stop requested, finishing current iteration");
                }
            }
            AppEvent::IterationFailed { error, backoff } => {
                error!("Error in main loop: {}", error);
                info!("Retrying in {} seconds", backoff.as_secs());
            }
            AppEvent::Stopped(stats) => {
                info!("Hello World component stopped");
                info!(
                    "Summary | iterations={} published={} failed={}",
                    stats.iterations, stats.published, stats.failed
                );
            }
        }
    }
}
