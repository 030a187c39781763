//! Port traits — the boundary between the main loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ HelloComponent (loop)
//! ```
//!
//! Adapters (clock, sleeper, publisher, event sink) implement these traits.
//! The [`HelloComponent`](super::service::HelloComponent) consumes them via
//! generics, so the loop never touches the system clock or a broker directly.

use core::time::Duration;

use chrono::{DateTime, Local};

use super::reading::Reading;
use crate::error::{PublishError, SensorError};

// ───────────────────────────────────────────────────────────────
// Reading source (driven adapter: sensor → loop)
// ───────────────────────────────────────────────────────────────

/// Produces one fresh [`Reading`] per call.
pub trait ReadingSource {
    fn generate(&mut self) -> Result<Reading, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Publisher (driven adapter: loop → broker)
// ───────────────────────────────────────────────────────────────

/// Delivers a reading.  A failure is handed back to the loop's retry policy.
pub trait Publisher {
    fn publish(&mut self, reading: &Reading) -> Result<(), PublishError>;
}

// ───────────────────────────────────────────────────────────────
// Time
// ───────────────────────────────────────────────────────────────

/// Wall-clock source for reading timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Blocks the loop between iterations.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: loop → logging)
// ───────────────────────────────────────────────────────────────

/// The loop emits lifecycle [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
