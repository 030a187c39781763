//! Outbound lifecycle events.
//!
//! The [`HelloComponent`](super::service::HelloComponent) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use core::time::Duration;

use super::reading::DeviceId;
use super::service::{LoopState, LoopStats};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The loop is about to run its first iteration.
    Started { device_id: DeviceId, interval: Duration },

    /// The loop moved between states.
    StateChanged { from: LoopState, to: LoopState },

    /// An iteration failed; the loop sleeps `backoff` and retries.
    IterationFailed { error: Error, backoff: Duration },

    /// The loop has exited.
    Stopped(LoopStats),
}
