//! Signal-driven shutdown.
//!
//! ```text
//! ┌─────────────┐  request_stop()  ┌──────────┐  is_running()  ┌───────────┐
//! │ SIGINT      │─────────────────▶│ RunFlag  │◀───────────────│ Main loop │
//! │ SIGTERM     │                  │ (atomic) │                │ (poller)  │
//! └─────────────┘                  └──────────┘                └───────────┘
//! ```
//!
//! The flag starts `true` and can only ever be cleared.  The handler
//! writes, the loop reads at the top of each iteration.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::error::{Error, Result};

/// Shared one-way running flag.
#[derive(Debug, Clone)]
pub struct RunFlag {
    running: Arc<AtomicBool>,
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RunFlag {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Clear the flag.  Returns `true` if this call performed the transition.
    pub fn request_stop(&self) -> bool {
        self.running.swap(false, Ordering::SeqCst)
    }
}

/// Route SIGINT and SIGTERM to `flag.request_stop()`.
///
/// May only be called once per process.
pub fn install_signal_handlers(flag: &RunFlag) -> Result<()> {
    let flag = flag.clone();
    ctrlc::set_handler(move || {
        if flag.request_stop() {
            info!("Received termination signal, shutting down gracefully...");
        } else {
            info!("Received termination signal, shutdown already in progress");
        }
    })
    .map_err(|e| Error::Signal(e.to_string()))
}
