//! Time adapters.
//!
//! - [`SystemClock`] — local wall-clock time via `chrono`.
//! - [`ThreadSleeper`] — blocks for the full duration.
//! - [`FlagAwareSleeper`] — sleeps in short slices and returns once the
//!   running flag is cleared.

use core::time::Duration;
use std::thread;

use chrono::{DateTime, Local};

use crate::app::ports::{Clock, Sleeper};
use crate::shutdown::RunFlag;

/// Granularity at which a [`FlagAwareSleeper`] re-checks the flag.
pub const DEFAULT_SLICE: Duration = Duration::from_millis(250);
/// Smallest slice accepted; a zero slice would never make progress.
pub const MIN_SLICE: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[derive(Debug, Clone)]
pub struct FlagAwareSleeper {
    flag: RunFlag,
    slice: Duration,
}

impl FlagAwareSleeper {
    pub fn new(flag: RunFlag) -> Self {
        Self::with_slice(flag, DEFAULT_SLICE)
    }

    /// Slices shorter than [`MIN_SLICE`] are raised to it.
    pub fn with_slice(flag: RunFlag, slice: Duration) -> Self {
        Self {
            flag,
            slice: slice.max(MIN_SLICE),
        }
    }
}

impl Sleeper for FlagAwareSleeper {
    fn sleep(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() && self.flag.is_running() {
            let step = remaining.min(self.slice);
            thread::sleep(step);
            remaining = remaining.saturating_sub(step);
        }
    }
}

/// Either sleeper, chosen at startup from config.
#[derive(Debug, Clone)]
pub enum LoopSleeper {
    Thread(ThreadSleeper),
    FlagAware(FlagAwareSleeper),
}

impl LoopSleeper {
    pub fn new(wake_on_shutdown: bool, flag: &RunFlag) -> Self {
        if wake_on_shutdown {
            Self::FlagAware(FlagAwareSleeper::new(flag.clone()))
        } else {
            Self::Thread(ThreadSleeper)
        }
    }
}

impl Sleeper for LoopSleeper {
    fn sleep(&mut self, duration: Duration) {
        match self {
            Self::Thread(s) => s.sleep(duration),
            Self::FlagAware(s) => s.sleep(duration),
        }
    }
}
