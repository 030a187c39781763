//! Application service — the main loop.
//!
//! [`HelloComponent`] owns the loop state, the retry policy, and the
//! running flag.  All I/O flows through port traits injected at call
//! sites, making the whole loop testable with mock adapters.
//!
//! ```text
//!  ReadingSource ──▶ ┌─────────────────────────┐ ──▶ EventSink
//!                    │     HelloComponent      │
//!  Publisher     ◀── │  generate · publish ·   │ ──▶ Sleeper
//!                    │  sleep / backoff        │
//!                    └─────────────────────────┘
//!                               ▲
//!                            RunFlag
//! ```
//!
//! States move strictly forward: `Running → Stopping → Stopped`.  The
//! flag is polled at the top of each iteration only, so an in-flight
//! generate + publish + sleep always completes before the loop exits.

use core::time::Duration;

use log::{debug, error};

use crate::config::ComponentConfig;
use crate::error::Error;
use crate::shutdown::RunFlag;

use super::events::AppEvent;
use super::ports::{EventSink, Publisher, ReadingSource, Sleeper};

// ───────────────────────────────────────────────────────────────
// Loop bookkeeping
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// A stop was requested; the in-flight iteration is finishing.
    Stopping,
    Stopped,
}

/// Result of one generate + publish pass.
#[derive(Debug, Clone, PartialEq)]
pub enum IterationOutcome {
    Published,
    /// The iteration failed; the loop backs off and tries again.
    Recoverable(Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub iterations: u64,
    pub published: u64,
    pub failed: u64,
}

/// What the loop does after a failed iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub backoff: Duration,
    /// `None` retries forever.
    pub max_consecutive_failures: Option<u32>,
}

impl RetryPolicy {
    pub fn from_config(config: &ComponentConfig) -> Self {
        Self {
            backoff: config.retry_backoff(),
            max_consecutive_failures: config.max_consecutive_failures,
        }
    }

    fn exhausted(&self, consecutive_failures: u32) -> bool {
        self.max_consecutive_failures
            .is_some_and(|max| consecutive_failures >= max)
    }
}

// ───────────────────────────────────────────────────────────────
// HelloComponent
// ───────────────────────────────────────────────────────────────

pub struct HelloComponent {
    config: ComponentConfig,
    retry: RetryPolicy,
    flag: RunFlag,
    state: LoopState,
    stats: LoopStats,
    consecutive_failures: u32,
}

impl HelloComponent {
    pub fn new(config: ComponentConfig, flag: RunFlag) -> Self {
        let retry = RetryPolicy::from_config(&config);
        Self {
            config,
            retry,
            flag,
            state: LoopState::Running,
            stats: LoopStats::default(),
            consecutive_failures: 0,
        }
    }

    // ── Per-iteration work ────────────────────────────────────

    /// Generate one reading and publish it.
    pub fn run_iteration(
        &mut self,
        source: &mut impl ReadingSource,
        publisher: &mut impl Publisher,
    ) -> IterationOutcome {
        self.stats.iterations += 1;

        let outcome = source
            .generate()
            .map_err(Error::from)
            .and_then(|reading| publisher.publish(&reading).map_err(Error::from));

        match outcome {
            Ok(()) => {
                self.stats.published += 1;
                self.consecutive_failures = 0;
                IterationOutcome::Published
            }
            Err(e) => {
                self.stats.failed += 1;
                self.consecutive_failures += 1;
                IterationOutcome::Recoverable(e)
            }
        }
    }

    // ── Main loop ─────────────────────────────────────────────

    /// Run until the flag is cleared.
    ///
    /// Returns the loop statistics on a graceful stop, or
    /// [`Error::RetriesExhausted`] when the retry policy gives up.
    pub fn run(
        &mut self,
        source: &mut impl ReadingSource,
        publisher: &mut impl Publisher,
        sleeper: &mut impl Sleeper,
        sink: &mut impl EventSink,
    ) -> Result<LoopStats, Error> {
        sink.emit(&AppEvent::Started {
            device_id: self.config.device_id.clone(),
            interval: self.config.publish_interval(),
        });

        loop {
            if !self.flag.is_running() {
                self.transition(LoopState::Stopping, sink);
                break;
            }

            match self.run_iteration(source, publisher) {
                IterationOutcome::Published => {
                    debug!("Iteration {} published", self.stats.iterations);
                    sleeper.sleep(self.config.publish_interval());
                }
                IterationOutcome::Recoverable(e) => {
                    sink.emit(&AppEvent::IterationFailed {
                        error: e,
                        backoff: self.retry.backoff,
                    });
                    if self.retry.exhausted(self.consecutive_failures) {
                        let attempts = self.consecutive_failures;
                        error!("Retry limit reached after {} consecutive failures", attempts);
                        self.finish(sink);
                        return Err(Error::RetriesExhausted { attempts });
                    }
                    sleeper.sleep(self.retry.backoff);
                }
            }
        }

        self.finish(sink);
        Ok(self.stats)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current loop state.  Reports `Stopping` as soon as the flag is
    /// cleared, even before the loop has observed it.
    pub fn state(&self) -> LoopState {
        match self.state {
            LoopState::Running if !self.flag.is_running() => LoopState::Stopping,
            s => s,
        }
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    // ── Internal ──────────────────────────────────────────────

    fn finish(&mut self, sink: &mut impl EventSink) {
        if self.state == LoopState::Running {
            self.transition(LoopState::Stopping, sink);
        }
        self.transition(LoopState::Stopped, sink);
        sink.emit(&AppEvent::Stopped(self.stats));
    }

    fn transition(&mut self, to: LoopState, sink: &mut impl EventSink) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        sink.emit(&AppEvent::StateChanged { from, to });
    }
}
