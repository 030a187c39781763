//! Mock adapters for integration tests.
//!
//! A virtual clock shared between the clock and the sleeper, so every
//! sleep advances "wall" time without blocking the test.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use hello_component::app::events::AppEvent;
use hello_component::app::ports::{Clock, EventSink, Publisher, ReadingSource, Sleeper};
use hello_component::app::reading::Reading;
use hello_component::error::{PublishError, SensorError};
use hello_component::shutdown::RunFlag;

// ── Virtual clock ─────────────────────────────────────────────

#[derive(Clone)]
pub struct VirtualClock {
    now: Rc<Cell<DateTime<Local>>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        let start = Local.timestamp_opt(1_759_320_000, 0).unwrap();
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let next = self.now.get() + chrono::Duration::from_std(by).unwrap();
        self.now.set(next);
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

// ── Sleeper ───────────────────────────────────────────────────

/// Records every requested sleep, advances the virtual clock, and
/// clears the run flag once `stop_after` sleeps have started.
pub struct ScriptedSleeper {
    pub sleeps: Vec<Duration>,
    clock: VirtualClock,
    flag: RunFlag,
    stop_after: usize,
}

impl ScriptedSleeper {
    pub fn new(clock: VirtualClock, flag: RunFlag, stop_after: usize) -> Self {
        Self {
            sleeps: Vec::new(),
            clock,
            flag,
            stop_after,
        }
    }
}

impl Sleeper for ScriptedSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        if self.sleeps.len() >= self.stop_after {
            // Signal lands while the sleep is still pending.
            self.flag.request_stop();
        }
        self.clock.advance(duration);
    }
}

// ── Publisher ─────────────────────────────────────────────────

/// Fails on the listed 1-based call numbers, succeeds otherwise.
pub struct ScriptedPublisher {
    pub published: Rc<RefCell<Vec<Reading>>>,
    fail_on: HashSet<usize>,
    fail_always: bool,
    calls: usize,
}

impl ScriptedPublisher {
    pub fn reliable() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            published: Rc::new(RefCell::new(Vec::new())),
            fail_on: calls.iter().copied().collect(),
            fail_always: false,
            calls: 0,
        }
    }

    pub fn always_failing() -> Self {
        Self {
            fail_always: true,
            ..Self::reliable()
        }
    }

    pub fn count(&self) -> usize {
        self.published.borrow().len()
    }
}

impl Publisher for ScriptedPublisher {
    fn publish(&mut self, reading: &Reading) -> Result<(), PublishError> {
        self.calls += 1;
        if self.fail_always || self.fail_on.contains(&self.calls) {
            return Err(PublishError::Rejected("broker unavailable"));
        }
        self.published.borrow_mut().push(reading.clone());
        Ok(())
    }
}

// ── Reading source wrapper ────────────────────────────────────

/// Wraps a real source and fails on the listed 1-based call numbers.
pub struct FlakySource<S> {
    inner: S,
    fail_on: HashSet<usize>,
    calls: usize,
}

impl<S> FlakySource<S> {
    pub fn new(inner: S, fail_on: &[usize]) -> Self {
        Self {
            inner,
            fail_on: fail_on.iter().copied().collect(),
            calls: 0,
        }
    }
}

impl<S: ReadingSource> ReadingSource for FlakySource<S> {
    fn generate(&mut self) -> Result<Reading, SensorError> {
        self.calls += 1;
        if self.fail_on.contains(&self.calls) {
            return Err(SensorError::ReadFailed);
        }
        self.inner.generate()
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn failures(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::IterationFailed { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
