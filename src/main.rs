//! Hello World Component — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  SimulatedSensor   LogPublisher   LogEventSink           │
//! │  (ReadingSource)   (Publisher)    (EventSink)            │
//! │  SystemClock       LoopSleeper                           │
//! │  (Clock)           (Sleeper)                             │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          HelloComponent (main loop)            │      │
//! │  │  generate · publish · sleep · backoff          │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  RunFlag ◀── SIGINT / SIGTERM                            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Exit status: 0 after a signal-driven stop, 1 when setup fails or an
//! error escapes the loop.
#![deny(unused_must_use)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{error, info};

use hello_component::adapters::log_sink::{LogEventSink, LogPublisher};
use hello_component::adapters::logger;
use hello_component::adapters::time::{LoopSleeper, SystemClock};
use hello_component::app::service::HelloComponent;
use hello_component::config::ComponentConfig;
use hello_component::error::Error;
use hello_component::sensors::SimulatedSensor;
use hello_component::shutdown::{self, RunFlag};

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("logger init failed: {e}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Unexpected error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    info!("hello-component v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Configuration ──────────────────────────────────────
    let config = ComponentConfig::default();
    config
        .validate()
        .map_err(Error::from)
        .context("invalid configuration")?;

    // ── 2. Shutdown wiring ────────────────────────────────────
    let flag = RunFlag::new();
    shutdown::install_signal_handlers(&flag).context("signal handler registration")?;

    // ── 3. Adapters ───────────────────────────────────────────
    let mut source = SimulatedSensor::new(&config, SystemClock);
    let mut publisher = LogPublisher::new();
    let mut sleeper = LoopSleeper::new(config.wake_on_shutdown, &flag);
    let mut sink = LogEventSink::new();

    // ── 4. Main loop ──────────────────────────────────────────
    let mut app = HelloComponent::new(config, flag);
    app.run(&mut source, &mut publisher, &mut sleeper, &mut sink)
        .context("main loop")?;

    Ok(())
}
