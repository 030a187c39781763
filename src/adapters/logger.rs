//! Logging backend.
//!
//! Lines look like `<timestamp> - <target> - <LEVEL> - <message>`, with
//! the timestamp in local time (`2025-10-01 12:00:00,123`).
//! The default filter is `info`; `RUST_LOG` overrides it.

use core::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, Local};
use env_logger::Env;
use log::{Record, SetLoggerError};

/// Install the global logger.  Fails if a logger is already set.
pub fn init() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            write_line(buf, local_timestamp(Local::now()), record)
        })
        .try_init()
}

fn local_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S,%3f").to_string()
}

fn write_line(out: &mut impl Write, timestamp: impl Display, record: &Record<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{} - {} - {} - {}",
        timestamp,
        record.target(),
        record.level(),
        record.args()
    )
}
