//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter     | Implements          | Connects to              |
//! |-------------|---------------------|--------------------------|
//! | `log_sink`  | Publisher           | Log output (simulated)   |
//! |             | EventSink           | Log output               |
//! | `logger`    | —                   | `env_logger` backend     |
//! | `time`      | Clock               | System wall clock        |
//! |             | Sleeper             | `std::thread::sleep`     |

pub mod log_sink;
pub mod logger;
pub mod time;
