//! Application core — the loop and its data, zero direct I/O.
//!
//! Interaction with the clock, the sleep primitive, and the publish
//! target happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without a real broker or real time.

pub mod events;
pub mod ports;
pub mod reading;
pub mod service;
