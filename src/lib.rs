//! Hello World edge component library.
//!
//! Exposes the loop, its ports and adapters for integration testing.
//! The binary in `main.rs` wires them together.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod sensors;
pub mod shutdown;
