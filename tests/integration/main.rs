//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that drives the main loop against
//! mock adapters.  No real signals or real sleeps are involved.

mod mock_ports;
