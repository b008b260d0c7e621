//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters or the simulated peripherals.  All tests run on
//! the host (x86_64) with no real hardware required.

// Sim-hook tests only exist on host targets.
#[cfg(not(target_os = "espidf"))]
mod controller_tests;
mod mock_hw;
mod service_tests;
