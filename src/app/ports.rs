//! Port traits — the boundary between the polling logic and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControllerService (domain)
//! ```
//!
//! Driven adapters implement these traits; the
//! [`ControllerService`](super::service::ControllerService) consumes them
//! via generics, so the polling logic never touches hardware directly and
//! runs unchanged against mocks on the host.

use crate::drivers::potentiometer::PaddleReading;
use crate::drivers::switch::ButtonState;
use crate::error::{InputError, OutputError};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the polling service calls this to sample the paddle.
pub trait InputPort {
    /// Sample the potentiometer: raw, smoothed, calibrated position.
    fn read_paddle(&mut self) -> Result<PaddleReading, InputError>;

    /// Sample the raw (undebounced) switch state.
    fn read_button(&mut self) -> Result<ButtonState, InputError>;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the polling service calls this to drive the LED.
pub trait OutputPort {
    /// Drive the LED fully on or off.
    fn set_led(&mut self, on: bool) -> Result<(), OutputError>;

    /// Drive the LED at an intensity (0 – 100 %).
    fn set_led_brightness(&mut self, percent: u8) -> Result<(), OutputError>;

    /// Kill all outputs — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The polling service emits [`InputEvent`](super::events::InputEvent)s
/// through this port.  Adapters decide where they go (serial log, game
/// host link, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::InputEvent);
}
