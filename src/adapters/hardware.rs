//! Hardware adapter — bridges the real controller to the port traits.
//!
//! Owns the [`Controller`] and exposes it through [`InputPort`] and
//! [`OutputPort`].  This is the only module above the drivers that
//! touches actual hardware.  On non-espidf targets, the underlying
//! drivers use cfg-gated simulation hooks.

use crate::app::ports::{InputPort, OutputPort};
use crate::controller::Controller;
use crate::drivers::potentiometer::PaddleReading;
use crate::drivers::switch::ButtonState;
use crate::error::{InputError, OutputError};

/// Concrete adapter that puts a [`Controller`] behind the port traits.
pub struct HardwareAdapter {
    controller: Controller,
}

impl HardwareAdapter {
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn read_paddle(&mut self) -> Result<PaddleReading, InputError> {
        self.controller.read_paddle()
    }

    fn read_button(&mut self) -> Result<ButtonState, InputError> {
        self.controller.read_button_state()
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl OutputPort for HardwareAdapter {
    fn set_led(&mut self, on: bool) -> Result<(), OutputError> {
        self.controller.write_led_state(on)
    }

    fn set_led_brightness(&mut self, percent: u8) -> Result<(), OutputError> {
        self.controller.write_led_brightness(percent)
    }

    fn all_off(&mut self) {
        if let Err(e) = self.controller.write_led_state(false) {
            log::warn!("all_off: LED write failed: {}", e);
        }
    }
}
