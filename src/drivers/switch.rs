//! Action switch driver.
//!
//! Active-low momentary switch with pull-up: the GPIO reads high at rest
//! and low while pressed.  This driver is a raw level read — debouncing
//! happens in the polling service, which sees every sample.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init.
//! On host/test: reads a static `AtomicBool` for injection.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::error::InputError;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_SWITCH_PRESSED: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_switch_pressed(pressed: bool) {
    SIM_SWITCH_PRESSED.store(pressed, Ordering::Relaxed);
}

/// Decoded state of the action switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Released,
    Pressed,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }

    fn from_pressed(pressed: bool) -> Self {
        if pressed { Self::Pressed } else { Self::Released }
    }
}

pub struct Switch {
    gpio: i32,
}

impl Switch {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// GPIO pin the switch is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Current raw state.  No debouncing, no side effects.
    pub fn read(&self) -> Result<ButtonState, InputError> {
        Ok(ButtonState::from_pressed(self.read_pressed()?))
    }

    #[cfg(target_os = "espidf")]
    fn read_pressed(&self) -> Result<bool, InputError> {
        // Active-low: level low = pressed.
        Ok(!hw_init::gpio_read(self.gpio))
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_pressed(&self) -> Result<bool, InputError> {
        Ok(SIM_SWITCH_PRESSED.load(Ordering::Relaxed))
    }
}
