//! System configuration parameters
//!
//! All tunable parameters for the Pronguino paddle controller.  Defaults
//! match the reference board; a deployment can deserialize an override
//! before peripheral init.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pins::{self, PinAssignment};

/// Core controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// GPIO bindings for the three peripherals.
    pub pins: PinAssignment,

    // --- Potentiometer ---
    /// Raw ADC reading the paddle maps to position 0 %.
    pub pot_min_raw: u16,
    /// Raw ADC reading the paddle maps to position 100 %.
    pub pot_max_raw: u16,
    /// Paddle movement (percent of travel) that triggers a motion event.
    pub move_threshold_percent: f32,

    // --- Switch ---
    /// Debounce window (milliseconds) — a level change must hold this long.
    pub debounce_ms: u32,

    // --- LED ---
    /// Mirror the debounced button state onto the status LED.
    pub led_button_feedback: bool,
    /// LED brightness (0-100 %) used when feedback lights the LED.
    pub led_feedback_brightness: u8,

    // --- Timing ---
    /// Input poll interval (milliseconds).
    pub sample_interval_ms: u32,
    /// Snapshot log interval (seconds).
    pub status_interval_secs: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pins: PinAssignment::default(),

            // Potentiometer: full 12-bit span, 1% motion threshold
            pot_min_raw: 0,
            pot_max_raw: pins::ADC_MAX_RAW,
            move_threshold_percent: 1.0,

            // Switch: two poll ticks of settle time
            debounce_ms: 20,

            // LED
            led_button_feedback: true,
            led_feedback_brightness: 100,

            // Timing
            sample_interval_ms: 10,  // 100 Hz
            status_interval_secs: 5,
        }
    }
}

impl ControllerConfig {
    /// Range-check the configuration before it reaches hardware init.
    ///
    /// Invalid values are rejected, not silently clamped.
    pub fn validate(&self) -> Result<(), Error> {
        let p = &self.pins;
        if p.pot_adc_gpio == p.switch_gpio
            || p.pot_adc_gpio == p.led_gpio
            || p.switch_gpio == p.led_gpio
        {
            return Err(Error::Config("pin assignments must be distinct"));
        }
        if pins::adc1_channel_for_gpio(p.pot_adc_gpio).is_none() {
            return Err(Error::Config("potentiometer pin is not ADC1-capable"));
        }
        if self.pot_min_raw >= self.pot_max_raw {
            return Err(Error::Config("pot_min_raw must be below pot_max_raw"));
        }
        if self.pot_max_raw > pins::ADC_MAX_RAW {
            return Err(Error::Config("pot_max_raw exceeds ADC resolution"));
        }
        if !(0.0..=100.0).contains(&self.move_threshold_percent) {
            return Err(Error::Config("move_threshold_percent out of range"));
        }
        if self.led_feedback_brightness > 100 {
            return Err(Error::Config("led_feedback_brightness exceeds 100%"));
        }
        if self.sample_interval_ms == 0 {
            return Err(Error::Config("sample_interval_ms must be non-zero"));
        }
        Ok(())
    }
}
