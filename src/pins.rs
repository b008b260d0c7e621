//! GPIO / peripheral pin assignments for the Pronguino paddle board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! A [`PinAssignment`] always names its pins; `PinAssignment::default()`
//! resolves to the documented constants below.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Paddle potentiometer — Analog (ADC1)
// ---------------------------------------------------------------------------

/// 10 kΩ rotary potentiometer wiper — analog voltage into ADC1.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const POT_ADC_GPIO: i32 = 5;

/// ADC resolution in bits.  Oneshot reads return 0 – 4095.
pub const ADC_RESOLUTION_BITS: u32 = 12;
/// Maximum raw ADC reading at 12-bit resolution.
pub const ADC_MAX_RAW: u16 = 4095;

// ---------------------------------------------------------------------------
// Action button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button for the paddle's action input.
pub const SWITCH_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Status LED, driven through an LEDC PWM channel for dimming.
pub const LED_GPIO: i32 = 11;

/// LEDC channel assigned to the status LED.
pub const LEDC_CH_LED: u32 = 0;
/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the status LED (1 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;

// ---------------------------------------------------------------------------
// Pin assignment record
// ---------------------------------------------------------------------------

/// The three GPIO bindings a controller is built from.
///
/// Bindings are fixed for the lifetime of the [`Controller`]
/// (`crate::controller::Controller`) they are handed to — there is no
/// re-binding operation anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinAssignment {
    /// Potentiometer wiper GPIO (must be an ADC1-capable pin, GPIO 1 – 10).
    pub pot_adc_gpio: i32,
    /// Action switch GPIO (input, pull-up, active-low).
    pub switch_gpio: i32,
    /// Status LED GPIO (LEDC output).
    pub led_gpio: i32,
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self {
            pot_adc_gpio: POT_ADC_GPIO,
            switch_gpio: SWITCH_GPIO,
            led_gpio: LED_GPIO,
        }
    }
}

/// Map an ESP32-S3 GPIO number to its ADC1 channel.
///
/// ADC1 serves GPIO 1 – 10 as channels 0 – 9.  Returns `None` for pins
/// without ADC1 routing.
pub fn adc1_channel_for_gpio(gpio: i32) -> Option<u32> {
    if (1..=10).contains(&gpio) {
        Some((gpio - 1) as u32)
    } else {
        None
    }
}
