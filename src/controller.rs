//! The paddle controller aggregate.
//!
//! A [`Controller`] owns one potentiometer, one switch, and one status LED,
//! each bound to its GPIO at construction time for the lifetime of the
//! object — there is no re-binding operation.  Every method is a stateless
//! pass-through to the corresponding peripheral; no data flows between the
//! three peripherals at this layer.
//!
//! Pin validity is the config layer's concern
//! ([`ControllerConfig::validate`](crate::config::ControllerConfig::validate));
//! this type binds whatever it is given.

use crate::config::ControllerConfig;
use crate::drivers::led::StatusLed;
use crate::drivers::potentiometer::{Calibration, PaddleReading, Potentiometer};
use crate::drivers::switch::{ButtonState, Switch};
use crate::error::{InputError, OutputError};
use crate::pins::PinAssignment;

pub struct Controller {
    pot: Potentiometer,
    switch: Switch,
    led: StatusLed,
    pins: PinAssignment,
}

impl Controller {
    /// Build a controller from a validated configuration, applying the
    /// potentiometer span calibration it carries.
    pub fn new(config: &ControllerConfig) -> Self {
        let mut controller = Self::with_pins(
            config.pins.pot_adc_gpio,
            config.pins.switch_gpio,
            config.pins.led_gpio,
        );
        controller.pot.set_calibration(Calibration {
            min_raw: config.pot_min_raw,
            max_raw: config.pot_max_raw,
        });
        controller
    }

    /// Bind three raw GPIO numbers directly.
    pub fn with_pins(pot_adc_gpio: i32, switch_gpio: i32, led_gpio: i32) -> Self {
        Self {
            pot: Potentiometer::new(pot_adc_gpio),
            switch: Switch::new(switch_gpio),
            led: StatusLed::new(led_gpio),
            pins: PinAssignment {
                pot_adc_gpio,
                switch_gpio,
                led_gpio,
            },
        }
    }

    /// The pin bindings this controller was constructed with.
    pub fn pins(&self) -> PinAssignment {
        self.pins
    }

    /// Current raw analog reading from the bound potentiometer.
    pub fn read_value(&self) -> Result<u16, InputError> {
        self.pot.read_raw()
    }

    /// Full paddle sample: raw, smoothed, and calibrated position.
    pub fn read_paddle(&mut self) -> Result<PaddleReading, InputError> {
        self.pot.read()
    }

    /// Current raw digital state of the bound switch.
    pub fn read_button_state(&self) -> Result<ButtonState, InputError> {
        self.switch.read()
    }

    /// Drive the bound LED fully on or off.
    pub fn write_led_state(&mut self, on: bool) -> Result<(), OutputError> {
        self.led.set_on(on)
    }

    /// Drive the bound LED at an intensity (0 – 100 %).
    pub fn write_led_brightness(&mut self, percent: u8) -> Result<(), OutputError> {
        self.led.set_brightness(percent)
    }

    /// Last commanded LED state.
    pub fn led_is_on(&self) -> bool {
        self.led.is_on()
    }

    /// Last commanded LED brightness (percent).
    pub fn led_brightness(&self) -> u8 {
        self.led.brightness()
    }
}
