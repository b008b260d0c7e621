//! Status LED driver.
//!
//! One LEDC PWM channel drives the status LED, which doubles as a
//! brightness-controllable indicator.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LEDC channel via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::error::OutputError;
use crate::pins;

pub struct StatusLed {
    gpio: i32,
    on: bool,
    brightness_percent: u8,
}

impl StatusLed {
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            on: false,
            brightness_percent: 0,
        }
    }

    /// GPIO pin the LED is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Binary on/off.  On means full brightness.
    pub fn set_on(&mut self, on: bool) -> Result<(), OutputError> {
        self.set_brightness(if on { 100 } else { 0 })
    }

    /// Intensity in percent (0 – 100, capped).  Zero turns the LED off.
    pub fn set_brightness(&mut self, percent: u8) -> Result<(), OutputError> {
        let percent = percent.min(100);
        let duty_8bit = ((u16::from(percent)) * 255 / 100) as u8;
        hw_init::ledc_set(pins::LEDC_CH_LED, duty_8bit)?;

        self.on = percent > 0;
        self.brightness_percent = percent;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn brightness(&self) -> u8 {
        self.brightness_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_off_round_trip() {
        let mut led = StatusLed::new(11);
        assert!(!led.is_on());

        led.set_on(true).unwrap();
        assert!(led.is_on());
        assert_eq!(led.brightness(), 100);

        led.set_on(false).unwrap();
        assert!(!led.is_on());
        assert_eq!(led.brightness(), 0);
    }

    #[test]
    fn brightness_caps_at_100() {
        let mut led = StatusLed::new(11);
        led.set_brightness(250).unwrap();
        assert_eq!(led.brightness(), 100);
        assert!(led.is_on());

        led.set_brightness(40).unwrap();
        assert_eq!(led.brightness(), 40);
        assert!(led.is_on());
    }
}
