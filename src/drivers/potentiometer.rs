//! Paddle potentiometer driver.
//!
//! Reads the wiper voltage through an ESP32-S3 ADC channel, applies a
//! two-point span calibration to a 0 – 100 % paddle position, and keeps a
//! short ring buffer for a running average so the paddle does not jitter
//! from single-sample ADC noise.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the ADC1 channel via the oneshot API (initialised by
//! hw_init). On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::{AtomicU16, Ordering};

use crate::error::InputError;
use crate::pins;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

static SIM_POT_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_pot_adc(raw: u16) {
    SIM_POT_ADC.store(raw, Ordering::Relaxed);
}

const RING_BUF_CAP: usize = 8;

/// One paddle sample: raw conversion, running average, calibrated position.
#[derive(Debug, Clone, Copy)]
pub struct PaddleReading {
    pub raw: u16,
    pub smoothed: f32,
    pub position_percent: f32,
}

/// Two-point span calibration: raw readings at the two mechanical stops.
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    pub min_raw: u16,
    pub max_raw: u16,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            min_raw: 0,
            max_raw: pins::ADC_MAX_RAW,
        }
    }
}

pub struct Potentiometer {
    gpio: i32,
    cal: Calibration,
    ring: [u16; RING_BUF_CAP],
    head: usize,
    count: usize,
}

impl Potentiometer {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            gpio: adc_gpio,
            cal: Calibration::default(),
            ring: [0; RING_BUF_CAP],
            head: 0,
            count: 0,
        }
    }

    /// GPIO pin the wiper is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    pub fn set_calibration(&mut self, cal: Calibration) {
        self.cal = cal;
    }

    /// One raw ADC conversion, no smoothing, no side effects.
    pub fn read_raw(&self) -> Result<u16, InputError> {
        self.read_adc()
    }

    /// One conversion plus ring-buffer update and calibrated position.
    pub fn read(&mut self) -> Result<PaddleReading, InputError> {
        let raw = self.read_adc()?;

        self.ring[self.head] = raw;
        self.head = (self.head + 1) % RING_BUF_CAP;
        if self.count < RING_BUF_CAP {
            self.count += 1;
        }

        let smoothed = self.running_average();
        Ok(PaddleReading {
            raw,
            smoothed,
            position_percent: self.position_percent(smoothed),
        })
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> Result<u16, InputError> {
        let channel =
            pins::adc1_channel_for_gpio(self.gpio).ok_or(InputError::AdcReadFailed)?;
        hw_init::adc1_read(channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> Result<u16, InputError> {
        Ok(SIM_POT_ADC.load(Ordering::Relaxed))
    }

    /// Map a (possibly smoothed) raw value onto the calibrated 0 – 100 %
    /// paddle travel.  Readings outside the span clamp to the stops.
    pub fn position_percent(&self, raw: f32) -> f32 {
        let min = f32::from(self.cal.min_raw);
        let max = f32::from(self.cal.max_raw);
        if max <= min {
            return 0.0;
        }
        ((raw - min) / (max - min) * 100.0).clamp(0.0, 100.0)
    }

    fn running_average(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let sum: u32 = self.ring[..self.count].iter().map(|&v| u32::from(v)).sum();
        sum as f32 / self.count as f32
    }
}
