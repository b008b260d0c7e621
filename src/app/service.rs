//! The per-tick polling service.
//!
//! Pure logic, zero I/O: every hardware interaction goes through the port
//! traits in [`ports`](super::ports), so this module runs identically on
//! the target and under host tests with mock adapters.
//!
//! One [`poll`](ControllerService::poll) pass:
//! 1. sample the paddle — on failure, emit a fault and retain the last
//!    good value (a flaky read must not corrupt the snapshot),
//! 2. sample the switch and run the debouncer (a level change must hold
//!    for the configured window before it commits),
//! 3. emit edge/motion events and mirror the debounced button onto the
//!    LED when feedback is enabled.

use log::warn;

use crate::app::events::InputEvent;
use crate::app::ports::{EventSink, InputPort, OutputPort};
use crate::config::ControllerConfig;

/// Last known good state of both inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerSnapshot {
    pub paddle_raw: u16,
    pub paddle_position_percent: f32,
    pub button_pressed: bool,
}

// ── Debounce ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Pending {
    level: bool,
    since_ms: u32,
}

/// Commits a level change only after it has held for the window.
///
/// Timestamps wrap every ~49 days; comparisons use `wrapping_sub`.
#[derive(Debug)]
struct Debounce {
    window_ms: u32,
    stable: bool,
    pending: Option<Pending>,
}

impl Debounce {
    fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            stable: false,
            pending: None,
        }
    }

    /// Feed one raw sample.  Returns the new stable level when a change
    /// commits, `None` otherwise.
    fn update(&mut self, raw: bool, now_ms: u32) -> Option<bool> {
        if raw == self.stable {
            // Bounce back to the stable level cancels any pending change.
            self.pending = None;
            return None;
        }

        let since_ms = match self.pending {
            Some(p) if p.level == raw => p.since_ms,
            _ => {
                self.pending = Some(Pending {
                    level: raw,
                    since_ms: now_ms,
                });
                now_ms
            }
        };

        if now_ms.wrapping_sub(since_ms) >= self.window_ms {
            self.stable = raw;
            self.pending = None;
            return Some(raw);
        }
        None
    }
}

// ── Service ───────────────────────────────────────────────────

pub struct ControllerService {
    debounce: Debounce,
    move_threshold_percent: f32,
    led_feedback: bool,
    led_feedback_brightness: u8,
    last_reported_position: Option<f32>,
    snapshot: ControllerSnapshot,
}

impl ControllerService {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            debounce: Debounce::new(config.debounce_ms),
            move_threshold_percent: config.move_threshold_percent,
            led_feedback: config.led_button_feedback,
            led_feedback_brightness: config.led_feedback_brightness,
            last_reported_position: None,
            snapshot: ControllerSnapshot::default(),
        }
    }

    /// Last known good state.
    pub fn snapshot(&self) -> ControllerSnapshot {
        self.snapshot
    }

    /// One polling pass over a combined hardware port.  `now_ms` is the
    /// monotonic time feeding the debouncer.  Returns the updated
    /// snapshot.
    pub fn poll<HW, E>(&mut self, now_ms: u32, hw: &mut HW, sink: &mut E) -> ControllerSnapshot
    where
        HW: InputPort + OutputPort,
        E: EventSink,
    {
        // ── Paddle ────────────────────────────────────────────
        match hw.read_paddle() {
            Ok(reading) => {
                self.snapshot.paddle_raw = reading.raw;
                self.snapshot.paddle_position_percent = reading.position_percent;

                let moved = match self.last_reported_position {
                    Some(last) => {
                        (reading.position_percent - last).abs() >= self.move_threshold_percent
                    }
                    // First good sample always reports the position.
                    None => true,
                };
                if moved {
                    self.last_reported_position = Some(reading.position_percent);
                    sink.emit(&InputEvent::PaddleMoved {
                        position_percent: reading.position_percent,
                    });
                }
            }
            Err(e) => {
                warn!("paddle read failed: {} — keeping last good value", e);
                sink.emit(&InputEvent::InputFault(e));
            }
        }

        // ── Switch ────────────────────────────────────────────
        match hw.read_button() {
            Ok(state) => {
                if let Some(pressed) = self.debounce.update(state.is_pressed(), now_ms) {
                    self.snapshot.button_pressed = pressed;
                    let edge = if pressed {
                        InputEvent::ButtonPressed
                    } else {
                        InputEvent::ButtonReleased
                    };
                    sink.emit(&edge);

                    if self.led_feedback {
                        let brightness = if pressed { self.led_feedback_brightness } else { 0 };
                        if let Err(e) = hw.set_led_brightness(brightness) {
                            warn!("LED feedback write failed: {}", e);
                        }
                    }
                }
            }
            Err(e) => {
                warn!("switch read failed: {} — keeping last good value", e);
                sink.emit(&InputEvent::InputFault(e));
            }
        }

        self.snapshot
    }
}
