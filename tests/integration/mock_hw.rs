//! Mock hardware adapter for integration tests.
//!
//! Records every output call and replays scripted input readings so tests
//! can assert on the full command history without touching real GPIO/PWM
//! registers.

use pronguino::app::events::InputEvent;
use pronguino::app::ports::{EventSink, InputPort, OutputPort};
use pronguino::drivers::potentiometer::PaddleReading;
use pronguino::drivers::switch::ButtonState;
use pronguino::error::{InputError, OutputError};

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    SetLed { on: bool },
    SetBrightness { percent: u8 },
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub paddle: Result<PaddleReading, InputError>,
    pub button: Result<ButtonState, InputError>,
    pub calls: Vec<OutputCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            paddle: Ok(PaddleReading {
                raw: 0,
                smoothed: 0.0,
                position_percent: 0.0,
            }),
            button: Ok(ButtonState::Released),
            calls: Vec::new(),
        }
    }

    pub fn set_paddle(&mut self, raw: u16, position_percent: f32) {
        self.paddle = Ok(PaddleReading {
            raw,
            smoothed: f32::from(raw),
            position_percent,
        });
    }

    pub fn fail_paddle(&mut self, e: InputError) {
        self.paddle = Err(e);
    }

    pub fn set_button(&mut self, pressed: bool) {
        self.button = Ok(if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        });
    }

    pub fn fail_button(&mut self, e: InputError) {
        self.button = Err(e);
    }

    pub fn last_call(&self) -> Option<&OutputCall> {
        self.calls.last()
    }

    /// Effective LED state after replaying the call history.
    pub fn led_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                OutputCall::SetLed { on } => Some(*on),
                OutputCall::SetBrightness { percent } => Some(*percent > 0),
                OutputCall::AllOff => Some(false),
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockHardware {
    fn read_paddle(&mut self) -> Result<PaddleReading, InputError> {
        self.paddle
    }

    fn read_button(&mut self) -> Result<ButtonState, InputError> {
        self.button
    }
}

impl OutputPort for MockHardware {
    fn set_led(&mut self, on: bool) -> Result<(), OutputError> {
        self.calls.push(OutputCall::SetLed { on });
        Ok(())
    }

    fn set_led_brightness(&mut self, percent: u8) -> Result<(), OutputError> {
        self.calls.push(OutputCall::SetBrightness { percent });
        Ok(())
    }

    fn all_off(&mut self) {
        self.calls.push(OutputCall::AllOff);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<InputEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn button_events(&self) -> Vec<InputEvent> {
        self.events
            .iter()
            .filter(|e| {
                matches!(e, InputEvent::ButtonPressed | InputEvent::ButtonReleased)
            })
            .copied()
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &InputEvent) {
        self.events.push(*event);
    }
}
