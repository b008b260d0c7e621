//! Domain events emitted by the polling service.

use crate::error::InputError;

/// One observable change on the controller, emitted through
/// [`EventSink`](super::ports::EventSink).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Debounced press edge on the action switch.
    ButtonPressed,
    /// Debounced release edge on the action switch.
    ButtonReleased,
    /// Paddle moved beyond the motion threshold.
    PaddleMoved { position_percent: f32 },
    /// A peripheral read failed; the previous good value is retained.
    InputFault(InputError),
}
