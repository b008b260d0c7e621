//! Serial-log event sink.

use log::{info, warn};

use crate::app::events::InputEvent;
use crate::app::ports::EventSink;

/// Writes every domain event to the serial log.
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PaddleMoved { position_percent } => {
                info!("paddle: {:.1}%", position_percent);
            }
            InputEvent::ButtonPressed => info!("button: pressed"),
            InputEvent::ButtonReleased => info!("button: released"),
            InputEvent::InputFault(e) => warn!("input fault: {}", e),
        }
    }
}
