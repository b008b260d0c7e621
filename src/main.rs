//! Pronguino Firmware — Main Entry Point
//!
//! Event-driven polling loop over a hexagonal core.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Adapters (outer ring)                 │
//! │                                                      │
//! │   HardwareAdapter          LogEventSink              │
//! │   (Input+OutputPort)       (EventSink)               │
//! │                                                      │
//! │  ───────────── Port Trait Boundary ──────────        │
//! │                                                      │
//! │  ┌────────────────────────────────────────────┐      │
//! │  │      ControllerService (pure logic)        │      │
//! │  │  debounce · motion events · LED feedback   │      │
//! │  └────────────────────────────────────────────┘      │
//! │                                                      │
//! │  tick timers + switch ISR ──▶ lock-free event queue  │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use pronguino::adapters::hardware::HardwareAdapter;
use pronguino::adapters::log_sink::LogEventSink;
use pronguino::app::service::ControllerService;
use pronguino::config::ControllerConfig;
use pronguino::controller::Controller;
use pronguino::drivers::{hw_init, hw_timer};
use pronguino::events::{drain_events, Event};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("pronguino v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = ControllerConfig::default();
    if let Err(e) = config.validate() {
        return Err(anyhow::anyhow!("invalid controller config: {}", e));
    }
    info!(
        "pins: pot=GPIO{} switch=GPIO{} led=GPIO{}",
        config.pins.pot_adc_gpio, config.pins.switch_gpio, config.pins.led_gpio
    );

    // ── 3. Hardware bring-up ──────────────────────────────────
    if let Err(e) = hw_init::init_peripherals(&config.pins) {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = hw_init::init_isr_service(config.pins.switch_gpio) {
        error!("ISR service init failed: {} — continuing without edge wakeups", e);
    }
    hw_timer::start_timers(config.sample_interval_ms, config.status_interval_secs);

    // ── 4. Wire the core ──────────────────────────────────────
    let mut hw = HardwareAdapter::new(Controller::new(&config));
    let mut sink = LogEventSink;
    let mut service = ControllerService::new(&config);

    info!("entering control loop ({} Hz poll)", 1000 / config.sample_interval_ms);

    // ── 5. Event loop ─────────────────────────────────────────
    loop {
        drain_events(|event| match event {
            Event::ButtonEdge | Event::InputTick => {
                service.poll(hw_timer::now_ms(), &mut hw, &mut sink);
            }
            Event::StatusTick => {
                let s = service.snapshot();
                info!(
                    "status: paddle {:.1}% (raw {}), button {}",
                    s.paddle_position_percent,
                    s.paddle_raw,
                    if s.button_pressed { "down" } else { "up" }
                );
            }
        });

        // Idle until the next tick; timers and the switch ISR refill
        // the queue.
        esp_idf_svc::hal::delay::FreeRtos::delay_ms(1);
    }
}
