//! Pass-through tests for the `Controller` aggregate against the
//! simulated peripherals.
//!
//! The sim hooks are process-global statics, so every test that drives
//! them serialises on `HW_LOCK`.

use std::sync::Mutex;

use pronguino::controller::Controller;
use pronguino::drivers::potentiometer::sim_set_pot_adc;
use pronguino::drivers::switch::{sim_set_switch_pressed, ButtonState};

static HW_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn pot_reading_passes_through_unchanged() {
    let _guard = HW_LOCK.lock().unwrap();
    let controller = Controller::with_pins(5, 16, 11);

    sim_set_pot_adc(512);
    assert_eq!(controller.read_value(), Ok(512));
    // Idempotent: no intervening hardware change, same value.
    assert_eq!(controller.read_value(), Ok(512));

    sim_set_pot_adc(0);
    assert_eq!(controller.read_value(), Ok(0));

    sim_set_pot_adc(4095);
    assert_eq!(controller.read_value(), Ok(4095));
}

#[test]
fn switch_state_passes_through_unchanged() {
    let _guard = HW_LOCK.lock().unwrap();
    let controller = Controller::with_pins(5, 16, 11);

    sim_set_switch_pressed(true);
    assert_eq!(controller.read_button_state(), Ok(ButtonState::Pressed));

    sim_set_switch_pressed(false);
    assert_eq!(controller.read_button_state(), Ok(ButtonState::Released));
}

#[test]
fn led_write_sequence_leaves_final_state() {
    let mut controller = Controller::with_pins(5, 16, 11);

    controller.write_led_state(true).unwrap();
    assert!(controller.led_is_on());

    controller.write_led_state(false).unwrap();
    assert!(!controller.led_is_on(), "final LED state must be off");
}

#[test]
fn paddle_read_reports_calibrated_position() {
    let _guard = HW_LOCK.lock().unwrap();
    let mut controller = Controller::with_pins(5, 16, 11);

    sim_set_pot_adc(4095);
    // Fill the smoothing window so the average settles.
    let mut last = None;
    for _ in 0..16 {
        last = Some(controller.read_paddle().unwrap());
    }
    let reading = last.unwrap();
    assert_eq!(reading.raw, 4095);
    assert!((reading.position_percent - 100.0).abs() < 0.01);
}
