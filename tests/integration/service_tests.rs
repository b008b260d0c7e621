//! Integration tests for the polling service over mock ports.
//!
//! These run on the host and verify the full poll pass — debounce, motion
//! events, LED feedback, fault handling — without any real hardware.

use crate::mock_hw::{MockHardware, OutputCall, RecordingSink};

use pronguino::app::events::InputEvent;
use pronguino::app::service::ControllerService;
use pronguino::config::ControllerConfig;
use pronguino::error::InputError;

fn make_service() -> (ControllerService, MockHardware, RecordingSink) {
    // Deterministic tunables regardless of board defaults.
    let mut config = ControllerConfig::default();
    config.debounce_ms = 20;
    config.move_threshold_percent = 1.0;
    config.led_button_feedback = true;
    config.led_feedback_brightness = 100;
    (
        ControllerService::new(&config),
        MockHardware::new(),
        RecordingSink::new(),
    )
}

// ── Button debounce + LED feedback ───────────────────────────

#[test]
fn held_press_commits_and_lights_led() {
    let (mut service, mut hw, mut sink) = make_service();

    hw.set_button(true);
    service.poll(0, &mut hw, &mut sink);
    assert!(
        sink.button_events().is_empty(),
        "press must not commit before the debounce window"
    );

    let snapshot = service.poll(25, &mut hw, &mut sink);
    assert_eq!(sink.button_events(), vec![InputEvent::ButtonPressed]);
    assert!(snapshot.button_pressed);
    assert_eq!(
        hw.last_call(),
        Some(&OutputCall::SetBrightness { percent: 100 }),
        "feedback must light the LED on the committed press"
    );
    assert!(hw.led_on());
}

#[test]
fn glitch_shorter_than_window_is_ignored() {
    let (mut service, mut hw, mut sink) = make_service();

    hw.set_button(true);
    service.poll(0, &mut hw, &mut sink);
    hw.set_button(false);
    service.poll(10, &mut hw, &mut sink);
    service.poll(40, &mut hw, &mut sink);

    assert!(sink.button_events().is_empty());
    assert!(hw.calls.is_empty(), "no LED writes for a filtered glitch");
    assert!(!service.snapshot().button_pressed);
}

#[test]
fn release_turns_feedback_off() {
    let (mut service, mut hw, mut sink) = make_service();

    hw.set_button(true);
    service.poll(0, &mut hw, &mut sink);
    service.poll(25, &mut hw, &mut sink);
    assert!(hw.led_on());

    hw.set_button(false);
    service.poll(30, &mut hw, &mut sink);
    service.poll(55, &mut hw, &mut sink);

    assert_eq!(
        sink.button_events(),
        vec![InputEvent::ButtonPressed, InputEvent::ButtonReleased]
    );
    assert!(!hw.led_on(), "release must turn the feedback LED off");
}

#[test]
fn feedback_disabled_never_touches_led() {
    let mut config = ControllerConfig::default();
    config.debounce_ms = 20;
    config.led_button_feedback = false;
    let mut service = ControllerService::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    hw.set_button(true);
    service.poll(0, &mut hw, &mut sink);
    service.poll(25, &mut hw, &mut sink);

    assert_eq!(sink.button_events(), vec![InputEvent::ButtonPressed]);
    assert!(hw.calls.is_empty());
}

// ── Paddle motion events ─────────────────────────────────────

#[test]
fn paddle_motion_beyond_threshold_emits() {
    let (mut service, mut hw, mut sink) = make_service();

    hw.set_paddle(410, 10.0);
    service.poll(0, &mut hw, &mut sink);
    assert_eq!(
        sink.events,
        vec![InputEvent::PaddleMoved { position_percent: 10.0 }],
        "first sample reports the initial position"
    );

    // Sub-threshold wiggle stays silent.
    hw.set_paddle(420, 10.3);
    service.poll(10, &mut hw, &mut sink);
    assert_eq!(sink.events.len(), 1);

    hw.set_paddle(500, 12.2);
    service.poll(20, &mut hw, &mut sink);
    assert_eq!(
        sink.events.last(),
        Some(&InputEvent::PaddleMoved { position_percent: 12.2 })
    );
}

// ── Fault handling ───────────────────────────────────────────

#[test]
fn paddle_fault_retains_last_good_snapshot() {
    let (mut service, mut hw, mut sink) = make_service();

    hw.set_paddle(2048, 50.0);
    service.poll(0, &mut hw, &mut sink);
    let good = service.snapshot();
    assert_eq!(good.paddle_raw, 2048);

    hw.fail_paddle(InputError::AdcReadFailed);
    let snapshot = service.poll(10, &mut hw, &mut sink);

    assert_eq!(snapshot.paddle_raw, 2048, "fault must not clobber the snapshot");
    assert!((snapshot.paddle_position_percent - 50.0).abs() < f32::EPSILON);
    assert!(sink
        .events
        .contains(&InputEvent::InputFault(InputError::AdcReadFailed)));
}

#[test]
fn button_fault_is_reported_but_nonfatal() {
    let (mut service, mut hw, mut sink) = make_service();

    hw.fail_button(InputError::GpioReadFailed);
    service.poll(0, &mut hw, &mut sink);
    assert!(sink
        .events
        .contains(&InputEvent::InputFault(InputError::GpioReadFailed)));

    // Recovery: the next good samples behave normally.
    hw.set_button(true);
    service.poll(10, &mut hw, &mut sink);
    service.poll(35, &mut hw, &mut sink);
    assert_eq!(sink.button_events(), vec![InputEvent::ButtonPressed]);
}

// ── Output port surface ──────────────────────────────────────

#[test]
fn all_off_is_recorded_as_led_off() {
    use pronguino::app::ports::OutputPort;

    let mut hw = MockHardware::new();
    hw.set_led(true).unwrap();
    assert!(hw.led_on());

    hw.all_off();
    assert!(!hw.led_on());
}
