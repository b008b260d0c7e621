//! Hardware timer module using ESP-IDF's esp_timer API.
//!
//! Creates the periodic tick timers that push events into the lock-free
//! SPSC queue, and provides the monotonic `now_ms()` clock the debounce
//! logic runs on.
//!
//! Timer callbacks execute in the ESP timer task context (not ISR), so
//! they can safely call push_event() which uses AtomicU8.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use crate::events::{push_event, Event};

#[cfg(target_os = "espidf")]
static mut INPUT_TIMER: esp_timer_handle_t = core::ptr::null_mut();
#[cfg(target_os = "espidf")]
static mut STATUS_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn input_tick_cb(_arg: *mut core::ffi::c_void) {
    push_event(Event::InputTick);
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn status_tick_cb(_arg: *mut core::ffi::c_void) {
    push_event(Event::StatusTick);
}

/// Start the hardware tick timers.
///
/// - input poll timer at `sample_interval_ms`
/// - status report timer at `status_interval_secs`
#[cfg(target_os = "espidf")]
pub fn start_timers(sample_interval_ms: u32, status_interval_secs: u32) {
    // SAFETY: INPUT_TIMER and STATUS_TIMER are written here once at boot
    // from the single main-task context before any timer callbacks fire.
    // The callbacks themselves only call push_event(), which is ISR-safe.
    unsafe {
        let input_args = esp_timer_create_args_t {
            callback: Some(input_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"input\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&input_args, &raw mut INPUT_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: input timer create failed (rc={}) — no input ticks", ret);
            return;
        }
        let ret = esp_timer_start_periodic(INPUT_TIMER, u64::from(sample_interval_ms) * 1_000);
        if ret != ESP_OK {
            log::error!("hw_timer: input timer start failed (rc={})", ret);
            return;
        }

        let status_args = esp_timer_create_args_t {
            callback: Some(status_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"status\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&status_args, &raw mut STATUS_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: status timer create failed (rc={}) — no status ticks", ret);
            return;
        }
        let ret =
            esp_timer_start_periodic(STATUS_TIMER, u64::from(status_interval_secs) * 1_000_000);
        if ret != ESP_OK {
            log::error!("hw_timer: status timer start failed (rc={})", ret);
        }
    }

    log::info!(
        "hw_timer: ticks started (input {} ms, status {} s)",
        sample_interval_ms,
        status_interval_secs
    );
}

#[cfg(not(target_os = "espidf"))]
pub fn start_timers(_sample_interval_ms: u32, _status_interval_secs: u32) {
    log::info!("hw_timer(sim): tick timers skipped");
}

/// Milliseconds since boot, monotonic, truncated to u32.
///
/// Wraps after ~49 days; all consumers compare with `wrapping_sub`.
#[cfg(target_os = "espidf")]
pub fn now_ms() -> u32 {
    // SAFETY: esp_timer_get_time is a monotonic counter read.
    (unsafe { esp_timer_get_time() } / 1_000) as u32
}

#[cfg(not(target_os = "espidf"))]
pub fn now_ms() -> u32 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_millis() as u32
}
