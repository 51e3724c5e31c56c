use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::Serialize;

/// Reported state of the device LED. Serialized as `"ON"` / `"OFF"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    fn from_bool(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

/// Shared application state injected into every request handler via Axum's
/// `State` extractor. Built once in `main` and shared behind an `Arc`.
///
/// Both values are plain atomics: every mutation is a single atomic
/// operation, so concurrent increments are never lost and readers never
/// observe a partial write.
#[derive(Debug, Default)]
pub struct AppState {
    led_on: AtomicBool,
    button_count: AtomicU64,
}

impl AppState {
    /// LED starts OFF and the counter at zero on every process start.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn led(&self) -> LedState {
        LedState::from_bool(self.led_on.load(Ordering::SeqCst))
    }

    /// Sets the LED and returns the state that was written.
    pub fn set_led(&self, state: LedState) -> LedState {
        self.led_on.store(state == LedState::On, Ordering::SeqCst);
        state
    }

    pub fn count(&self) -> u64 {
        self.button_count.load(Ordering::SeqCst)
    }

    /// Adds one press and returns the post-increment count.
    pub fn increment(&self) -> u64 {
        self.button_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn reset(&self) -> u64 {
        self.button_count.store(0, Ordering::SeqCst);
        0
    }
}
