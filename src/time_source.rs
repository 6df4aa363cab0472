//! Time source abstraction for real and simulated time.
//!
//! The main loop never calls `Local::now()` directly; it goes through the
//! global time source registered here. Normal runs use [`RealTimeSource`];
//! `puasar simulate` installs a [`SimulatedTimeSource`] that accelerates
//! time linearly, which makes it practical to watch a whole fasting day's
//! phase transitions in seconds.

use chrono::{DateTime, Duration as ChronoDuration, Local, TimeZone};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration as StdDuration;

/// Global time source instance, defaults to RealTimeSource.
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting time operations.
pub trait TimeSource: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Local>;

    /// Sleep for the specified duration (or simulate it).
    fn sleep(&self, duration: StdDuration);

    /// Check if this is a simulated time source.
    fn is_simulated(&self) -> bool;

    /// Check if simulation has ended (always false for real time).
    fn is_ended(&self) -> bool {
        false
    }
}

/// Real-time implementation that uses actual system time.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// Simulated time source: time flows from `start_time` toward `end_time`
/// at a constant multiplier (60.0 = one simulated minute per real second).
///
/// Simulated time only advances when the main loop sleeps, so every tick
/// observes a distinct, strictly increasing instant.
pub struct SimulatedTimeSource {
    start_time: DateTime<Local>,
    end_time: DateTime<Local>,
    time_multiplier: f64,
    /// Total simulated time slept so far.
    accumulated_sleep: Mutex<StdDuration>,
}

impl SimulatedTimeSource {
    /// Create a new simulated time source. Non-positive multipliers fall
    /// back to one simulated hour per real second.
    pub fn new(start_time: DateTime<Local>, end_time: DateTime<Local>, multiplier: f64) -> Self {
        Self {
            start_time,
            end_time,
            time_multiplier: if multiplier <= 0.0 { 3600.0 } else { multiplier },
            accumulated_sleep: Mutex::new(StdDuration::ZERO),
        }
    }

    fn current_time(&self) -> DateTime<Local> {
        let accumulated = self.accumulated_sleep.lock().unwrap();
        let elapsed = ChronoDuration::milliseconds(accumulated.as_millis() as i64);
        drop(accumulated);

        let simulated = self.start_time + elapsed;
        simulated.min(self.end_time)
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.current_time()
    }

    fn sleep(&self, duration: StdDuration) {
        // Advance simulated time by the full requested duration, capped at
        // the end time, then sleep the scaled-down real duration.
        let remaining = self.end_time - self.current_time();
        let remaining = StdDuration::from_millis(remaining.num_milliseconds().max(0) as u64);
        let simulated = duration.min(remaining);

        if simulated > StdDuration::ZERO {
            let real_secs = simulated.as_secs_f64() / self.time_multiplier;
            if real_secs > 0.0 {
                std::thread::sleep(StdDuration::from_secs_f64(real_secs));
            }
            let mut accumulated = self.accumulated_sleep.lock().unwrap();
            *accumulated += simulated;
        }
    }

    fn is_simulated(&self) -> bool {
        true
    }

    fn is_ended(&self) -> bool {
        self.current_time() >= self.end_time
    }
}

/// Initialize the global time source (call once at startup).
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Check if the time source has been initialized.
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

/// Get the current time from the global time source.
pub fn now() -> DateTime<Local> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Sleep for the specified duration using the global time source.
pub fn sleep(duration: StdDuration) {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .sleep(duration)
}

/// Check if we're running in simulation mode.
pub fn is_simulated() -> bool {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .is_simulated()
}

/// Check if simulation has reached its end time (always false for real time).
pub fn simulation_ended() -> bool {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .is_ended()
}

/// Parse a datetime string in the format "YYYY-MM-DD HH:MM:SS".
pub fn parse_datetime(s: &str) -> Result<DateTime<Local>, String> {
    use chrono::NaiveDateTime;

    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))
        .and_then(|naive| {
            Local
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| "Ambiguous or invalid local time".to_string())
        })
}
