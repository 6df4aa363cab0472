//! Application-wide constants and compiled-in schedule defaults.

/// Default location label shown in the widget panel.
pub const DEFAULT_CITY: &str = "Surabaya, Indonesia";

/// Default dawn boundary (imsak), start of the fast.
pub const DEFAULT_IMSAK: &str = "04:04";

/// Default secondary marker (sahur/subuh), informational only.
pub const DEFAULT_SAHUR: &str = "04:14";

/// Default sunset boundary (maghrib), end of the fast.
pub const DEFAULT_MAGHRIB: &str = "17:52";

/// Main loop tick interval in seconds.
pub const TICK_INTERVAL_SECS: u64 = 1;

/// Default time acceleration for `puasar simulate` when no multiplier is
/// given (one simulated minute per real second).
pub const DEFAULT_SIMULATION_MULTIPLIER: f64 = 60.0;

/// Process exit code for fatal startup failures.
pub const EXIT_FAILURE: i32 = 1;
