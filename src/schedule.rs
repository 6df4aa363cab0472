//! Immutable daily fasting schedule for a single fixed location.
//!
//! The schedule is a plain configuration value: three `HH:MM` boundaries and
//! a city label, constructed once at startup and never mutated. Phase logic
//! lives in [`crate::phase`]; this module only carries the data.

use crate::config::Config;
use crate::constants::{DEFAULT_CITY, DEFAULT_IMSAK, DEFAULT_MAGHRIB, DEFAULT_SAHUR};

/// One day's fasting boundaries, minute resolution, 24-hour local time.
///
/// Invariant: `imsak` precedes `maghrib` within the same day. The `sahur`
/// marker is informational only and never consulted by phase logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// Location label shown in the widget panel.
    pub city: String,
    /// Dawn boundary (`HH:MM`), start of the fast.
    pub imsak: String,
    /// Secondary marker (`HH:MM`), displayed alongside the schedule.
    pub sahur: String,
    /// Sunset boundary (`HH:MM`), end of the fast.
    pub maghrib: String,
}

impl Schedule {
    /// The compiled-in default schedule.
    pub fn surabaya() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            imsak: DEFAULT_IMSAK.to_string(),
            sahur: DEFAULT_SAHUR.to_string(),
            maghrib: DEFAULT_MAGHRIB.to_string(),
        }
    }

    /// Build the schedule from loaded configuration, falling back to the
    /// compiled defaults for any field the config file leaves unset.
    pub fn from_config(config: &Config) -> Self {
        Self {
            city: config.city.clone().unwrap_or_else(|| DEFAULT_CITY.to_string()),
            imsak: config.imsak.clone().unwrap_or_else(|| DEFAULT_IMSAK.to_string()),
            sahur: config.sahur.clone().unwrap_or_else(|| DEFAULT_SAHUR.to_string()),
            maghrib: config
                .maghrib
                .clone()
                .unwrap_or_else(|| DEFAULT_MAGHRIB.to_string()),
        }
    }
}
