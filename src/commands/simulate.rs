//! Simulate command: run the widget loop against accelerated time.
//!
//! Installs a linear [`SimulatedTimeSource`] spanning the requested window,
//! then runs the normal loop. Every log line carries the simulated
//! timestamp, so a whole fasting day's transitions can be observed in a
//! few seconds of real time.

use anyhow::{Result, anyhow};
use std::sync::Arc;

use crate::puasar::Puasar;
use crate::time_source::{self, SimulatedTimeSource};

/// Handle the simulate command.
pub fn handle_simulate_command(
    debug_enabled: bool,
    start_time: &str,
    end_time: &str,
    multiplier: f64,
) -> Result<()> {
    let start = time_source::parse_datetime(start_time).map_err(|e| anyhow!(e))?;
    let end = time_source::parse_datetime(end_time).map_err(|e| anyhow!(e))?;
    if end <= start {
        return Err(anyhow!("Simulation end must be after start"));
    }

    time_source::init_time_source(Arc::new(SimulatedTimeSource::new(start, end, multiplier)));

    log_version!();
    log_block_start!(
        "Simulating {} → {} at {multiplier}x",
        start.format("%Y-%m-%d %H:%M:%S"),
        end.format("%Y-%m-%d %H:%M:%S")
    );

    Puasar::new(debug_enabled).without_headers().run()
}
