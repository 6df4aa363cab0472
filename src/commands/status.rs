//! Status command: one-shot evaluation printed as a plain panel.
//!
//! The functional equivalent of the widget's "Refresh" action: sample a
//! fresh instant, run it through the phase engine, print, exit. Logging is
//! disabled so the panel is the only output (pipeline friendly).

use anyhow::Result;

use crate::config::Config;
use crate::display;
use crate::logger::Log;
use crate::phase;
use crate::schedule::Schedule;
use crate::time_source;

/// Handle the status command.
pub fn handle_status_command(debug_enabled: bool) -> Result<()> {
    if !debug_enabled {
        Log::set_enabled(false);
    }

    let config = Config::load()?;
    let schedule = Schedule::from_config(&config);

    let now = time_source::now();
    let snapshot = phase::evaluate(now, &schedule);
    display::print_status(now, &schedule, &snapshot);

    Ok(())
}
