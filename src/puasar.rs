//! Application coordinator managing the complete lifecycle of puasar.
//!
//! Resource acquisition and the main loop live here: terminal guard,
//! configuration loading, signal handler setup, then the one-second tick
//! loop. Each tick samples the time source, pushes the fresh instant
//! through the pure phase engine, and renders whatever changed. The loop
//! owns "now"; the engine never caches it.

use anyhow::{Context, Result};
use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{EXIT_FAILURE, TICK_INTERVAL_SECS};
use crate::display;
use crate::phase::{self, Snapshot};
use crate::schedule::Schedule;
use crate::signals::{SignalMessage, setup_signal_handler};
use crate::time_source;
use crate::utils::TerminalGuard;

/// Builder for configuring and running the puasar widget loop.
///
/// # Examples
///
/// ```no_run
/// use puasar::Puasar;
///
/// # fn main() -> anyhow::Result<()> {
/// // Normal startup
/// Puasar::new(false).run()?;
///
/// // Simulation mode (header suppressed, timestamps take over)
/// Puasar::new(true).without_headers().run()?;
/// # Ok(())
/// # }
/// ```
pub struct Puasar {
    debug_enabled: bool,
    show_headers: bool,
}

impl Puasar {
    /// Create a new runner with defaults matching a normal run.
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            show_headers: true,
        }
    }

    /// Skip the version header (simulation mode prints its own).
    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }

    /// Execute the widget loop until shutdown or simulation end.
    pub fn run(self) -> Result<()> {
        if self.show_headers {
            log_version!();
            if self.debug_enabled {
                log_pipe!();
                log_debug!("Debug mode enabled");
            }
        }

        // Cursor hiding; gracefully inert when stdout is not a terminal.
        let _term = TerminalGuard::new().context("failed to initialize terminal features")?;

        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                log_error_exit!("Configuration failed");
                eprintln!("{e:?}");
                std::process::exit(EXIT_FAILURE);
            }
        };
        config.log_config();

        let schedule = Schedule::from_config(&config);
        let signal_state = setup_signal_handler(self.debug_enabled)?;
        let tick = Duration::from_secs(TICK_INTERVAL_SECS);

        // Initial render: the full panel, then the loop only logs deltas.
        let now = time_source::now();
        let mut previous: Snapshot = phase::evaluate(now, &schedule);
        display::log_panel(now, &schedule, &previous);

        while signal_state.running.load(Ordering::SeqCst) {
            if time_source::simulation_ended() {
                log_block_start!("Simulation ended");
                break;
            }

            time_source::sleep(tick);

            // Drain pending signals before rendering this tick.
            let mut refresh_requested = false;
            while let Ok(message) = signal_state.signal_receiver.try_recv() {
                match message {
                    SignalMessage::Refresh => refresh_requested = true,
                    SignalMessage::Shutdown => {
                        signal_state.running.store(false, Ordering::SeqCst);
                    }
                }
            }
            if !signal_state.running.load(Ordering::SeqCst) {
                break;
            }

            let now = time_source::now();
            let snapshot = phase::evaluate(now, &schedule);

            if refresh_requested {
                display::log_panel(now, &schedule, &snapshot);
            } else if snapshot.phase != previous.phase {
                display::log_phase_change(now, &snapshot);
            } else if snapshot.countdown != previous.countdown {
                // Countdown text has minute resolution, so this fires once
                // a minute rather than every tick.
                display::log_countdown(&snapshot);
            }

            previous = snapshot;
        }

        log_block_start!("Shutting down puasar...");
        log_end!();

        Ok(())
    }
}
