//! Main application entry point and CLI dispatch.
//!
//! Parses the command line and routes to the widget loop (default), the
//! one-shot `status` command, or the time-accelerated `simulate` command.
//! Everything else lives in the library so it stays testable.

use anyhow::Result;

use puasar::args::{CliAction, ParsedArgs};
use puasar::commands;
use puasar::constants::EXIT_FAILURE;
use puasar::Puasar;

fn main() -> Result<()> {
    let parsed = ParsedArgs::parse(std::env::args().skip(1));

    match parsed.action {
        CliAction::Run { debug_enabled } => Puasar::new(debug_enabled).run(),
        CliAction::StatusCommand { debug_enabled } => {
            commands::status::handle_status_command(debug_enabled)
        }
        CliAction::SimulateCommand {
            debug_enabled,
            start_time,
            end_time,
            multiplier,
        } => commands::simulate::handle_simulate_command(
            debug_enabled,
            &start_time,
            &end_time,
            multiplier,
        ),
        CliAction::ShowHelp => {
            commands::help::display_help();
            Ok(())
        }
        CliAction::ShowVersion => {
            commands::help::display_version();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            commands::help::display_help();
            std::process::exit(EXIT_FAILURE);
        }
    }
}
