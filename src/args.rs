//! Command-line argument parsing and processing.
//!
//! Supports the default widget run, the `status` and `simulate` subcommands,
//! and the standard help/version/debug flags, gracefully routing unknown
//! arguments to the help screen.

use crate::constants::DEFAULT_SIMULATION_MULTIPLIER;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the normal widget loop with these settings.
    Run { debug_enabled: bool },

    /// One-shot status panel and exit.
    StatusCommand { debug_enabled: bool },

    /// Run the loop against accelerated simulated time.
    SimulateCommand {
        debug_enabled: bool,
        start_time: String,
        end_time: String,
        multiplier: f64,
    },

    /// Display help information and exit.
    ShowHelp,
    /// Display version information and exit.
    ShowVersion,
    /// Show help due to unknown arguments and exit.
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over arguments, excluding the program name
    ///   (typically `std::env::args().skip(1)`)
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut subcommand: Option<String> = None;
        let mut positional: Vec<String> = Vec::new();

        for arg in args {
            match arg.as_ref() {
                "--debug" | "-d" => debug_enabled = true,
                "--help" | "-h" => {
                    return ParsedArgs {
                        action: CliAction::ShowHelp,
                    };
                }
                "--version" | "-V" => {
                    return ParsedArgs {
                        action: CliAction::ShowVersion,
                    };
                }
                other if other.starts_with('-') => {
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
                other => {
                    if subcommand.is_none() {
                        subcommand = Some(other.to_string());
                    } else {
                        positional.push(other.to_string());
                    }
                }
            }
        }

        let action = match subcommand.as_deref() {
            None => CliAction::Run { debug_enabled },
            Some("status") => {
                if positional.is_empty() {
                    CliAction::StatusCommand { debug_enabled }
                } else {
                    CliAction::ShowHelpDueToError
                }
            }
            Some("simulate") => parse_simulate_args(debug_enabled, &positional),
            Some(_) => CliAction::ShowHelpDueToError,
        };

        ParsedArgs { action }
    }
}

/// Parse `simulate <start> <end> [multiplier]`.
///
/// Start and end are `"YYYY-MM-DD HH:MM:SS"` strings, validated later when
/// the simulated time source is built. The multiplier defaults to one
/// simulated minute per real second.
fn parse_simulate_args(debug_enabled: bool, positional: &[String]) -> CliAction {
    let (start_time, end_time, multiplier) = match positional {
        [start, end] => (start.clone(), end.clone(), DEFAULT_SIMULATION_MULTIPLIER),
        [start, end, multiplier] => match multiplier.parse::<f64>() {
            Ok(multiplier) if multiplier > 0.0 => (start.clone(), end.clone(), multiplier),
            _ => return CliAction::ShowHelpDueToError,
        },
        _ => return CliAction::ShowHelpDueToError,
    };

    CliAction::SimulateCommand {
        debug_enabled,
        start_time,
        end_time,
        multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_runs_widget() {
        let parsed = ParsedArgs::parse(Vec::<String>::new());
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: false
            }
        );
    }

    #[test]
    fn test_debug_flag() {
        let parsed = ParsedArgs::parse(["--debug"]);
        assert_eq!(parsed.action, CliAction::Run { debug_enabled: true });
    }

    #[test]
    fn test_help_takes_precedence() {
        let parsed = ParsedArgs::parse(["--debug", "--help", "status"]);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_version_flag() {
        let parsed = ParsedArgs::parse(["-V"]);
        assert_eq!(parsed.action, CliAction::ShowVersion);
    }

    #[test]
    fn test_status_subcommand() {
        let parsed = ParsedArgs::parse(["status", "-d"]);
        assert_eq!(
            parsed.action,
            CliAction::StatusCommand {
                debug_enabled: true
            }
        );
    }

    #[test]
    fn test_simulate_with_default_multiplier() {
        let parsed = ParsedArgs::parse(["simulate", "2026-03-05 03:00:00", "2026-03-05 19:00:00"]);
        assert_eq!(
            parsed.action,
            CliAction::SimulateCommand {
                debug_enabled: false,
                start_time: "2026-03-05 03:00:00".to_string(),
                end_time: "2026-03-05 19:00:00".to_string(),
                multiplier: DEFAULT_SIMULATION_MULTIPLIER,
            }
        );
    }

    #[test]
    fn test_simulate_with_explicit_multiplier() {
        let parsed = ParsedArgs::parse([
            "simulate",
            "2026-03-05 03:00:00",
            "2026-03-05 19:00:00",
            "600",
        ]);
        match parsed.action {
            CliAction::SimulateCommand { multiplier, .. } => assert_eq!(multiplier, 600.0),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_simulate_missing_end_is_an_error() {
        let parsed = ParsedArgs::parse(["simulate", "2026-03-05 03:00:00"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_simulate_rejects_negative_multiplier() {
        let parsed = ParsedArgs::parse([
            "simulate",
            "2026-03-05 03:00:00",
            "2026-03-05 19:00:00",
            "-60",
        ]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_unknown_flag_shows_help() {
        let parsed = ParsedArgs::parse(["--frobnicate"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_unknown_subcommand_shows_help() {
        let parsed = ParsedArgs::parse(["dance"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }
}
