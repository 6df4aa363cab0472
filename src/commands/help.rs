//! Help display for puasar.

/// Display the help screen in the visual log style.
pub fn display_help() {
    log_version!();
    log_block_start!("Usage: puasar [OPTIONS] [COMMAND]");
    log_block_start!("Commands:");
    log_indented!("status                       Print the current fasting status once and exit");
    log_indented!("simulate <start> <end> [x]   Run against simulated time from <start> to <end>");
    log_indented!("                             at acceleration x (default 60, one minute per second);");
    log_indented!("                             datetimes as \"YYYY-MM-DD HH:MM:SS\"");
    log_block_start!("Options:");
    log_indented!("-d, --debug                  Enable detailed debug output");
    log_indented!("-h, --help                   Display this help message");
    log_indented!("-V, --version                Display version information");
    log_block_start!("Signals:");
    log_indented!("SIGUSR1                      Re-render the full widget panel");
    log_indented!("SIGINT/SIGTERM               Graceful shutdown");
    log_end!();
}

/// Display version information.
pub fn display_version() {
    log_version!();
    log_block_start!("Ramadan fasting-status widget for the terminal");
    log_decorated!("Fixed daily schedule, phase countdown, Gregorian + Hijri dates");
    log_end!();
}
