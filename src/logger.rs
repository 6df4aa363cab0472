//! Structured logging with visual box-drawing formatting.
//!
//! puasar's output is a continuous vertical log framed with Unicode pipe
//! characters: `log_version!` opens the frame, `log_block_start!` begins a new
//! conceptual block (phase changes, configuration, shutdown), `log_decorated!`
//! and `log_indented!` fill blocks in, and `log_end!` closes the frame.
//!
//! Logging can be disabled at runtime for quiet operation (one-shot commands
//! that print their own output). In simulation mode every line is prefixed
//! with the simulated wall-clock time so accelerated runs stay readable.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Main logging interface. All actual output goes through the macros below;
/// this struct only carries the runtime switches they consult.
pub struct Log;

impl Log {
    /// Enable or disable logging temporarily.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Timestamp prefix for simulation mode: `[HH:MM:SS] ` of the simulated
    /// local time. Empty outside simulation so normal runs stay clean.
    pub fn get_timestamp_prefix() -> String {
        if crate::time_source::is_initialized() && crate::time_source::is_simulated() {
            format!("[{}] ", crate::time_source::now().format("%H:%M:%S"))
        } else {
            String::new()
        }
    }
}

/// Write a formatted line to stdout, flushing immediately so the frame stays
/// intact when the process is killed mid-line.
pub fn write_output(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

// # Logging macros

/// Log the application version header: `┏ puasar vX.Y.Z ━━╸`.
#[macro_export]
macro_rules! log_version {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("{prefix}┏ puasar v{version} ━━╸\n"));
        }
    }};
}

/// Log a block start message, initiating a new conceptual block of information.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("{prefix}┃\n{prefix}┣ {message}\n"));
        }
    }};
}

/// Log a decorated message, typically as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("{prefix}┣ {message}\n"));
        }
    }};
}

/// Log an indented message for sub-items or details within a block.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("{prefix}┃   {message}\n"));
        }
    }};
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            $crate::logger::write_output(&format!("{prefix}┃\n"));
        }
    }};
}

/// Log the final termination marker closing the frame.
#[macro_export]
macro_rules! log_end {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            $crate::logger::write_output(&format!("{prefix}╹\n"));
        }
    }};
}

/// Log a warning message with pipe prefix and yellow-colored level tag.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!(
                "{prefix}┣[\x1b[33mWARNING\x1b[0m] {message}\n"
            ));
        }
    }};
}

/// Log an error message with pipe prefix and red-colored level tag.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!(
                "{prefix}┣[\x1b[31mERROR\x1b[0m] {message}\n"
            ));
        }
    }};
}

/// Log a terminal error that ends the frame: pipe, then `┗[ERROR] message`.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!(
                "{prefix}┃\n{prefix}┗[\x1b[31mERROR\x1b[0m] {message}\n"
            ));
        }
    }};
}

/// Log an informational message with pipe prefix and green-colored level tag.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!(
                "{prefix}┣[\x1b[32mINFO\x1b[0m] {message}\n"
            ));
        }
    }};
}

/// Log a debug/operational message with pipe prefix and green-colored level tag.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!(
                "{prefix}┣[\x1b[32mDEBUG\x1b[0m] {message}\n"
            ));
        }
    }};
}
