//! Command-line command handlers for puasar.
//!
//! One-shot and alternate-mode entry points: `status` prints a single
//! evaluation, `simulate` runs the widget loop against accelerated time,
//! `help` renders usage. The default widget run lives in [`crate::puasar`].

pub mod help;
pub mod simulate;
pub mod status;
