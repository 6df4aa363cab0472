//! # Puasar Library
//!
//! Internal library for the puasar binary: a terminal widget showing the
//! fasting-day status for a single fixed location.
//!
//! ## Architecture
//!
//! - **Entry Point**: `Puasar` struct runs the one-second widget loop
//! - **Functional Core**: `phase` derives phase, countdown target, and the
//!   formatted countdown from an instant and the immutable `schedule`
//! - **Presentation**: `calendar` (Gregorian + Hijri labels) and `display`
//!   (panel rendering) consume the core's output
//! - **Configuration**: `config` for TOML-based schedule overrides
//! - **Infrastructure**: signal handling, time source abstraction, logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod phase;
pub mod schedule;
pub mod signals;
pub mod time_source;
pub mod utils;

mod puasar;

// Re-export for binary
pub use puasar::Puasar;
