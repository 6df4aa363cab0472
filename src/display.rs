//! Widget panel rendering.
//!
//! Two render paths: the running loop writes into the box-drawing log frame
//! (full panel at startup and on refresh, an announcement block on phase
//! changes, a single decorated line when the countdown text changes), and
//! the one-shot `status` command prints a plain unframed panel.

use chrono::{DateTime, Local};

use crate::calendar;
use crate::phase::Snapshot;
use crate::schedule::Schedule;

/// Log the full widget panel into the frame.
pub fn log_panel(now: DateTime<Local>, schedule: &Schedule, snapshot: &Snapshot) {
    log_block_start!("Puasa — {}", schedule.city);
    log_indented!("{}", calendar::date_label(now));
    log_pipe!();
    log_indented!("Imsak              {}", snapshot.imsak_label);
    log_indented!("Sahur (Subuh)      {}", snapshot.sahur_label);
    log_indented!("Berbuka (Maghrib)  {}", snapshot.maghrib_label);
    log_pipe!();
    log_indented!("{} {}", snapshot.phase.symbol(), snapshot.title);
    log_indented!("{}", snapshot.countdown);
}

/// Announce a phase transition.
pub fn log_phase_change(now: DateTime<Local>, snapshot: &Snapshot) {
    log_block_start!(
        "{} {} ({})",
        snapshot.phase.symbol(),
        snapshot.title,
        snapshot.phase.display_name()
    );
    log_indented!("{}", calendar::date_label(now));
    log_indented!("{}", snapshot.countdown);
}

/// Log the countdown line, part of the current block.
pub fn log_countdown(snapshot: &Snapshot) {
    log_decorated!("{}", snapshot.countdown);
}

/// Print the plain panel for the one-shot `status` command.
pub fn print_status(now: DateTime<Local>, schedule: &Schedule, snapshot: &Snapshot) {
    println!("Puasa — {}", schedule.city);
    println!("{}", calendar::date_label(now));
    println!();
    println!("  Imsak              {}", snapshot.imsak_label);
    println!("  Sahur (Subuh)      {}", snapshot.sahur_label);
    println!("  Berbuka (Maghrib)  {}", snapshot.maghrib_label);
    println!();
    println!("  {} {}", snapshot.phase.symbol(), snapshot.title);
    println!("  {}", snapshot.countdown);
}
