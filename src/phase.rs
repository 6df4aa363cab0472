//! Pure fasting-phase classification and countdown computation.
//!
//! This is the functional core of puasar. Every function here is a pure,
//! total function of its arguments: the shell samples the clock once per
//! tick and pushes the instant through [`evaluate`]; nothing in this module
//! caches time, blocks, or performs I/O.
//!
//! The day is split by two boundaries from the [`Schedule`]: before imsak,
//! fasting (imsak to maghrib), and after maghrib. Comparisons are strict
//! less-than, so an instant exactly on a boundary belongs to the later
//! phase. The sahur marker has no effect on classification; it is carried
//! through [`Snapshot`] purely as a display label.
//!
//! Failure semantics follow an "always displayable" contract: a boundary
//! literal that does not parse, or that cannot be resolved to a unique
//! local instant on the reference day (DST gap or fold), falls back to the
//! reference instant itself. Nothing here returns an error.

use chrono::{DateTime, Days, Local, TimeZone};

use crate::schedule::Schedule;

/// Classification of an instant relative to the day's fasting boundaries.
/// Three mutually exclusive, collectively exhaustive phases.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum FastPhase {
    /// Before today's imsak: the fast has not started yet.
    BeforeImsak,
    /// Between imsak and maghrib: the fast is in progress.
    Fasting,
    /// After today's maghrib: the fast is broken.
    AfterMaghrib,
}

impl FastPhase {
    /// Display title for this phase (Indonesian, as rendered in the widget).
    pub fn title(&self) -> &'static str {
        match self {
            Self::BeforeImsak => "Belum Mulai Puasa",
            Self::Fasting => "Sedang Berpuasa",
            Self::AfterMaghrib => "Sudah Berbuka",
        }
    }

    /// Suffix appended to the countdown text.
    pub fn countdown_suffix(&self) -> &'static str {
        match self {
            Self::BeforeImsak | Self::AfterMaghrib => "menuju imsak",
            Self::Fasting => "lagi",
        }
    }

    /// Short English name used in log announcements.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BeforeImsak => "before imsak",
            Self::Fasting => "fasting",
            Self::AfterMaghrib => "after maghrib",
        }
    }

    /// Icon for this phase in the panel.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::BeforeImsak => "○",
            Self::Fasting => "●",
            Self::AfterMaghrib => "◑",
        }
    }
}

/// Everything the display shell needs for one tick, derived from a single
/// instant and the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: FastPhase,
    /// Phase display title (same as `phase.title()`, kept alongside so the
    /// shell renders without reaching back into phase logic).
    pub title: &'static str,
    /// Formatted countdown to the next boundary, e.g. `"5j 52m lagi"`.
    pub countdown: String,
    /// Boundary labels normalized to `HH:MM` where parseable.
    pub imsak_label: String,
    pub sahur_label: String,
    pub maghrib_label: String,
}

/// Parse an `HH:MM` boundary literal. `None` for anything malformed.
fn parse_hhmm(time: &str) -> Option<(u32, u32)> {
    let (hour, minute) = time.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Resolve an `HH:MM` boundary onto the calendar day of `reference` (zero
/// seconds, local timezone).
///
/// Fails soft: a malformed literal or a local time that does not resolve
/// uniquely on that day returns `reference` unchanged. Schedule values are
/// internal constants, never user input, so a visibly wrong countdown beats
/// crashing a persistently visible widget.
pub fn boundary_instant(time: &str, reference: DateTime<Local>) -> DateTime<Local> {
    let Some((hour, minute)) = parse_hhmm(time) else {
        return reference;
    };
    reference
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .and_then(|naive| Local.from_local_datetime(&naive).single())
        .unwrap_or(reference)
}

/// Classify `now` against today's boundaries.
///
/// Strict less-than on both comparisons: exactly at imsak is already
/// `Fasting`, exactly at maghrib is already `AfterMaghrib`.
pub fn current_phase(now: DateTime<Local>, schedule: &Schedule) -> FastPhase {
    let imsak = boundary_instant(&schedule.imsak, now);
    let maghrib = boundary_instant(&schedule.maghrib, now);

    if now < imsak {
        FastPhase::BeforeImsak
    } else if now < maghrib {
        FastPhase::Fasting
    } else {
        FastPhase::AfterMaghrib
    }
}

/// The instant the countdown runs toward for the given phase.
///
/// After maghrib the target is tomorrow's imsak; if calendar day-advancement
/// fails the function falls back to `now`, so it stays total.
pub fn countdown_target(
    now: DateTime<Local>,
    schedule: &Schedule,
    phase: FastPhase,
) -> DateTime<Local> {
    match phase {
        FastPhase::BeforeImsak => boundary_instant(&schedule.imsak, now),
        FastPhase::Fasting => boundary_instant(&schedule.maghrib, now),
        FastPhase::AfterMaghrib => boundary_instant(&schedule.imsak, now)
            .checked_add_days(Days::new(1))
            .unwrap_or(now),
    }
}

/// Render the remaining time as `"{hours}j {minutes}m {suffix}"`.
///
/// Remaining time clamps at zero: for a few seconds around a boundary the
/// target may already have passed before the next tick refreshes it, and
/// that must never render a negative component.
pub fn format_countdown(
    now: DateTime<Local>,
    target: DateTime<Local>,
    phase: FastPhase,
) -> String {
    let seconds = (target - now).num_seconds().max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours}j {minutes}m {}", phase.countdown_suffix())
}

/// Normalize a boundary label to zero-padded `HH:MM`, leaving unparseable
/// literals as-is so a config typo stays visible in the panel.
fn boundary_label(time: &str) -> String {
    match parse_hhmm(time) {
        Some((hour, minute)) => format!("{hour:02}:{minute:02}"),
        None => time.to_string(),
    }
}

/// One full evaluation: the call contract the display shell consumes every
/// tick. Phase is recomputed fresh from `now`; there is no stored state.
pub fn evaluate(now: DateTime<Local>, schedule: &Schedule) -> Snapshot {
    let phase = current_phase(now, schedule);
    let target = countdown_target(now, schedule, phase);

    Snapshot {
        phase,
        title: phase.title(),
        countdown: format_countdown(now, target, phase),
        imsak_label: boundary_label(&schedule.imsak),
        sahur_label: boundary_label(&schedule.sahur),
        maghrib_label: boundary_label(&schedule.maghrib),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn surabaya() -> Schedule {
        Schedule::surabaya()
    }

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 5, hour, minute, second).unwrap()
    }

    #[test]
    fn test_boundary_instant_valid_time() {
        let reference = at(12, 30, 45);
        let instant = boundary_instant("04:04", reference);

        assert_eq!(instant.date_naive(), reference.date_naive());
        assert_eq!(instant.hour(), 4);
        assert_eq!(instant.minute(), 4);
        assert_eq!(instant.second(), 0);
    }

    #[test]
    fn test_boundary_instant_malformed_returns_reference() {
        let reference = at(12, 30, 45);

        for bad in ["", "4", "4:4:4", "24:00", "12:60", "ab:cd", "12-30"] {
            assert_eq!(boundary_instant(bad, reference), reference, "input: {bad:?}");
        }
    }

    #[test]
    fn test_phase_before_imsak() {
        assert_eq!(current_phase(at(3, 0, 0), &surabaya()), FastPhase::BeforeImsak);
    }

    #[test]
    fn test_phase_exactly_at_imsak_is_fasting() {
        assert_eq!(current_phase(at(4, 4, 0), &surabaya()), FastPhase::Fasting);
    }

    #[test]
    fn test_phase_midday_is_fasting() {
        assert_eq!(current_phase(at(12, 0, 0), &surabaya()), FastPhase::Fasting);
    }

    #[test]
    fn test_phase_exactly_at_maghrib_is_after() {
        assert_eq!(current_phase(at(17, 52, 0), &surabaya()), FastPhase::AfterMaghrib);
    }

    #[test]
    fn test_phase_evening_is_after_maghrib() {
        assert_eq!(current_phase(at(18, 0, 0), &surabaya()), FastPhase::AfterMaghrib);
    }

    #[test]
    fn test_countdown_before_imsak() {
        let now = at(3, 0, 0);
        let snapshot = evaluate(now, &surabaya());

        assert_eq!(snapshot.phase, FastPhase::BeforeImsak);
        assert_eq!(snapshot.countdown, "1j 4m menuju imsak");
    }

    #[test]
    fn test_countdown_while_fasting() {
        let now = at(12, 0, 0);
        let snapshot = evaluate(now, &surabaya());

        assert_eq!(snapshot.phase, FastPhase::Fasting);
        assert_eq!(snapshot.countdown, "5j 52m lagi");
    }

    #[test]
    fn test_countdown_after_maghrib_targets_next_day() {
        let now = at(18, 0, 0);
        let schedule = surabaya();
        let target = countdown_target(now, &schedule, FastPhase::AfterMaghrib);

        assert_eq!(target.date_naive(), now.date_naive().succ_opt().unwrap());
        assert_eq!(target.hour(), 4);
        assert_eq!(target.minute(), 4);
        assert_eq!(
            format_countdown(now, target, FastPhase::AfterMaghrib),
            "10j 4m menuju imsak"
        );
    }

    #[test]
    fn test_countdown_exactly_at_maghrib_runs_to_next_dawn() {
        // At the maghrib instant itself the phase has already flipped, so the
        // countdown runs against tomorrow's imsak (10h 12m away), never zero.
        let now = at(17, 52, 0);
        let snapshot = evaluate(now, &surabaya());

        assert_eq!(snapshot.phase, FastPhase::AfterMaghrib);
        assert_eq!(snapshot.countdown, "10j 12m menuju imsak");
    }

    #[test]
    fn test_countdown_clamps_to_zero_for_passed_target() {
        let now = at(12, 0, 30);
        let target = at(12, 0, 0);

        assert_eq!(format_countdown(now, target, FastPhase::Fasting), "0j 0m lagi");
    }

    #[test]
    fn test_seconds_are_truncated_not_rounded() {
        // 59 seconds short of a full minute still renders as the lower minute.
        let now = at(12, 0, 1);
        let target = at(13, 0, 0);

        assert_eq!(format_countdown(now, target, FastPhase::Fasting), "0j 59m lagi");
    }

    #[test]
    fn test_phase_transitions_once_each_over_a_day() {
        let schedule = surabaya();
        let mut seen = vec![current_phase(at(0, 0, 0), &schedule)];

        // Minute-resolution sweep over the whole day; phase must only ever
        // step forward, hitting each variant exactly once.
        for minute_of_day in 1..(24 * 60) {
            let phase = current_phase(
                at(minute_of_day / 60, minute_of_day % 60, 0),
                &schedule,
            );
            if phase != *seen.last().unwrap() {
                seen.push(phase);
            }
        }

        assert_eq!(
            seen,
            vec![
                FastPhase::BeforeImsak,
                FastPhase::Fasting,
                FastPhase::AfterMaghrib
            ]
        );
    }

    #[test]
    fn test_snapshot_labels_are_normalized() {
        let schedule = Schedule {
            city: "Test".to_string(),
            imsak: "4:04".to_string(),
            sahur: "not-a-time".to_string(),
            maghrib: "17:52".to_string(),
        };
        let snapshot = evaluate(at(12, 0, 0), &schedule);

        assert_eq!(snapshot.imsak_label, "04:04");
        // Unparseable literals pass through untouched so the typo is visible.
        assert_eq!(snapshot.sahur_label, "not-a-time");
        assert_eq!(snapshot.maghrib_label, "17:52");
    }

    #[test]
    fn test_malformed_imsak_degrades_without_panicking() {
        let schedule = Schedule {
            city: "Test".to_string(),
            imsak: "broken".to_string(),
            sahur: "04:14".to_string(),
            maghrib: "17:52".to_string(),
        };

        // boundary_instant falls back to `now`, so `now < imsak` is false and
        // the morning classifies as Fasting. Degraded but total.
        assert_eq!(current_phase(at(3, 0, 0), &schedule), FastPhase::Fasting);
        let snapshot = evaluate(at(3, 0, 0), &schedule);
        assert_eq!(snapshot.title, "Sedang Berpuasa");
    }
}
