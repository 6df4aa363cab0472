use chrono::{DateTime, Local, TimeZone, Timelike};
use proptest::prelude::*;

use puasar::phase::{
    FastPhase, boundary_instant, countdown_target, current_phase, format_countdown,
};
use puasar::schedule::Schedule;

/// Generate a valid hour component.
fn hour_strategy() -> impl Strategy<Value = u32> {
    0u32..24
}

/// Generate a valid minute component.
fn minute_strategy() -> impl Strategy<Value = u32> {
    0u32..60
}

/// Build a reference instant on a fixed day; skips wall times a local DST
/// gap makes unrepresentable.
fn reference_at(hour: u32, minute: u32) -> Option<DateTime<Local>> {
    // Second 17 so a resolved boundary (always :00) can never collide with
    // the reference instant itself.
    Local.with_ymd_and_hms(2026, 3, 5, hour, minute, 17).single()
}

/// Schedule with explicit boundaries and a neutral label.
fn schedule_with(imsak: &str, maghrib: &str) -> Schedule {
    Schedule {
        city: "Test".to_string(),
        imsak: imsak.to_string(),
        sahur: "04:14".to_string(),
        maghrib: maghrib.to_string(),
    }
}

/// Ordering rank for monotonicity checks.
fn phase_rank(phase: FastPhase) -> u8 {
    match phase {
        FastPhase::BeforeImsak => 0,
        FastPhase::Fasting => 1,
        FastPhase::AfterMaghrib => 2,
    }
}

proptest! {
    /// Every valid HH:MM resolves onto the reference calendar day with the
    /// requested hour/minute and zero seconds (DST gaps fall back to the
    /// reference, which the inequality guard excludes).
    #[test]
    fn test_valid_times_resolve_on_reference_day(
        hour in hour_strategy(),
        minute in minute_strategy(),
        ref_hour in hour_strategy(),
        ref_minute in minute_strategy()
    ) {
        let Some(reference) = reference_at(ref_hour, ref_minute) else {
            return Ok(());
        };

        let instant = boundary_instant(&format!("{hour:02}:{minute:02}"), reference);
        if instant != reference {
            prop_assert_eq!(instant.date_naive(), reference.date_naive());
            prop_assert_eq!(instant.hour(), hour);
            prop_assert_eq!(instant.minute(), minute);
            prop_assert_eq!(instant.second(), 0);
        }
    }

    /// Out-of-range components are malformed and must return exactly the
    /// reference instant.
    #[test]
    fn test_out_of_range_times_fall_back_to_reference(
        hour in 24u32..100,
        minute in 60u32..100,
        ref_hour in hour_strategy(),
        ref_minute in minute_strategy()
    ) {
        let Some(reference) = reference_at(ref_hour, ref_minute) else {
            return Ok(());
        };

        prop_assert_eq!(boundary_instant(&format!("{hour}:{minute:02}"), reference), reference);
        prop_assert_eq!(boundary_instant(&format!("{ref_hour:02}:{minute}"), reference), reference);
    }

    /// Structurally malformed literals must return exactly the reference.
    #[test]
    fn test_malformed_strings_fall_back_to_reference(
        junk in "[a-z :;-]{0,12}",
        ref_hour in hour_strategy(),
        ref_minute in minute_strategy()
    ) {
        let Some(reference) = reference_at(ref_hour, ref_minute) else {
            return Ok(());
        };

        // The generated alphabet contains no digits, so nothing here can
        // parse as HH:MM.
        prop_assert_eq!(boundary_instant(&junk, reference), reference);
    }

    /// Over a single day the phase only ever steps forward:
    /// BeforeImsak → Fasting → AfterMaghrib, each entered exactly once.
    #[test]
    fn test_phase_is_monotonic_over_a_day(
        imsak_minute in 1u32..720,
        fast_len in 1u32..719
    ) {
        let maghrib_minute = (imsak_minute + fast_len).min(24 * 60 - 1);
        prop_assume!(imsak_minute < maghrib_minute);

        let schedule = schedule_with(
            &format!("{:02}:{:02}", imsak_minute / 60, imsak_minute % 60),
            &format!("{:02}:{:02}", maghrib_minute / 60, maghrib_minute % 60),
        );

        let mut transitions = 0u32;
        let mut previous_rank = None;

        for minute_of_day in 0..(24 * 60) {
            let Some(now) = reference_at(minute_of_day / 60, minute_of_day % 60) else {
                continue;
            };
            let rank = phase_rank(current_phase(now, &schedule));

            if let Some(previous) = previous_rank {
                prop_assert!(rank >= previous, "phase went backwards at minute {minute_of_day}");
                if rank != previous {
                    transitions += 1;
                }
            }
            previous_rank = Some(rank);
        }

        prop_assert_eq!(transitions, 2, "expected exactly two phase transitions");
    }

    /// The countdown target never lies in the past for a well-formed
    /// schedule, and the countdown text never renders a negative component.
    #[test]
    fn test_countdown_target_is_never_in_the_past(
        now_hour in hour_strategy(),
        now_minute in minute_strategy()
    ) {
        let Some(now) = reference_at(now_hour, now_minute) else {
            return Ok(());
        };
        let schedule = Schedule::surabaya();

        let phase = current_phase(now, &schedule);
        let target = countdown_target(now, &schedule, phase);
        prop_assert!(target >= now);

        let text = format_countdown(now, target, phase);
        prop_assert!(!text.contains('-'), "negative component in {text:?}");
        prop_assert!(text.ends_with(phase.countdown_suffix()));
    }

    /// Clamping: a target at or before `now` always renders as zero.
    #[test]
    fn test_passed_target_clamps_to_zero(
        now_hour in hour_strategy(),
        now_minute in minute_strategy(),
        lag_seconds in 0i64..86_400
    ) {
        let Some(now) = reference_at(now_hour, now_minute) else {
            return Ok(());
        };
        let target = now - chrono::Duration::seconds(lag_seconds);

        let text = format_countdown(now, target, FastPhase::Fasting);
        prop_assert_eq!(text, "0j 0m lagi");
    }
}
