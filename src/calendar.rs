//! Gregorian and Hijri date labels for the widget panel.
//!
//! The panel shows today's date in both calendars, Indonesian-localized:
//! `"5 Mar 2026 / 16 Ramadan 1447"`. The Hijri side uses the arithmetic
//! civil (tabular) Islamic calendar computed through the Julian Day Number,
//! which is pure integer arithmetic and can differ by a day from
//! sighting-based calendars. A presentation concern only: nothing here
//! feeds phase or countdown logic.

use chrono::{DateTime, Datelike, Local};

/// Indonesian Gregorian month abbreviations (id_ID `MMM`).
const GREGORIAN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Indonesian Hijri month names.
const HIJRI_MONTHS: [&str; 12] = [
    "Muharam",
    "Safar",
    "Rabiulawal",
    "Rabiulakhir",
    "Jumadilawal",
    "Jumadilakhir",
    "Rajab",
    "Syakban",
    "Ramadan",
    "Syawal",
    "Zulkaidah",
    "Zulhijah",
];

/// Julian Day Number of 1 Muharam AH 1 in the civil reckoning.
const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// A date in the civil (tabular) Islamic calendar.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct HijriDate {
    pub year: i64,
    /// 1-based month, 1 = Muharam.
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// Month name, Indonesian spelling.
    pub fn month_name(&self) -> &'static str {
        HIJRI_MONTHS[(self.month as usize - 1).min(11)]
    }
}

/// Convert a proleptic Gregorian date to its Julian Day Number.
fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Convert a Julian Day Number to the civil (tabular) Islamic calendar.
///
/// Standard arithmetic formulation over the 30-year intercalation cycle.
/// All intermediate values stay positive for dates at or after the Hijri
/// epoch, where this widget lives.
fn hijri_from_jdn(jdn: i64) -> HijriDate {
    let mut l = jdn - HIJRI_EPOCH_JDN + 10632;
    let n = (l - 1) / 10631;
    l = l - 10631 * n + 354;
    let j = ((10985 - l) / 5316) * ((50 * l) / 17719) + (l / 5670) * ((43 * l) / 15238);
    l = l - ((30 - j) / 15) * ((17719 * j) / 50) - (j / 16) * ((15238 * j) / 43) + 29;
    let month = (24 * l) / 709;
    let day = l - (709 * month) / 24;
    let year = 30 * n + j - 30;

    HijriDate {
        year,
        month: month as u32,
        day: day as u32,
    }
}

/// Hijri date for an instant, via its local calendar day.
pub fn hijri_date(now: DateTime<Local>) -> HijriDate {
    let date = now.date_naive();
    hijri_from_jdn(gregorian_to_jdn(
        date.year() as i64,
        date.month() as i64,
        date.day() as i64,
    ))
}

/// Gregorian label: `"5 Mar 2026"`.
pub fn gregorian_label(now: DateTime<Local>) -> String {
    let date = now.date_naive();
    format!(
        "{} {} {}",
        date.day(),
        GREGORIAN_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Hijri label: `"16 Ramadan 1447"`.
pub fn hijri_label(now: DateTime<Local>) -> String {
    let hijri = hijri_date(now);
    format!("{} {} {}", hijri.day, hijri.month_name(), hijri.year)
}

/// Combined panel label: `"{gregorian} / {hijri}"`.
pub fn date_label(now: DateTime<Local>) -> String {
    format!("{} / {}", gregorian_label(now), hijri_label(now))
}
