//! Conversion between `"HH:MM"` strings and minute-of-day offsets.
//!
//! Ads store their play window as integer minutes since midnight and expose
//! it as zero-padded `"HH:MM"` text.

/// Separator between the hour and minute parts.
const SEPARATOR: char = ':';

/// Minutes in one hour.
const MINUTES_PER_HOUR: i32 = 60;

/// Converts an `"HH:MM"` string into minutes since midnight.
///
/// No range check is made: `"25:00"` gives `1500`. Returns `None` only when
/// the text does not consist of two integer parts separated by `:`.
pub fn hour_string_to_minutes(hour_string: &str) -> Option<i32> {
    let (hours, minutes) = hour_string.split_once(SEPARATOR)?;
    let hours: i32 = hours.trim().parse().ok()?;
    let minutes: i32 = minutes.trim().parse().ok()?;

    hours
        .checked_mul(MINUTES_PER_HOUR)
        .and_then(|h| h.checked_add(minutes))
}

/// Converts minutes since midnight into an `"HH:MM"` string.
///
/// Each part is left-padded with zeros to two characters. Values outside
/// `0..=1439` are formatted as-is (`1500` -> `"25:00"`, `-1` -> `"-1:-1"`).
pub fn minutes_to_hour_string(minutes: i32) -> String {
    let hours = minutes.div_euclid(MINUTES_PER_HOUR);
    let mins = minutes % MINUTES_PER_HOUR;

    format!("{:02}{}{:02}", hours, SEPARATOR, mins)
}
