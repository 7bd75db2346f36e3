//! Weekly availability codec.
//!
//! The days a player is available are stored as one comma-joined string
//! (`[1, 3, 5]` -> `"1,3,5"`) and read back as text tokens.

/// Delimiter between weekday identifiers in the stored form.
pub const WEEK_DAYS_DELIMITER: char = ',';

/// Joins weekday identifiers into their stored form, keeping order.
pub fn encode_week_days(days: &[i32]) -> String {
    days.iter()
        .map(|day| day.to_string())
        .collect::<Vec<_>>()
        .join(&WEEK_DAYS_DELIMITER.to_string())
}

/// Splits the stored form back into text tokens, keeping order.
///
/// Tokens are not re-parsed. An empty string yields a single empty token.
pub fn decode_week_days(stored: &str) -> Vec<String> {
    stored
        .split(WEEK_DAYS_DELIMITER)
        .map(str::to_string)
        .collect()
}
