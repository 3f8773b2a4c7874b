//! Date and time parsing for the draft's schedule fields
//!
//! Dates accept ISO `YYYY-MM-DD` or natural language ("today", "tomorrow",
//! "next friday"). Times accept 24-hour `HH:MM`. Natural language is resolved
//! against a caller-supplied "today" so results do not depend on the wall
//! clock.

use chrono::{NaiveDate, NaiveTime};

use crate::{PostplanError, Result};

/// Parse a calendar day
///
/// # Errors
///
/// Returns `PostplanError::InvalidInput` if the input is empty or cannot be
/// understood.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PostplanError::InvalidInput(
            "Date cannot be empty".to_string(),
        ));
    }

    if input.eq_ignore_ascii_case("today") {
        return Ok(today);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    parse_natural_date(input, today)
}

/// Parse a 24-hour `HH:MM` time of day
///
/// # Errors
///
/// Returns `PostplanError::InvalidInput` for anything that is not a valid
/// `HH:MM`.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| {
        PostplanError::InvalidInput(format!(
            "Could not parse time: '{}'. Expected HH:MM (e.g., 09:30)",
            input.trim()
        ))
    })
}

/// Reject days before `today`
///
/// Only the day is bounded. Any time of day is fine, even one that has
/// already passed today.
pub fn ensure_not_before(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
    if date < today {
        return Err(PostplanError::InvalidInput(format!(
            "Date {} is in the past (earliest allowed: {})",
            date, today
        )));
    }
    Ok(date)
}

/// Natural-language dates resolve against midnight of `today`; a phrase that
/// carries its own time of day ("tomorrow 9am") is rejected rather than
/// silently losing the time.
fn parse_natural_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let midnight = today.and_time(NaiveTime::MIN).and_utc();
    let parsed = chrono_english::parse_date_string(input, midnight, chrono_english::Dialect::Us)
        .map_err(|e| {
            PostplanError::InvalidInput(format!("Could not parse date '{}': {}", input, e))
        })?;

    if parsed.time() != NaiveTime::MIN {
        return Err(PostplanError::InvalidInput(format!(
            "Date '{}' includes a time of day; set the time with `time HH:MM`",
            input
        )));
    }

    Ok(parsed.date_naive())
}
