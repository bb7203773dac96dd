//! Date utility functions
//!
//! Form dates follow a single input-format contract: `MM/DD/YYYY` with slash
//! separators. Anything else is rejected rather than guessed at.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use thiserror::Error;

/// Input format for every date field in the form
pub const FORM_DATE_FORMAT: &str = "%m/%d/%Y";

/// Number of characters in a complete `MM/DD/YYYY` string
pub const FORM_DATE_LEN: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected MM/DD/YYYY, got '{0}'")]
    Format(String),
}

/// Parse a `MM/DD/YYYY` string into a calendar date.
///
/// The string must be exactly ten characters; chrono alone would also accept
/// unpadded months and days.
pub fn parse_form_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    if trimmed.chars().count() != FORM_DATE_LEN {
        return Err(DateParseError::Format(input.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, FORM_DATE_FORMAT).map_err(|_| DateParseError::Format(input.to_string()))
}

/// Format a date the way date fields store it
pub fn format_form_date(d: NaiveDate) -> String {
    d.format(FORM_DATE_FORMAT).to_string()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Move a date by whole days, saturating at chrono's range limits
pub fn shift_days(from: NaiveDate, days: i64) -> NaiveDate {
    from.checked_add_signed(Duration::days(days)).unwrap_or(from)
}

/// Move a date by whole months, clamping the day to the target month's length
pub fn shift_months(from: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        from.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        from.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(from)
}

/// First day of the month containing `d`
pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// Number of days in the month containing `d`
pub fn days_in_month(d: NaiveDate) -> u32 {
    let first = first_of_month(d);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}
