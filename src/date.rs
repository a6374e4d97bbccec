//! Publish-date parsing and the human-readable renderings of a date used by
//! the wrapper page and the index cards.

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};

use crate::constants::DATE_FORMAT;

/// Parses a publish date written as `YYYY-MM-DD`.
///
/// The date must be a real calendar date and must be written in canonical,
/// zero-padded form, because the string doubles as a file name and as the
/// href the index recovers entries from.
///
/// # Errors
///
/// Returns an error if the string is not a canonical `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) if date_key(date) == value => Ok(date),
        _ => bail!("Invalid date format '{value}'. Use YYYY-MM-DD."),
    }
}

/// The `YYYY-MM-DD` key used for file names and hrefs.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a date as `February 18, 2026 &middot; Wednesday`.
pub fn date_display(date: NaiveDate) -> String {
    date.format("%B %-d, %Y &middot; %A").to_string()
}

/// Formats a month header like `February 2026`.
pub fn month_header(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub(crate) fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
