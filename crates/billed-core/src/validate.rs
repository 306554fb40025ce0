use chrono::{DateTime, Utc};

use crate::dates::{parse_bill_date, ParsedDate};

/// Dates at or before one day past the Unix epoch are placeholders, not real
/// bill dates.
pub const EPOCH_PLACEHOLDER_MS: i64 = 86_400_000;

/// Returns `true` if `date` is a displayable bill date as of now.
///
/// See [`is_valid_bill_date_at`].
#[must_use]
pub fn is_valid_bill_date(date: &str) -> bool {
    is_valid_bill_date_at(date, Utc::now())
}

/// Returns `true` if `date` (raw or display form) parses, lies strictly after
/// [`EPOCH_PLACEHOLDER_MS`], and is not later than `now`.
#[must_use]
pub fn is_valid_bill_date_at(date: &str, now: DateTime<Utc>) -> bool {
    match parse_bill_date(date) {
        ParsedDate::Invalid => false,
        ParsedDate::At(at) => at.timestamp_millis() > EPOCH_PLACEHOLDER_MS && at <= now,
    }
}
