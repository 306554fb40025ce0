//! Bill date parsing and display formatting.
//!
//! Bills carry their date either as a raw ISO `yyyy-mm-dd` string (as stored)
//! or as the short French display form produced by [`format_bill_date`]
//! (`"4 Avr. 23"`). [`parse_bill_date`] accepts both and never fails: anything
//! it cannot place on the calendar becomes [`ParsedDate::Invalid`].

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Month names recognised in display dates, in lookup order.
///
/// Lookup is a prefix match and the first key that starts with the token
/// wins, so the order here is observable: `"Jui"` resolves to June and `"A"`
/// to April.
const MONTH_NAMES: &[(&str, u32)] = &[
    ("Jan", 1),
    ("Janvier", 1),
    ("Fév", 2),
    ("Février", 2),
    ("Mar", 3),
    ("Mars", 3),
    ("Avr", 4),
    ("Avril", 4),
    ("Mai", 5),
    ("Juin", 6),
    ("Juil", 7),
    ("Juillet", 7),
    ("Aoû", 8),
    ("Août", 8),
    ("Sep", 9),
    ("Septembre", 9),
    ("Oct", 10),
    ("Octobre", 10),
    ("Nov", 11),
    ("Novembre", 11),
    ("Déc", 12),
    ("Décembre", 12),
];

/// French abbreviated month names as a `fr` locale renders them.
const FR_SHORT_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Result of parsing a bill date.
///
/// `Invalid` orders before every real date, so unparsable bills sink to the
/// end of a most-recent-first sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParsedDate {
    Invalid,
    At(DateTime<Utc>),
}

impl ParsedDate {
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, ParsedDate::Invalid)
    }

    #[must_use]
    pub fn at(&self) -> Option<DateTime<Utc>> {
        match self {
            ParsedDate::Invalid => None,
            ParsedDate::At(at) => Some(*at),
        }
    }

    /// Milliseconds since the Unix epoch, `None` for the invalid sentinel.
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.at().map(|at| at.timestamp_millis())
    }
}

/// Parses a bill date in ISO (`2023-04-04`) or display (`4 Avr. 23`) form.
#[must_use]
pub fn parse_bill_date(raw: &str) -> ParsedDate {
    if raw.trim().is_empty() {
        return ParsedDate::Invalid;
    }
    if ISO_DATE.is_match(raw) {
        return parse_iso_day(raw);
    }

    let tokens: Vec<&str> = raw.trim().split(' ').collect();
    let [day, month, year] = tokens.as_slice() else {
        return ParsedDate::Invalid;
    };

    let month_token = month.strip_suffix('.').unwrap_or(*month);
    let Some(month_number) = lookup_month(month_token) else {
        tracing::debug!(date = raw, month = month_token, "unrecognized month name");
        return ParsedDate::Invalid;
    };

    let full_year = if year.chars().count() == 2 {
        format!("20{year}")
    } else {
        (*year).to_string()
    };
    let composed = format!("{full_year}-{month_number:02}-{day:0>2}");
    if ISO_DATE.is_match(&composed) {
        parse_iso_day(&composed)
    } else {
        ParsedDate::Invalid
    }
}

/// Formats a stored bill date as `"<day> <Mon>. <yy>"`, e.g. `"4 Avr. 23"`.
///
/// Input that does not parse as an ISO date or timestamp is returned as-is,
/// which also makes the function idempotent on already formatted dates.
#[must_use]
pub fn format_bill_date(raw: &str) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let year = at.year().to_string();
    let short_year: String = year.chars().skip(2).take(2).collect();
    format!("{} {}. {}", at.day(), display_month(at.month()), short_year)
}

/// Midnight UTC of an ISO `yyyy-mm-dd`.
///
/// Days 1 to 31 are counted from the first of the month, so a day past the
/// month's end rolls into the next one (`2023-02-30` is March 2nd). Day 0,
/// day 32 and up, and months outside 1 to 12 are invalid.
fn parse_iso_day(iso: &str) -> ParsedDate {
    let mut parts = iso.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return ParsedDate::Invalid;
    };
    let (Ok(year), Ok(month), Ok(day)) = (
        year.parse::<i32>(),
        month.parse::<u32>(),
        day.parse::<u32>(),
    ) else {
        return ParsedDate::Invalid;
    };
    if !(1..=31).contains(&day) {
        return ParsedDate::Invalid;
    }

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(day - 1))))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map_or(ParsedDate::Invalid, |naive| ParsedDate::At(naive.and_utc()))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if ISO_DATE.is_match(raw) {
        return parse_iso_day(raw).at();
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn lookup_month(token: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .find(|(name, _)| name.starts_with(token))
        .map(|&(_, number)| number)
}

/// Capitalized, three-letter form of the locale month name: `"avr."` → `"Avr"`.
fn display_month(month: u32) -> String {
    let index = usize::try_from(month.saturating_sub(1)).unwrap_or(0);
    let short = FR_SHORT_MONTHS[index.min(FR_SHORT_MONTHS.len() - 1)];
    let mut chars = short.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    capitalized.chars().take(3).collect()
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
