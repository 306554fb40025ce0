use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::bill::Dated;
use crate::validate::is_valid_bill_date_at;

/// Outcome of preparing bills for the employee table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillRows<T> {
    /// The input held no bills at all.
    Empty,
    /// Bills were present but none had a displayable date.
    NoValidRecords,
    /// Valid bills, most recent first.
    Rows(Vec<T>),
}

/// Returns the bills ordered by parsed date, most recent first.
///
/// The sort is stable: bills with equal dates keep their input order, and
/// unparsable dates sink to the end.
#[must_use]
pub fn sort_by_date_desc<T: Dated + Clone>(bills: &[T]) -> Vec<T> {
    let mut sorted = bills.to_vec();
    sorted.sort_by_cached_key(|bill| Reverse(bill.parsed_date()));
    sorted
}

/// Filters out bills without a valid date as of `now`, then sorts the rest.
#[must_use]
pub fn prepare_rows<T: Dated + Clone>(bills: &[T], now: DateTime<Utc>) -> BillRows<T> {
    if bills.is_empty() {
        return BillRows::Empty;
    }

    let valid: Vec<T> = bills
        .iter()
        .filter(|bill| is_valid_bill_date_at(bill.date_text(), now))
        .cloned()
        .collect();

    let dropped = bills.len() - valid.len();
    if dropped > 0 {
        tracing::debug!(dropped, total = bills.len(), "bills without a valid date hidden");
    }

    if valid.is_empty() {
        BillRows::NoValidRecords
    } else {
        BillRows::Rows(sort_by_date_desc(&valid))
    }
}
