//! Review dashboard logic: status columns, filtering and review decisions.

use crate::bill::Bill;
use crate::status::BillStatus;

/// Maps a dashboard column (1, 2, 3) to the status it lists.
#[must_use]
pub fn status_for_index(index: u8) -> Option<BillStatus> {
    match index {
        1 => Some(BillStatus::Pending),
        2 => Some(BillStatus::Accepted),
        3 => Some(BillStatus::Refused),
        _ => None,
    }
}

/// Bills with exactly the raw `status` code, skipping any submitted by an
/// `excluded` email.
#[must_use]
pub fn filtered_bills(bills: &[Bill], status: BillStatus, excluded: &[String]) -> Vec<Bill> {
    bills
        .iter()
        .filter(|bill| bill.status == status.code())
        .filter(|bill| !excluded.iter().any(|email| *email == bill.email))
        .cloned()
        .collect()
}

/// Splits an email's local part into `(first, last)` names.
///
/// `"jane.doe@corp.tld"` gives `("jane", "doe")`; without a dot the first
/// name is empty and the whole local part is the last name.
#[must_use]
pub fn card_holder(email: &str) -> (String, String) {
    let local = email.split('@').next().unwrap_or_default();
    match local.split_once('.') {
        Some((first, rest)) => {
            let last = rest.split('.').next().unwrap_or_default();
            (first.to_string(), last.to_string())
        }
        None => (String::new(), local.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Refuse,
}

impl ReviewDecision {
    #[must_use]
    pub fn status(self) -> BillStatus {
        match self {
            ReviewDecision::Accept => BillStatus::Accepted,
            ReviewDecision::Refuse => BillStatus::Refused,
        }
    }
}

/// Returns a copy of `bill` carrying the manager's decision and comment.
#[must_use]
pub fn review(bill: &Bill, decision: ReviewDecision, comment: &str) -> Bill {
    Bill {
        status: decision.status().code().to_string(),
        comment_admin: Some(comment.to_string()),
        ..bill.clone()
    }
}
