use billed_core::{review, Bill, ReviewDecision};

use crate::error::StoreError;
use crate::store::BillStore;

/// Manager-facing access to bills: raw listing and review decisions.
pub struct Dashboard<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: BillStore + ?Sized> Dashboard<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Lists every user's bills exactly as stored, without display formatting.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] of the `list` call.
    pub async fn get_bills_all_users(&self) -> Result<Vec<Bill>, StoreError> {
        self.store.list().await
    }

    /// # Errors
    ///
    /// See [`Dashboard::decide`].
    pub async fn accept(&self, bill: &Bill, comment: &str) -> Result<Bill, StoreError> {
        self.decide(bill, ReviewDecision::Accept, comment).await
    }

    /// # Errors
    ///
    /// See [`Dashboard::decide`].
    pub async fn refuse(&self, bill: &Bill, comment: &str) -> Result<Bill, StoreError> {
        self.decide(bill, ReviewDecision::Refuse, comment).await
    }

    /// Records the decision and comment on `bill` and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingSelector`] if the bill has no id, or the
    /// error of the `update` call.
    pub async fn decide(
        &self,
        bill: &Bill,
        decision: ReviewDecision,
        comment: &str,
    ) -> Result<Bill, StoreError> {
        if bill.id.is_empty() {
            return Err(StoreError::MissingSelector);
        }

        let reviewed = review(bill, decision, comment);
        tracing::info!(bill_id = %bill.id, status = %reviewed.status, "bill reviewed");
        self.store.update(&bill.id, &reviewed).await
    }
}
