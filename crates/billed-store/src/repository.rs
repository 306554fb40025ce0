use billed_core::DisplayBill;

use crate::error::StoreError;
use crate::store::BillStore;

/// Employee-facing access to bills, converted for display.
pub struct BillsRepository<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: BillStore + ?Sized> BillsRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Fetches every bill and converts each to its display form, in store order.
    ///
    /// A date that cannot be formatted is kept as stored and any unknown
    /// status passes through; neither fails the call.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] of the underlying `list` call unchanged.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, StoreError> {
        let bills = self.store.list().await?;

        let shown = bills
            .iter()
            .map(|bill| {
                let display = bill.to_display();
                if display.date == bill.date {
                    tracing::debug!(bill_id = %bill.id, date = %bill.date, "bill date kept as stored");
                }
                display
            })
            .collect();

        Ok(shown)
    }
}
