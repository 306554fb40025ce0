use async_trait::async_trait;
use billed_core::Bill;

use crate::error::StoreError;
use crate::types::{CreatedReceipt, ReceiptUpload};

/// Contract of the remote bills store.
///
/// Each call resolves once, with a value or a [`StoreError`]; implementations
/// do not retry.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Lists every bill visible to the caller, in store order.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Uploads a receipt and reserves a bill for it.
    async fn create(&self, upload: ReceiptUpload) -> Result<CreatedReceipt, StoreError>;

    /// Replaces the bill stored under `selector` and returns the stored copy.
    async fn update(&self, selector: &str, bill: &Bill) -> Result<Bill, StoreError>;
}
