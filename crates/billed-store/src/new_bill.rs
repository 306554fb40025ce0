//! New-bill flow: receipt upload followed by form submission.
//!
//! The receipt is uploaded as soon as it is picked, which reserves a bill id
//! in the store; submitting the form then fills in that bill.

use billed_core::receipt::{MISSING_RECEIPT_ALERT, WRONG_EXTENSION_ALERT};
use billed_core::{check_receipt_file_name, is_valid_bill_date, parse_leading_int, Bill, BillStatus};

use crate::error::StoreError;
use crate::store::BillStore;
use crate::types::{ReceiptFile, ReceiptUpload};

/// Alert shown when the form date is missing, in the future, or not a date.
pub const INVALID_DATE_ALERT: &str = "Vous devez saisir une date de dépense valide.";

const DEFAULT_PCT: i64 = 20;

/// Blocking user notification, e.g. a dialog or a line on stderr.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Field values of the new-bill form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    /// `yyyy-mm-dd` from the date picker.
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    NoFile,
    /// Wrong extension; the user was alerted and no receipt is held.
    Rejected,
    Stored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the user was alerted and nothing was sent.
    Blocked,
    Submitted(Bill),
}

#[derive(Debug, Clone)]
struct StoredReceipt {
    bill_id: String,
    file_url: String,
    file_name: String,
}

pub struct NewBill<'a, S: ?Sized, N: ?Sized> {
    store: &'a S,
    notifier: &'a N,
    email: String,
    receipt: Option<StoredReceipt>,
}

impl<'a, S, N> NewBill<'a, S, N>
where
    S: BillStore + ?Sized,
    N: Notifier + ?Sized,
{
    pub fn new(store: &'a S, notifier: &'a N, email: impl Into<String>) -> Self {
        Self {
            store,
            notifier,
            email: email.into(),
            receipt: None,
        }
    }

    #[must_use]
    pub fn bill_id(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.bill_id.as_str())
    }

    #[must_use]
    pub fn file_url(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.file_url.as_str())
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.file_name.as_str())
    }

    /// Handles a newly picked receipt.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] of the upload; no receipt is held afterwards.
    pub async fn handle_change_file(
        &mut self,
        file: Option<ReceiptFile>,
    ) -> Result<FileOutcome, StoreError> {
        let Some(file) = file else {
            return Ok(FileOutcome::NoFile);
        };

        let kind = match check_receipt_file_name(&file.name) {
            Ok(kind) => kind,
            Err(e) => {
                tracing::info!(error = %e, "receipt rejected");
                self.receipt = None;
                self.notifier.alert(WRONG_EXTENSION_ALERT);
                return Ok(FileOutcome::Rejected);
            }
        };

        self.receipt = None;
        let upload = ReceiptUpload {
            file_name: file.name.clone(),
            content_type: kind.mime_type().to_string(),
            bytes: file.bytes,
            email: self.email.clone(),
        };
        let created = self.store.create(upload).await?;

        self.receipt = Some(StoredReceipt {
            bill_id: created.key,
            file_url: created.file_url,
            file_name: file.name,
        });
        Ok(FileOutcome::Stored)
    }

    /// Submits the form as a pending bill under the reserved bill id.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] of the update call.
    pub async fn handle_submit(&mut self, form: NewBillForm) -> Result<SubmitOutcome, StoreError> {
        let Some(receipt) = self.receipt.clone() else {
            self.notifier.alert(MISSING_RECEIPT_ALERT);
            return Ok(SubmitOutcome::Blocked);
        };
        if !is_valid_bill_date(&form.date) {
            self.notifier.alert(INVALID_DATE_ALERT);
            return Ok(SubmitOutcome::Blocked);
        }

        let bill = Bill {
            id: receipt.bill_id.clone(),
            email: self.email.clone(),
            expense_type: form.expense_type,
            name: form.name,
            commentary: form.commentary,
            amount: parse_leading_int(&form.amount),
            pct: parse_leading_int(&form.pct)
                .filter(|pct| *pct != 0)
                .or(Some(DEFAULT_PCT)),
            vat: Some(form.vat),
            date: form.date,
            status: BillStatus::Pending.code().to_string(),
            file_url: Some(receipt.file_url),
            file_name: Some(receipt.file_name),
            comment_admin: None,
        };

        let stored = self.store.update(&receipt.bill_id, &bill).await?;
        Ok(SubmitOutcome::Submitted(stored))
    }
}
