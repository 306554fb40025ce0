//! Request and response shapes exchanged with the bills store.

use serde::Deserialize;

/// A file picked by the employee as the receipt of a new bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Multipart payload of `POST /bills`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    /// Submitter email, sent as the `email` form field.
    pub email: String,
}

/// Response of `POST /bills`: where the receipt landed and the id reserved
/// for the bill.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReceipt {
    pub file_url: String,
    pub key: String,
}
