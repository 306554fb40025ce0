pub mod client;
pub mod error;
pub mod new_bill;
pub mod repository;
pub mod review;
pub mod store;
pub mod types;

pub use client::HttpStore;
pub use error::StoreError;
pub use new_bill::{FileOutcome, NewBill, NewBillForm, Notifier, SubmitOutcome};
pub use repository::BillsRepository;
pub use review::Dashboard;
pub use store::BillStore;
pub use types::{CreatedReceipt, ReceiptFile, ReceiptUpload};
