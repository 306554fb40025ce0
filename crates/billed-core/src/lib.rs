//! Domain types and pure logic for expense-report bills.
//!
//! Everything in this crate is synchronous and side-effect free apart from
//! configuration loading. Store access lives in `billed-store`.

pub mod app_config;
pub mod bill;
pub mod config;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod receipt;
pub mod sort;
pub mod status;
pub mod users;
pub mod validate;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use bill::{parse_leading_int, Bill, DateField, Dated, DisplayBill};
pub use config::{load_app_config, load_app_config_from_env};
pub use dashboard::{card_holder, filtered_bills, review, status_for_index, ReviewDecision};
pub use dates::{format_bill_date, parse_bill_date, ParsedDate};
pub use error::{ConfigError, UploadError};
pub use receipt::{check_receipt_file_name, ReceiptKind};
pub use sort::{prepare_rows, sort_by_date_desc, BillRows};
pub use status::{translate_status, BillStatus, StatusField};
pub use users::{load_test_users, TestUsers};
pub use validate::{is_valid_bill_date, is_valid_bill_date_at};
pub use view::{render_bills_page, render_cards, BillsPage};
