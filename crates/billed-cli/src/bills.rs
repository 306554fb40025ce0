//! Employee bills table.

use billed_core::{render_bills_page, BillsPage};
use billed_store::{BillStore, BillsRepository};
use chrono::Utc;

/// Fetch the bills, then print them newest first with unusable dates dropped.
///
/// # Errors
///
/// Returns an error if the store cannot be read; the error page is printed
/// first.
pub(crate) async fn run_bills<S: BillStore>(store: &S) -> anyhow::Result<()> {
    let page = match BillsRepository::new(store).get_bills().await {
        Ok(bills) => BillsPage::Data(bills),
        Err(e) => {
            print!("{}", render_bills_page(&BillsPage::Error(e.to_string()), Utc::now()));
            return Err(e.into());
        }
    };

    print!("{}", render_bills_page(&page, Utc::now()));
    Ok(())
}
