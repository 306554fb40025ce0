//! Manager dashboard command handlers.
//!
//! Outside production every bill is listed; in production bills from the
//! configured test accounts and from the reviewer themself are hidden.

use billed_core::{
    filtered_bills, load_test_users, render_cards, status_for_index, AppConfig, BillStatus,
    Environment, ReviewDecision,
};
use billed_store::{BillStore, Dashboard};
use clap::Subcommand;

/// Sub-commands available under `dashboard`.
#[derive(Debug, Subcommand)]
pub enum DashboardCommands {
    /// Show the bills of one status column
    List {
        /// pending, accepted or refused (or column 1, 2, 3)
        #[arg(long, value_parser = parse_status)]
        status: BillStatus,
    },
    /// Accept a bill
    Accept {
        id: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Refuse a bill
    Refuse {
        id: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
}

pub(crate) fn parse_status(raw: &str) -> Result<BillStatus, String> {
    BillStatus::from_code(raw)
        .or_else(|| raw.parse::<u8>().ok().and_then(status_for_index))
        .ok_or_else(|| format!("unknown status '{raw}'; expected pending, accepted or refused"))
}

/// Emails whose bills the dashboard hides.
///
/// # Errors
///
/// Returns an error if the test users file cannot be loaded in production.
fn excluded_emails(config: &AppConfig) -> anyhow::Result<Vec<String>> {
    if config.env != Environment::Production {
        return Ok(Vec::new());
    }

    let users = load_test_users(&config.test_users_path)?;
    Ok(match config.user_email.as_deref() {
        Some(reviewer) => users.excluding(reviewer),
        None => users.users,
    })
}

/// Print the cards of every bill in one status column.
///
/// # Errors
///
/// Returns an error if the test users file or the store cannot be read.
pub(crate) async fn run_dashboard_list<S: BillStore>(
    store: &S,
    config: &AppConfig,
    status: BillStatus,
) -> anyhow::Result<()> {
    let excluded = excluded_emails(config)?;
    let bills = Dashboard::new(store).get_bills_all_users().await?;
    let shown = filtered_bills(&bills, status, &excluded);

    tracing::debug!(status = %status, total = bills.len(), shown = shown.len(), "dashboard column");

    println!("{} ({})", status.label(), shown.len());
    print!("{}", render_cards(&shown));
    Ok(())
}

/// Accept or refuse the bill with the given id.
///
/// # Errors
///
/// Returns an error if no bill has that id or a store call fails.
pub(crate) async fn run_dashboard_review<S: BillStore>(
    store: &S,
    id: &str,
    decision: ReviewDecision,
    comment: &str,
) -> anyhow::Result<()> {
    let dashboard = Dashboard::new(store);
    let bills = dashboard.get_bills_all_users().await?;
    let bill = bills
        .iter()
        .find(|b| b.id == id)
        .ok_or_else(|| anyhow::anyhow!("bill '{id}' not found"))?;

    let stored = dashboard.decide(bill, decision, comment).await?;
    println!("bill {} {}", stored.id, stored.status);
    Ok(())
}
