//! `new` command: receipt upload followed by bill submission.

use std::path::PathBuf;

use anyhow::Context as _;
use billed_core::AppConfig;
use billed_store::{
    BillStore, FileOutcome, NewBill, NewBillForm, Notifier, ReceiptFile, SubmitOutcome,
};
use clap::Args;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Receipt image (.jpg, .jpeg or .png)
    #[arg(long)]
    pub file: PathBuf,
    /// Expense category (e.g., Transports)
    #[arg(long = "type")]
    pub expense_type: String,
    /// Short label for the expense
    #[arg(long)]
    pub name: String,
    /// Amount in whole euros
    #[arg(long)]
    pub amount: String,
    /// Expense date as yyyy-mm-dd
    #[arg(long)]
    pub date: String,
    #[arg(long, default_value = "")]
    pub vat: String,
    /// VAT percentage; 20 when omitted
    #[arg(long, default_value = "")]
    pub pct: String,
    #[arg(long, default_value = "")]
    pub commentary: String,
}

/// Prints alerts on stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(%message, "alert shown");
        eprintln!("{message}");
    }
}

/// Upload the receipt, then submit the bill under the id the upload reserved.
///
/// # Errors
///
/// Returns an error if no user email is configured, the receipt cannot be
/// read, a store call fails, or the submission is blocked by validation.
pub(crate) async fn run_new_bill<S: BillStore>(
    store: &S,
    config: &AppConfig,
    args: NewArgs,
) -> anyhow::Result<()> {
    let email = config
        .user_email
        .as_deref()
        .context("BILLED_USER_EMAIL must be set to submit a bill")?;

    let name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' is not a file path", args.file.display()))?;
    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read receipt '{}'", args.file.display()))?;

    let notifier = StderrNotifier;
    let mut new_bill = NewBill::new(store, &notifier, email);

    match new_bill
        .handle_change_file(Some(ReceiptFile { name, bytes }))
        .await?
    {
        FileOutcome::Stored => {
            println!(
                "receipt uploaded: {}",
                new_bill.file_url().unwrap_or_default()
            );
        }
        FileOutcome::Rejected | FileOutcome::NoFile => {}
    }

    let form = NewBillForm {
        expense_type: args.expense_type,
        name: args.name,
        amount: args.amount,
        date: args.date,
        vat: args.vat,
        pct: args.pct,
        commentary: args.commentary,
    };

    match new_bill.handle_submit(form).await? {
        SubmitOutcome::Submitted(bill) => {
            println!("bill {} submitted ({})", bill.id, bill.status);
            Ok(())
        }
        SubmitOutcome::Blocked => anyhow::bail!("bill was not submitted"),
    }
}
