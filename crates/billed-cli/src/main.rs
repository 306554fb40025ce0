use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod bills;
mod dashboard;
mod new_bill;

use dashboard::DashboardCommands;

#[derive(Debug, Parser)]
#[command(name = "billed")]
#[command(about = "Expense reports: list, submit and review bills")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show your bills, most recent first
    Bills,
    /// Upload a receipt and submit a new bill
    New(new_bill::NewArgs),
    /// Manager review of every user's bills
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Loads `.env` before reading the environment.
    let config = billed_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");
    let store = billed_store::HttpStore::from_config(&config)?;

    match cli.command {
        Commands::Bills => bills::run_bills(&store).await,
        Commands::New(args) => new_bill::run_new_bill(&store, &config, args).await,
        Commands::Dashboard { command } => match command {
            DashboardCommands::List { status } => {
                dashboard::run_dashboard_list(&store, &config, status).await
            }
            DashboardCommands::Accept { id, comment } => {
                dashboard::run_dashboard_review(
                    &store,
                    &id,
                    billed_core::ReviewDecision::Accept,
                    &comment,
                )
                .await
            }
            DashboardCommands::Refuse { id, comment } => {
                dashboard::run_dashboard_review(
                    &store,
                    &id,
                    billed_core::ReviewDecision::Refuse,
                    &comment,
                )
                .await
            }
        },
    }
}
