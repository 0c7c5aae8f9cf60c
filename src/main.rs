use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use tracing::error;

use feedback_reminder::business::ReminderService;
use feedback_reminder::cli::Cli;
use feedback_reminder::config::Config;
use feedback_reminder::ebay::EbayClient;
use feedback_reminder::error::AppError;
use feedback_reminder::logging;

async fn run(cli: Cli) -> Result<(), AppError> {
    let run_config = cli.into_run_config(Local::now().date_naive())?;

    let client = Arc::new(EbayClient::new(Config::from_env())?);
    let service = ReminderService::from_client(client);
    service.run(&run_config).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    // .env first so RUST_LOG and the credentials can live there
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}
