mod cli;
mod commands;
mod config;
mod main_lib;

use clap::Parser;
use cli::Cli;
use condodash_reports::ReportService;
use main_lib::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let reports_config = config::from_env();
    init_tracing();

    tracing::debug!("Using report API at {}", reports_config.api_base_url);
    let service = ReportService::from_config(&reports_config)?;
    let today = chrono::Local::now().date_naive();

    match commands::run(cli.command, &service, &reports_config, today).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            Err(err)
        }
    }
}
