use card_renamer::{config::DEFAULT_LOG_FILTER, Config, LocalCardDirectory, RenameService};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing on stderr so stdout carries only the per-file report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    info!(folder = %config.folder.display(), "Renaming card images");

    let directory = Arc::new(LocalCardDirectory::new(config.folder));
    let service = RenameService::new(directory);

    match service.run() {
        Ok(report) => {
            for line in report.report_lines() {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Could not read card folder");
            ExitCode::FAILURE
        }
    }
}
