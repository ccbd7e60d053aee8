use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod api;
mod calendar;
mod cli;
mod config;
mod console;
mod error;
mod intake;
mod model;
mod report;
mod utils;


use config::Config;
use error::ApiError;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let cli = cli::Cli::parse();
    let config = Config::from_env();

    // Rolling daily log; stdout stays reserved for command output.
    let file_appender = rolling::daily(&config.log_dir, "hrms.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_ansi(false)
        .with_target(false)
        .init();

    info!(api_base_url = %config.api_base_url, "hrms console starting");

    let client = match api::ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match console::run(cli.command, &client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Prefer the server's detail message when the failure came from
            // the API; everything else prints as-is.
            let message = match e.downcast_ref::<ApiError>() {
                Some(api_err) => api_err.user_message(),
                None => format!("{e:#}"),
            };
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
