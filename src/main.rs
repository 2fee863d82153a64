use clap::Parser;
use std::process::ExitCode;

use ticketapp::cli::Cli;
use ticketapp::display::format_error;

/// Env var holding the log filter (e.g. `TICKETAPP_LOG=debug`)
const LOG_ENV: &str = "TICKETAPP_LOG";

fn init_tracing() {
    // stderr keeps `--json` output on stdout parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cli.command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}
