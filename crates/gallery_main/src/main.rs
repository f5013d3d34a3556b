use std::process::ExitCode;

use clap::Parser;
use gallery_domain::RunOutcome;
use gallery_main::{Cli, init_tracing, set_failed};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let _guard = match init_tracing(cli.verbose) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    match gallery_main::run(cli).await {
        Ok(RunOutcome::Passed) => ExitCode::SUCCESS,
        Ok(RunOutcome::Failed { message }) => set_failed(&message),
        Err(e) => {
            error!("{e:#}");
            set_failed(&format!("{e:#}"))
        }
    }
}
