use relink_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; stdout stays reserved for results.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {err:#}");
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("relink error: {:#}", err);
        std::process::exit(1);
    }
}
