use clap::Parser;
use colored::Colorize;
use is_terminal::IsTerminal;
use tracing::{error, info};

use gitrig::cli::{self, Args};

#[tokio::main]
async fn main() {
    // Parse command line arguments; usage errors exit 1, help/version exit 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                e.exit();
            }
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    // Initialize logging; --quiet suppresses everything below errors
    let log_level = if args.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .try_init();

    info!("Starting gitrig...");

    if let Err(e) = cli::run(args).await {
        error!("Application error: {}", e);
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }

    info!("gitrig completed successfully");
}
