use clap::Parser;
use finance_tracker::args::{Args, Command};
use finance_tracker::error::{error_type, ErrorType};
use finance_tracker::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            if error_type(&e) == Some(ErrorType::Data) {
                error!(
                    "The transactions file must be a JSON object that maps category names to \
                    lists of {{\"date\": ..., \"amount\": ...}} records"
                );
            }
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::from_common(args.common());
    debug!("Reading transactions from {}", config.data_file().display());

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Show(show_args) => commands::show(&config, show_args).await?.print(),
        Command::Search(search_args) => commands::search(&config, search_args).await?.print(),
        Command::Browse => commands::browse(&config).await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                "finance_tracker",
                level,
                env!("CARGO_CRATE_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
