use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use class_quiz::{ClientConfig, QuizPortal, config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Class to load the quiz for
    #[arg(value_name = "CLASS_ID")]
    class_id: String,

    /// Address of the quiz provider
    #[arg(short, long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Give up on the quiz request after this many seconds
    #[arg(short, long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// File to write logs to (default: class-quiz.log in the temp directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Load the quiz immediately instead of showing the landing screen
    #[arg(long)]
    skip_landing: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = ClientConfig::default()
        .with_base_url(args.base_url)
        .with_timeout(args.timeout_secs.map(Duration::from_secs))
        .with_log_file(args.log_file.unwrap_or_else(config::default_log_file));

    init_logging(&config, args.verbose)?;

    let portal = QuizPortal::new(args.class_id, &config)?.skip_landing(args.skip_landing);
    portal.run().await?;
    Ok(())
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(config: &ClientConfig, verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|e| anyhow::anyhow!("cannot open log file {}: {e}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
