//! distro-convert CLI
//!
//! Converts the old-format release manifests of each distribution into
//! versioned release and test manifests in the output directory.

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use distro_convert::{
    config::{DEFAULT_BASE_URL, DEFAULT_DISTRIBUTIONS},
    Config, Converter, HttpFetcher, Result,
};

#[derive(Parser)]
#[command(name = "distro-convert")]
#[command(about = "Convert release manifests to the versioned format", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Base URL of the old-format manifests
    #[arg(long, env = "DISTRO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory holding the previous output and receiving the new one
    #[arg(short, long, env = "DISTRO_OUTPUT_DIR", default_value = ".")]
    output: PathBuf,

    /// Distributions to convert
    #[arg(env = "DISTRO_NAMES", value_delimiter = ',', num_args = 0..)]
    distributions: Vec<String>,
}

fn setup_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let distributions = if cli.distributions.is_empty() {
        DEFAULT_DISTRIBUTIONS.iter().map(|d| d.to_string()).collect()
    } else {
        cli.distributions
    };

    let config = Config {
        base_url: cli.base_url,
        distributions,
        output_dir: cli.output,
    };

    let converter = Converter::new(config, HttpFetcher::new()?);
    match converter.run() {
        Ok(written) => {
            info!("Converted {} manifests", written.len());
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            Err(e)
        }
    }
}
