//! micsnr CLI - Microphone Test Analyzer
//!
//! Prints the estimated SNR of a recording, or a usage line and exit
//! status 1 when no recording is given.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, warn};

use micsnr::cli::{commands, Cli, USAGE};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    debug!("micsnr v{}", env!("CARGO_PKG_VERSION"));

    let Some(path) = cli.path.as_deref() else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    let output = match commands::analyze(path, cli.json, cli.min_snr) {
        Ok(output) => output,
        Err(err) => {
            for hint in err.recovery_suggestions() {
                warn!("{}", hint);
            }
            return Err(err).with_context(|| format!("failed to analyze {}", path.display()));
        }
    };

    println!("{}", output);
    Ok(())
}
