//! CLI Module
//!
//! Command-line interface for the microphone test analyzer.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

use crate::analysis::snr::DEFAULT_MIN_SNR_DB;

/// Usage line printed when no recording is given
pub const USAGE: &str = "Usage: micsnr <mic_test.wav>";

/// micsnr - estimate the SNR of a microphone test recording
#[derive(Parser, Debug)]
#[command(name = "micsnr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JSON diagnostic report instead of the SNR line
    #[arg(long)]
    pub json: bool,

    /// SNR in dB at or above which the report status is OK
    #[arg(
        long,
        value_name = "DB",
        default_value_t = DEFAULT_MIN_SNR_DB,
        allow_negative_numbers = true
    )]
    pub min_snr: f64,

    /// Recording to analyze (WAV)
    pub path: Option<PathBuf>,
}
