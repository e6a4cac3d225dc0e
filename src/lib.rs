//! micsnr - Microphone Test Analyzer
//!
//! Estimates the signal-to-noise ratio of a microphone test recording.
//! The first half second of the recording is taken as the noise floor and
//! compared against the RMS level of the whole recording.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//!
//! let snr_db = micsnr::estimate_snr(Path::new("mic_test.wav"))?;
//! println!("Estimated SNR (dB): {:.2}", snr_db);
//! # Ok::<(), micsnr::SnrError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;

pub use analysis::{estimate_snr, SnrConfig, SnrEstimate};
pub use error::{Result, SnrError};
