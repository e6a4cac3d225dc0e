//! Recording Analysis
//!
//! - SNR estimation against a leading noise window
//! - Diagnostic report entries for the result

pub mod report;
pub mod snr;

pub use report::{file_checksum, DiagnosticReport, TestStatus};
pub use snr::{
    estimate, estimate_buffer, estimate_snr, snr_from_samples, SnrConfig, SnrEstimate,
    EMPTY_NOISE_FLOOR, NOISE_WINDOW_SECS, RMS_EPSILON,
};
