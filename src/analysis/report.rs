//! Diagnostic report entries
//!
//! Device test reports are JSON arrays of `{ "name", "status", "details" }`
//! entries. The microphone entry carries the SNR measurement alongside
//! those three fields so viewers that only read the summary keep working.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::analysis::snr::{SnrConfig, SnrEstimate};
use crate::error::Result;

/// Entry name used for microphone test results
pub const MICROPHONE_TEST_NAME: &str = "Microphone";

/// Outcome of a single diagnostic check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Ok,
    Warn,
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Ok => write!(f, "OK"),
            TestStatus::Warn => write!(f, "WARN"),
        }
    }
}

/// One report entry for a microphone recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub name: String,
    pub status: TestStatus,
    pub details: String,
    pub snr_db: f64,
    pub signal_rms: f64,
    pub noise_rms: f64,
    pub peak: f32,
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f64,
    /// Path of the analyzed recording as given
    pub file: String,
    /// SHA-256 of the recording's bytes, lowercase hex
    pub sha256: String,
    pub generated_at: DateTime<Utc>,
}

impl DiagnosticReport {
    /// Build an entry from a finished estimate
    pub fn new(
        estimate: &SnrEstimate,
        config: &SnrConfig,
        file: &Path,
        sha256: String,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let status = if estimate.passes(config) {
            TestStatus::Ok
        } else {
            TestStatus::Warn
        };

        let details = format!(
            "snr={:.2}dB, noise_floor={:.6}, duration={:.2}s",
            estimate.snr_db,
            estimate.noise_rms,
            estimate.duration_secs()
        );

        Self {
            name: MICROPHONE_TEST_NAME.to_string(),
            status,
            details,
            snr_db: estimate.snr_db,
            signal_rms: estimate.signal_rms,
            noise_rms: estimate.noise_rms,
            peak: estimate.peak,
            sample_rate: estimate.sample_rate,
            channels: estimate.channels,
            duration_secs: estimate.duration_secs(),
            file: file.display().to_string(),
            sha256,
            generated_at,
        }
    }

    /// Build an entry for `file`, hashing it and stamping the current time
    pub fn for_file(estimate: &SnrEstimate, config: &SnrConfig, file: &Path) -> Result<Self> {
        let sha256 = file_checksum(file)?;
        Ok(Self::new(estimate, config, file, sha256, Utc::now()))
    }

    /// Serialize as a one-entry report array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&[self])?)
    }

    /// The `name: status` line a report viewer shows for this entry
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.name, self.status)
    }
}

/// Calculate SHA-256 checksum of a file
pub fn file_checksum(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
