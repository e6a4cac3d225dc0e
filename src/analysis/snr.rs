//! SNR Estimation
//!
//! Estimates the signal-to-noise ratio of a microphone test recording by
//! comparing the RMS level of the whole recording against the RMS level of
//! a fixed window at its start, which is assumed to hold only background
//! noise.
//!
//! ```text
//! n        = min(len, floor(noise_window_secs * sample_rate))
//! noise    = rms(x[..n])            (EMPTY_NOISE_FLOOR when n == 0)
//! snr_db   = 20 * log10((rms(x) + RMS_EPSILON) / (noise + RMS_EPSILON))
//! ```

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::engine::buffer::{peak, rms, AudioBuffer};
use crate::engine::io::import_audio;
use crate::error::Result;

// ============================================================================
// Constants
// ============================================================================

/// Length of the leading noise window in seconds
pub const NOISE_WINDOW_SECS: f64 = 0.5;

/// Added to both RMS values before the ratio so silence never hits log10(0)
pub const RMS_EPSILON: f64 = 1e-12;

/// Noise RMS used when the noise window holds no samples
pub const EMPTY_NOISE_FLOOR: f64 = 1e-9;

/// Default threshold separating a passing recording from a warning
pub const DEFAULT_MIN_SNR_DB: f64 = 20.0;

// ============================================================================
// Configuration
// ============================================================================

/// Estimator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnrConfig {
    /// Leading window treated as the noise floor (default: 0.5s)
    pub noise_window_secs: f64,
    /// SNR at or above which a recording is reported as OK (default: 20 dB)
    pub min_snr_db: f64,
}

impl Default for SnrConfig {
    fn default() -> Self {
        SnrConfig {
            noise_window_secs: NOISE_WINDOW_SECS,
            min_snr_db: DEFAULT_MIN_SNR_DB,
        }
    }
}

impl SnrConfig {
    /// Default window with a custom pass threshold
    pub fn with_min_snr(min_snr_db: f64) -> Self {
        SnrConfig {
            min_snr_db,
            ..Default::default()
        }
    }

    /// Number of noise window samples for a recording of `len` samples
    pub fn noise_window_len(&self, len: usize, sample_rate: u32) -> usize {
        let window = (self.noise_window_secs * sample_rate as f64).floor().max(0.0) as usize;
        len.min(window)
    }
}

// ============================================================================
// Estimate
// ============================================================================

/// Result of one SNR measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnrEstimate {
    /// Estimated signal-to-noise ratio in dB
    pub snr_db: f64,
    /// Linear RMS of the whole (mono) recording
    pub signal_rms: f64,
    /// Linear RMS of the noise window, or `EMPTY_NOISE_FLOOR`
    pub noise_rms: f64,
    /// Peak absolute sample of the mono recording
    pub peak: f32,
    /// Samples in the noise window
    pub noise_window_samples: usize,
    /// Samples per channel in the recording
    pub total_samples: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Channels before mono collapse
    pub channels: usize,
}

impl SnrEstimate {
    /// Recording length in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.total_samples as f64 / self.sample_rate as f64
    }

    /// Whether the estimate clears `config.min_snr_db`
    pub fn passes(&self, config: &SnrConfig) -> bool {
        self.snr_db >= config.min_snr_db
    }
}

/// Estimate the SNR of an audio file in dB using the default settings
///
/// # Errors
/// Fails if the file is missing, unreadable, or not a decodable WAV file.
pub fn estimate_snr(path: &Path) -> Result<f64> {
    Ok(estimate(path, &SnrConfig::default())?.snr_db)
}

/// Decode an audio file and measure it
pub fn estimate(path: &Path, config: &SnrConfig) -> Result<SnrEstimate> {
    let buffer = import_audio(path)?;
    let estimate = estimate_buffer(&buffer, config);

    info!(
        "{}: SNR {:.2} dB (signal rms {:.6}, noise rms {:.6})",
        path.display(),
        estimate.snr_db,
        estimate.signal_rms,
        estimate.noise_rms
    );

    Ok(estimate)
}

/// Measure an in-memory buffer, collapsing it to mono first
pub fn estimate_buffer(buffer: &AudioBuffer, config: &SnrConfig) -> SnrEstimate {
    let mono = buffer.to_mono();
    SnrEstimate {
        channels: buffer.channels(),
        ..snr_from_samples(&mono, buffer.sample_rate, config)
    }
}

/// Measure a mono sample sequence
///
/// Always returns a finite `snr_db`. An empty sequence has a signal RMS of
/// 0.0 and uses `EMPTY_NOISE_FLOOR` for the noise, giving about -60 dB.
pub fn snr_from_samples(samples: &[f32], sample_rate: u32, config: &SnrConfig) -> SnrEstimate {
    let n = config.noise_window_len(samples.len(), sample_rate);

    let signal_rms = rms(samples);
    let noise_rms = if n > 0 {
        rms(&samples[..n])
    } else {
        EMPTY_NOISE_FLOOR
    };

    let snr_db = 20.0 * ((signal_rms + RMS_EPSILON) / (noise_rms + RMS_EPSILON)).log10();

    debug!(
        "noise window {} of {} samples at {} Hz",
        n,
        samples.len(),
        sample_rate
    );

    SnrEstimate {
        snr_db,
        signal_rms,
        noise_rms,
        peak: peak(samples),
        noise_window_samples: n,
        total_samples: samples.len(),
        sample_rate,
        channels: 1,
    }
}

// ============================================================================
// Tests
// ============================================================================
