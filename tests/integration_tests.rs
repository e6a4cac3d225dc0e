//! Integration Tests
//!
//! End-to-end tests: WAV recordings on disk through `estimate_snr`.

use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use tempfile::{tempdir, TempDir};
use test_case::test_case;

use micsnr::analysis::{estimate, SnrConfig};
use micsnr::engine::{export_audio, AudioBuffer, ExportFormat};
use micsnr::{estimate_snr, SnrError};

/// Helper to create a test sine wave
fn sine(frequency: f64, amplitude: f64, sample_rate: u32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (amplitude * (2.0 * std::f64::consts::PI * frequency * t).sin()) as f32
        })
        .collect()
}

/// Write `channels` to a WAV file in a fresh temp dir
fn write_wav(channels: Vec<Vec<f32>>, sample_rate: u32, format: ExportFormat) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mic_test.wav");
    let buffer = AudioBuffer {
        samples: channels,
        sample_rate,
    };
    export_audio(&buffer, &path, format).unwrap();
    (dir, path)
}

// === Reference Properties ===

#[test_case(8_000 ; "8 kHz")]
#[test_case(44_100 ; "44.1 kHz")]
#[test_case(48_000 ; "48 kHz")]
fn test_all_silence_is_zero_db(sample_rate: u32) {
    let (_dir, path) = write_wav(
        vec![vec![0.0; sample_rate as usize * 2]],
        sample_rate,
        ExportFormat::default(),
    );

    assert_eq!(estimate_snr(&path).unwrap(), 0.0);
}

#[test_case(ExportFormat::new(16) ; "16-bit")]
#[test_case(ExportFormat::new(24) ; "24-bit")]
#[test_case(ExportFormat::float() ; "32-bit float")]
fn test_silent_lead_in_then_tone(format: ExportFormat) {
    let sample_rate = 16_000;
    let lead_in = sample_rate as usize / 2;
    let mut samples = vec![0.0; lead_in];
    samples.extend(sine(440.0, 0.5, sample_rate, sample_rate as usize));

    let (_dir, path) = write_wav(vec![samples], sample_rate, format);
    let snr = estimate_snr(&path).unwrap();

    assert!(snr.is_finite());
    assert!(snr > 60.0, "expected > 60 dB, got {}", snr);
}

#[test_case(1 ; "single sample")]
#[test_case(100 ; "100 samples")]
#[test_case(7_999 ; "just under half a second")]
fn test_short_recording_is_zero_db(num_samples: usize) {
    let (_dir, path) = write_wav(
        vec![sine(1000.0, 0.8, 16_000, num_samples)],
        16_000,
        ExportFormat::default(),
    );

    assert_eq!(estimate_snr(&path).unwrap(), 0.0);
}

#[test]
fn test_empty_recording_is_finite() {
    let (_dir, path) = write_wav(vec![Vec::new()], 48_000, ExportFormat::default());

    let snr = estimate_snr(&path).unwrap();
    assert!(snr.is_finite());
    assert_relative_eq!(snr, 20.0 * (1e-12_f64 / (1e-9 + 1e-12)).log10(), epsilon = 1e-9);
}

#[test]
fn test_identical_stereo_matches_mono() {
    let sample_rate = 22_050;
    let mut samples = sine(300.0, 0.02, sample_rate, sample_rate as usize / 2);
    samples.extend(sine(300.0, 0.6, sample_rate, sample_rate as usize));

    let (_mono_dir, mono) = write_wav(vec![samples.clone()], sample_rate, ExportFormat::default());
    let (_stereo_dir, stereo) = write_wav(
        vec![samples.clone(), samples],
        sample_rate,
        ExportFormat::default(),
    );

    assert_eq!(estimate_snr(&mono).unwrap(), estimate_snr(&stereo).unwrap());
}

// === Measurements ===

#[test]
fn test_known_level_difference() {
    // Noise window at 0.01, remainder a 0.1 DC level: 3 parts signal, 1 part noise
    let sample_rate = 8_000;
    let mut samples = vec![0.01; 4_000];
    samples.extend(vec![0.1; 12_000]);

    let (_dir, path) = write_wav(vec![samples], sample_rate, ExportFormat::float());
    let est = estimate(&path, &SnrConfig::default()).unwrap();

    let expected_rms = ((0.25 * 0.01_f64.powi(2)) + (0.75 * 0.1_f64.powi(2))).sqrt();
    assert_relative_eq!(est.signal_rms, expected_rms, epsilon = 1e-6);
    assert_relative_eq!(est.noise_rms, 0.01, epsilon = 1e-6);
    assert_relative_eq!(est.snr_db, 20.0 * (expected_rms / 0.01).log10(), epsilon = 1e-4);
    assert_eq!(est.noise_window_samples, 4_000);
    assert_eq!(est.total_samples, 16_000);
}

#[test]
fn test_averaging_cancels_opposite_channels() {
    let sample_rate = 8_000;
    let left = sine(200.0, 0.5, sample_rate, 16_000);
    let right: Vec<f32> = left.iter().map(|s| -s).collect();

    let (_dir, path) = write_wav(vec![left, right], sample_rate, ExportFormat::float());
    let est = estimate(&path, &SnrConfig::default()).unwrap();

    assert_eq!(est.channels, 2);
    assert_eq!(est.signal_rms, 0.0);
    assert_eq!(est.snr_db, 0.0);
}

// === Failures ===

#[test]
fn test_missing_file() {
    let err = estimate_snr(Path::new("/nonexistent/mic_test.wav")).unwrap_err();
    assert!(matches!(err, SnrError::FileNotFound { .. }));
}

#[test]
fn test_undecodable_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mic_test.mp3");
    std::fs::write(&path, [0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00]).unwrap();

    let err = estimate_snr(&path).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_AUDIO");
}
