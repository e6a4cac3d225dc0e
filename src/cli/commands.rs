//! CLI Command Implementations
//!
//! Each command returns the text to print so the entry point owns stdout.

use std::path::Path;

use log::info;

use crate::analysis::report::DiagnosticReport;
use crate::analysis::snr::{self, SnrConfig, SnrEstimate};
use crate::error::Result;

/// Format an estimate as the single result line
pub fn format_estimate(estimate: &SnrEstimate) -> String {
    format!("Estimated SNR (dB): {:.2}", estimate.snr_db)
}

/// Analyze a recording and render the result.
///
/// Produces the `Estimated SNR (dB): <value>` line, or a JSON report array
/// when `json` is set.
pub fn analyze(path: &Path, json: bool, min_snr_db: f64) -> Result<String> {
    info!("Analyzing recording: {}", path.display());

    let config = SnrConfig::with_min_snr(min_snr_db);
    let estimate = snr::estimate(path, &config)?;

    if json {
        let report = DiagnosticReport::for_file(&estimate, &config, path)?;
        info!("{}", report.summary_line());
        report.to_json()
    } else {
        Ok(format_estimate(&estimate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{export_audio, AudioBuffer, ExportFormat};
    use tempfile::tempdir;

    #[test]
    fn test_format_two_decimals() {
        let estimate = snr::snr_from_samples(&[], 8_000, &SnrConfig::default());
        assert_eq!(format_estimate(&estimate), "Estimated SNR (dB): -60.01");
    }

    #[test]
    fn test_analyze_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flat.wav");
        let buffer = AudioBuffer::from_mono(vec![0.25; 4_000], 8_000);
        export_audio(&buffer, &path, ExportFormat::default()).unwrap();

        let output = analyze(&path, false, 20.0).unwrap();
        assert_eq!(output, "Estimated SNR (dB): 0.00");
    }

    #[test]
    fn test_analyze_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flat.wav");
        let buffer = AudioBuffer::from_mono(vec![0.25; 4_000], 8_000);
        export_audio(&buffer, &path, ExportFormat::default()).unwrap();

        let output = analyze(&path, true, 20.0).unwrap();
        let entries: Vec<DiagnosticReport> = serde_json::from_str(&output).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].summary_line(), "Microphone: WARN");
        assert_eq!(entries[0].sha256.len(), 64);
    }

    #[test]
    fn test_analyze_missing_file() {
        let err = analyze(Path::new("/nonexistent/mic.wav"), false, 20.0).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }
}
