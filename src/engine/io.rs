//! Audio file I/O for micsnr
//!
//! Decodes WAV recordings into an [`AudioBuffer`] at their native sample
//! rate and channel count. Nothing is resampled or validated beyond what
//! decoding requires; empty recordings are returned as empty buffers.
//!
//! Writing is provided for producing test recordings.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::engine::buffer::AudioBuffer;
use crate::error::{Result, SnrError};

/// Export format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFormat {
    /// Bit depth: 16, 24, or 32 (default: 16)
    pub bit_depth: u16,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat { bit_depth: 16 }
    }
}

impl ExportFormat {
    /// Create a new export format with the given bit depth
    pub fn new(bit_depth: u16) -> Self {
        ExportFormat { bit_depth }
    }

    /// 32-bit float, lossless for in-memory buffers
    pub fn float() -> Self {
        ExportFormat { bit_depth: 32 }
    }
}

/// Import an audio file
///
/// Reads a WAV file and converts every sample to f32 in [-1.0, 1.0].
/// Integer samples are divided by `2^(bits - 1)`.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidAudio` - If the file is not a decodable WAV file
/// * `UnsupportedFormat` - If the integer bit depth is not 8, 16, 24 or 32
pub fn import_audio(path: &Path) -> Result<AudioBuffer> {
    if !path.exists() {
        return Err(SnrError::FileNotFound {
            path: path.display().to_string(),
            source: None,
        });
    }

    let reader = WavReader::open(path).map_err(|e| match e {
        hound::Error::IoError(io) => SnrError::Io(io),
        other => SnrError::InvalidAudio {
            reason: format!("Failed to open WAV file: {}", other),
            source: Some(Box::new(other)),
        },
    })?;

    let spec = reader.spec();
    debug!(
        "Decoding {}: {} ch, {} Hz, {}-bit {:?}",
        path.display(),
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );

    let samples = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)?;

    AudioBuffer::from_interleaved(&samples, spec.channels as usize, spec.sample_rate)
}

/// Export an AudioBuffer to a WAV file at the buffer's own sample rate
///
/// # Errors
/// * `UnsupportedFormat` - If the bit depth is not 16, 24 or 32
/// * `Io` - If the file cannot be written
pub fn export_audio(buffer: &AudioBuffer, path: &Path, format: ExportFormat) -> Result<()> {
    let spec = WavSpec {
        channels: buffer.channels() as u16,
        sample_rate: buffer.sample_rate,
        bits_per_sample: format.bit_depth,
        sample_format: if format.bit_depth == 32 {
            SampleFormat::Float
        } else {
            SampleFormat::Int
        },
    };

    if !matches!(format.bit_depth, 16 | 24 | 32) {
        return Err(SnrError::UnsupportedFormat {
            format: format!("{}-bit audio (only 16, 24, 32 supported)", format.bit_depth),
        });
    }

    let mut writer = WavWriter::create(path, spec).map_err(to_io_error)?;

    for sample in buffer.to_interleaved() {
        match format.bit_depth {
            16 => {
                let scaled = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
                writer.write_sample(scaled).map_err(to_io_error)?;
            }
            24 => {
                // 24-bit stored as i32 in hound
                let scaled = (sample * 8388607.0).clamp(-8388608.0, 8388607.0) as i32;
                writer.write_sample(scaled).map_err(to_io_error)?;
            }
            _ => writer.write_sample(sample).map_err(to_io_error)?,
        }
    }

    writer.finalize().map_err(to_io_error)?;

    Ok(())
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn to_io_error(e: hound::Error) -> SnrError {
    match e {
        hound::Error::IoError(io) => SnrError::Io(io),
        other => SnrError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            other.to_string(),
        )),
    }
}

/// Read samples from WAV reader and convert to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    let scale = match (sample_format, bits_per_sample) {
        (SampleFormat::Float, _) => {
            return reader
                .samples::<f32>()
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| invalid_samples("float", e));
        }
        (SampleFormat::Int, 8 | 16 | 24 | 32) => (1_u64 << (bits_per_sample - 1)) as f64,
        (SampleFormat::Int, bits) => {
            return Err(SnrError::UnsupportedFormat {
                format: format!("{}-bit integer audio", bits),
            });
        }
    };

    // hound widens 8-bit unsigned WAV data to signed values, so every
    // integer depth reads through i32.
    reader
        .samples::<i32>()
        .map(|s| s.map(|v| (v as f64 / scale) as f32))
        .collect::<std::result::Result<Vec<f32>, _>>()
        .map_err(|e| invalid_samples(&format!("{}-bit", bits_per_sample), e))
}

fn invalid_samples(kind: &str, e: hound::Error) -> SnrError {
    SnrError::InvalidAudio {
        reason: format!("Failed to read {} samples: {}", kind, e),
        source: Some(Box::new(e)),
    }
}

// ============================================================================
// Tests
// ============================================================================
