//! Audio Buffer Management
//!
//! Provides the decoded audio buffer type and the level measurements the
//! analyzer runs over it. Samples are stored non-interleaved as 32-bit
//! floats normalized to [-1.0, 1.0].

use crate::error::{Result, SnrError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Calculate the linear RMS (Root Mean Square) level of a sample slice
///
/// Accumulates in f64. The RMS of an empty slice is defined as 0.0 so that
/// zero-length recordings still produce a finite measurement.
pub fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_squares: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();

    (sum_squares / samples.len() as f64).sqrt()
}

/// Calculate the peak absolute sample value of a slice
///
/// Returns 0.0 for an empty slice.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|&s| s.abs()).fold(0.0_f32, f32::max)
}

// ============================================================================
// Audio Buffer
// ============================================================================

/// Decoded audio, one `Vec<f32>` per channel
///
/// # Example
/// ```
/// use micsnr::engine::buffer::AudioBuffer;
///
/// // Half a second of stereo silence at 48kHz
/// let buffer = AudioBuffer::new(24_000, 2, 48_000);
/// assert_eq!(buffer.channels(), 2);
/// assert_eq!(buffer.len(), 24_000);
/// assert_eq!(buffer.duration_secs(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample data: outer Vec is channels, inner Vec is samples
    pub samples: Vec<Vec<f32>>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a zeroed buffer with `num_channels` channels of `num_samples` each
    pub fn new(num_samples: usize, num_channels: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![vec![0.0_f32; num_samples]; num_channels],
            sample_rate,
        }
    }

    /// Wrap a single channel of samples
    pub fn from_mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples: vec![samples],
            sample_rate,
        }
    }

    /// Create an audio buffer from interleaved sample data
    ///
    /// # Arguments
    /// * `interleaved` - Interleaved frames (L, R, L, R, ... for stereo)
    /// * `num_channels` - Channels per frame, at least 1
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Errors
    /// * `UnsupportedFormat` - If `num_channels` is zero
    /// * `InvalidAudio` - If the data does not split into whole frames
    pub fn from_interleaved(
        interleaved: &[f32],
        num_channels: usize,
        sample_rate: u32,
    ) -> Result<Self> {
        if num_channels == 0 {
            return Err(SnrError::UnsupportedFormat {
                format: "0-channel audio".to_string(),
            });
        }

        if interleaved.len() % num_channels != 0 {
            return Err(SnrError::InvalidAudio {
                reason: format!(
                    "Interleaved data length {} is not divisible by channel count {}",
                    interleaved.len(),
                    num_channels
                ),
                source: None,
            });
        }

        let num_samples = interleaved.len() / num_channels;
        let mut samples = vec![Vec::with_capacity(num_samples); num_channels];

        for frame in interleaved.chunks_exact(num_channels) {
            for (ch, &sample) in frame.iter().enumerate() {
                samples[ch].push(sample);
            }
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Convert the buffer to interleaved format
    pub fn to_interleaved(&self) -> Vec<f32> {
        let num_channels = self.channels();
        let num_samples = self.len();

        let mut interleaved = Vec::with_capacity(num_channels * num_samples);

        for sample_idx in 0..num_samples {
            for channel in &self.samples {
                interleaved.push(channel[sample_idx]);
            }
        }

        interleaved
    }

    /// Collapse all channels into one by averaging each frame
    ///
    /// The average is taken in f64, so a frame whose channels all hold the
    /// same value collapses to exactly that value.
    pub fn to_mono(&self) -> Vec<f32> {
        match self.samples.as_slice() {
            [] => Vec::new(),
            [only] => only.clone(),
            channels => {
                let count = channels.len() as f64;
                (0..self.len())
                    .map(|i| {
                        let sum: f64 = channels.iter().map(|ch| ch[i] as f64).sum();
                        (sum / count) as f32
                    })
                    .collect()
            }
        }
    }

    /// Get the number of channels
    #[inline]
    pub fn channels(&self) -> usize {
        self.samples.len()
    }

    /// Get the number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Check if the buffer is empty (no samples)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the duration in seconds
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Get immutable access to a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.samples[index]
    }

    /// Get mutable access to a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel_mut(&mut self, index: usize) -> &mut [f32] {
        &mut self.samples[index]
    }
}

// ============================================================================
// Tests
// ============================================================================
