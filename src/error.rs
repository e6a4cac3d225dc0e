//! Error handling for micsnr
//!
//! Every failure is fatal to a single analysis run; errors carry a stable
//! code and a short list of things the user can try.

use thiserror::Error;

/// Result type alias for micsnr operations
pub type Result<T> = std::result::Result<T, SnrError>;

/// Main error type for micsnr operations
#[derive(Error, Debug)]
pub enum SnrError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SnrError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            SnrError::FileNotFound { .. } => "FILE_NOT_FOUND",
            SnrError::InvalidAudio { .. } => "INVALID_AUDIO",
            SnrError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            SnrError::Io(_) => "IO_ERROR",
            SnrError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SnrError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the recording was copied off the device",
            ],
            SnrError::InvalidAudio { .. } => vec![
                "Convert the recording to WAV first",
                "Check if the file plays in another application",
                "The file may be truncated - try recording again",
            ],
            SnrError::UnsupportedFormat { .. } => vec![
                "Re-export as 16-bit, 24-bit or 32-bit float WAV",
            ],
            SnrError::Io(_) => vec!["Check file permissions"],
            SnrError::Serialization(_) => vec![],
        }
    }
}
