//! Audio Engine Module
//!
//! Decoded audio buffers and WAV file I/O.

pub mod buffer;
pub mod io;

pub use buffer::{peak, rms, AudioBuffer};
pub use io::{export_audio, import_audio, ExportFormat};
