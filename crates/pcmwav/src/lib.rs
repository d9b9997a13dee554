//! pcmwav
//!
//! Serializes in-memory floating point audio into canonical 16-bit PCM WAV
//! bytes: a 44-byte RIFF header followed by the sample payload.
//!
//! # Overview
//!
//! Callers expose their audio through the [`AudioBuffer`] trait (or use the
//! owned [`PlanarBuffer`]) and get back an owned `Vec<u8>` holding a complete
//! file. Encoding is pure and synchronous; it holds no state between calls.
//!
//! # Compatibility mode
//!
//! [`EncodeOptions::bit_compatible`] reproduces the legacy exporter
//! exactly: channel-grouped sample order and unclamped `x 65535` scaling.
//! Multi-channel files written that way do not play back correctly. The
//! default options write frame-interleaved samples scaled by 32767 and clamped.
//!
//! # Example
//!
//! ```
//! use pcmwav::{audio_buffer_to_wav_with, EncodeOptions, PlanarBuffer};
//!
//! let buffer = PlanarBuffer::new(8000, vec![vec![0.0, 1.0]]);
//! let wav = audio_buffer_to_wav_with(&buffer, &EncodeOptions::bit_compatible())?;
//!
//! // 1.0 * 65535 wraps to -1
//! assert_eq!(&wav[44..], &[0x00, 0x00, 0xFF, 0xFF]);
//! # Ok::<(), pcmwav::EncodeError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - Input contract and validation
//! - [`wav`] - Header layout, sample conversion, and the encoder
//! - [`error`] - Error type

pub mod buffer;
pub mod error;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{validate, AudioBuffer, PlanarBuffer};
pub use error::{EncodeError, EncodeResult};
pub use wav::{
    audio_buffer_to_wav, audio_buffer_to_wav_with, encoded_len, write_wav, EncodeOptions,
    SampleLayout, SampleScaling, WavFormat, WavResult, MAX_CHANNELS,
};
