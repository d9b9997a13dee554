//! 16-bit PCM WAV encoder.
//!
//! Writes a fixed 44-byte RIFF/WAVE/fmt/data header followed by the sample
//! payload. No timestamps or optional chunks are written, so equal input
//! always gives byte-identical output.

mod chunk;
mod format;
mod options;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::{WavFormat, BITS_PER_SAMPLE, BYTES_PER_SAMPLE, HEADER_LEN, MAX_CHANNELS};
pub use options::{EncodeOptions, SampleLayout, SampleScaling};
pub use pcm::{sample_to_pcm16, wrap_to_i16, CLAMPED_SCALE, WRAPPING_SCALE};
pub use result::WavResult;
pub use writer::{audio_buffer_to_wav, audio_buffer_to_wav_with, encoded_len, write_wav};
