//! WAV encoding result type.

use crate::buffer::AudioBuffer;
use crate::error::EncodeResult;

use super::format::{WavFormat, HEADER_LEN};
use super::options::EncodeOptions;
use super::writer::audio_buffer_to_wav_with;

/// Encoded file plus a fingerprint of its audio.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only, as hex.
    pub pcm_hash: String,
    /// Header parameters that were written.
    pub format: WavFormat,
    /// Number of sample frames (samples per channel).
    pub num_frames: usize,
    /// Options the file was encoded with.
    pub options: EncodeOptions,
}

impl WavResult {
    /// Encodes a buffer and fingerprints the PCM payload.
    pub fn encode<B: AudioBuffer + ?Sized>(
        buffer: &B,
        options: &EncodeOptions,
    ) -> EncodeResult<Self> {
        let wav_data = audio_buffer_to_wav_with(buffer, options)?;
        let pcm_hash = blake3::hash(&wav_data[HEADER_LEN..]).to_hex().to_string();

        Ok(Self {
            wav_data,
            pcm_hash,
            format: WavFormat::for_buffer(buffer),
            num_frames: buffer.length(),
            options: *options,
        })
    }

    /// The PCM payload following the header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.wav_data[HEADER_LEN..]
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.format.sample_rate as f64
    }
}
