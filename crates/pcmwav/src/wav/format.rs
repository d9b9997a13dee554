//! WAV file format parameters.

use crate::buffer::AudioBuffer;

/// Size of the canonical RIFF/WAVE/fmt/data header in bytes.
pub const HEADER_LEN: usize = 44;

/// Bits per PCM sample. The only depth this encoder writes.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per PCM sample (per channel).
pub const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;

/// Largest channel count whose BlockAlign (`channels * 2`) fits the u16 field.
pub const MAX_CHANNELS: u16 = u16::MAX / BYTES_PER_SAMPLE;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a format with the given channel count.
    pub fn new(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, sample_rate)
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(2, sample_rate)
    }

    /// Format describing a buffer that already passed [`validate`](crate::validate).
    pub(crate) fn for_buffer<B: AudioBuffer + ?Sized>(buffer: &B) -> Self {
        Self::new(buffer.number_of_channels() as u16, buffer.sample_rate())
    }

    /// Calculates block align (bytes per sample frame).
    ///
    /// Requires `channels <= MAX_CHANNELS`, which [`validate`](crate::validate) enforces.
    pub fn block_align(&self) -> u16 {
        self.channels * BYTES_PER_SAMPLE
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Size of the data chunk payload for `frames` sample frames.
    pub fn data_len(&self, frames: usize) -> usize {
        frames * self.block_align() as usize
    }

    /// Size of the complete file for `frames` sample frames.
    pub fn file_len(&self, frames: usize) -> usize {
        HEADER_LEN + self.data_len(frames)
    }
}
