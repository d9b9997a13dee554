//! Audio buffer input contract.
//!
//! The encoder reads audio through the [`AudioBuffer`] trait so callers can hand
//! over whatever planar storage they already have. [`PlanarBuffer`] is the owned
//! implementation used by the CLI and tests.

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, EncodeResult};
use crate::wav::{BYTES_PER_SAMPLE, HEADER_LEN, MAX_CHANNELS};

/// Read-only view of multi-channel floating point audio.
///
/// Every channel is expected to hold exactly [`length`](AudioBuffer::length)
/// samples, nominally in `[-1.0, 1.0]`.
pub trait AudioBuffer {
    /// Sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Number of channels.
    fn number_of_channels(&self) -> usize;

    /// Samples per channel.
    fn length(&self) -> usize;

    /// Samples of one channel.
    ///
    /// Only called with `channel < number_of_channels()`.
    fn channel_data(&self, channel: usize) -> &[f32];
}

/// Owned planar audio buffer, one sample vector per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Per-channel samples.
    pub channels: Vec<Vec<f32>>,
}

impl PlanarBuffer {
    /// Creates a buffer from per-channel sample vectors.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Creates a buffer of silence.
    pub fn silence(sample_rate: u32, num_channels: usize, length: usize) -> Self {
        Self {
            sample_rate,
            channels: vec![vec![0.0; length]; num_channels],
        }
    }

    /// Splits frame-interleaved samples into planar channels.
    pub fn from_interleaved(
        sample_rate: u32,
        num_channels: usize,
        samples: &[f32],
    ) -> EncodeResult<Self> {
        if num_channels == 0 {
            return Err(EncodeError::invalid_input(
                "interleaved input needs at least one channel",
            ));
        }
        if !samples.len().is_multiple_of(num_channels) {
            return Err(EncodeError::invalid_input(format!(
                "{} interleaved samples do not divide into {} channels",
                samples.len(),
                num_channels
            )));
        }

        let length = samples.len() / num_channels;
        let mut channels = vec![Vec::with_capacity(length); num_channels];
        for frame in samples.chunks_exact(num_channels) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }
}

impl AudioBuffer for PlanarBuffer {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    fn length(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    fn channel_data(&self, channel: usize) -> &[f32] {
        &self.channels[channel]
    }
}

/// Checks that a buffer fits a 16-bit PCM RIFF file.
///
/// Runs before any output is allocated. Size limits are checked against the
/// declared `length()` before any channel is touched.
pub fn validate<B: AudioBuffer + ?Sized>(buffer: &B) -> EncodeResult<()> {
    let num_channels = buffer.number_of_channels();
    if num_channels == 0 {
        return Err(EncodeError::invalid_input("buffer has no channels"));
    }
    if num_channels > MAX_CHANNELS as usize {
        return Err(EncodeError::invalid_input(format!(
            "{} channels overflow the 16-bit BlockAlign field (at most {} channels)",
            num_channels, MAX_CHANNELS
        )));
    }
    if buffer.sample_rate() == 0 {
        return Err(EncodeError::invalid_input("sample rate must be positive"));
    }

    let length = buffer.length();
    let block_align = num_channels as u64 * BYTES_PER_SAMPLE as u64;
    let riff_limit = u32::MAX as u64 - (HEADER_LEN as u64 - 8);
    let data_len = (length as u64).checked_mul(block_align);
    if data_len.is_none_or(|len| len > riff_limit) {
        return Err(EncodeError::invalid_input(format!(
            "{} frames of {} channels overflow the 32-bit RIFF size fields",
            length, num_channels
        )));
    }

    if buffer.sample_rate() as u64 * block_align > u32::MAX as u64 {
        return Err(EncodeError::invalid_input(format!(
            "byte rate of {} Hz x {} channels overflows 32 bits",
            buffer.sample_rate(),
            num_channels
        )));
    }

    for channel in 0..num_channels {
        let found = buffer.channel_data(channel).len();
        if found != length {
            return Err(EncodeError::invalid_input(format!(
                "channel {} has {} samples, expected {}",
                channel, found, length
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Declares a length that its channels do not honor.
    struct Lying {
        channels: Vec<Vec<f32>>,
        length: usize,
    }

    impl AudioBuffer for Lying {
        fn sample_rate(&self) -> u32 {
            44100
        }

        fn number_of_channels(&self) -> usize {
            self.channels.len()
        }

        fn length(&self) -> usize {
            self.length
        }

        fn channel_data(&self, channel: usize) -> &[f32] {
            &self.channels[channel]
        }
    }

    #[test]
    fn test_planar_buffer_accessors() {
        let buffer = PlanarBuffer::new(48000, vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]);
        assert_eq!(buffer.sample_rate(), 48000);
        assert_eq!(buffer.number_of_channels(), 2);
        assert_eq!(buffer.length(), 3);
        assert_eq!(buffer.channel_data(1), &[0.4, 0.5, 0.6]);
    }

    #[test]
    fn test_silence() {
        let buffer = PlanarBuffer::silence(22050, 3, 10);
        assert_eq!(buffer.number_of_channels(), 3);
        assert_eq!(buffer.length(), 10);
        assert!(buffer.channels.iter().flatten().all(|&s| s == 0.0));
    }

    #[test]
    fn test_from_interleaved() {
        let buffer = PlanarBuffer::from_interleaved(44100, 2, &[0.0, -0.5, 0.5, 0.0]).unwrap();
        assert_eq!(buffer.channels, vec![vec![0.0, 0.5], vec![-0.5, 0.0]]);
    }

    #[test]
    fn test_from_interleaved_rejects_ragged_input() {
        let err = PlanarBuffer::from_interleaved(44100, 2, &[0.0, 0.1, 0.2]).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidInput { .. }));

        let err = PlanarBuffer::from_interleaved(44100, 0, &[]).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_channels_have_zero_length() {
        let buffer = PlanarBuffer::new(44100, vec![]);
        assert_eq!(buffer.length(), 0);
    }

    #[test]
    fn test_validate_accepts_well_formed_buffers() {
        assert!(validate(&PlanarBuffer::silence(44100, 1, 0)).is_ok());
        assert!(validate(&PlanarBuffer::silence(44100, 2, 512)).is_ok());
        assert!(validate(&PlanarBuffer::silence(192000, 8, 16)).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_channels() {
        let err = validate(&PlanarBuffer::new(44100, vec![])).unwrap_err();
        assert!(err.to_string().contains("no channels"));
    }

    #[test]
    fn test_validate_rejects_zero_sample_rate() {
        let err = validate(&PlanarBuffer::silence(0, 1, 4)).unwrap_err();
        assert!(err.to_string().contains("sample rate"));
    }

    #[test]
    fn test_validate_rejects_mismatched_channels() {
        let buffer = PlanarBuffer::new(44100, vec![vec![0.0; 4], vec![0.0; 3]]);
        let err = validate(&buffer).unwrap_err();
        assert!(err.to_string().contains("channel 1 has 3 samples, expected 4"));
    }

    #[test]
    fn test_validate_uses_declared_length() {
        let buffer = Lying {
            channels: vec![vec![0.0; 2]],
            length: 5,
        };
        assert!(validate(&buffer).is_err());
    }

    #[test]
    fn test_validate_rejects_riff_overflow() {
        let buffer = Lying {
            channels: vec![Vec::new()],
            length: (u32::MAX / 2) as usize,
        };
        let err = validate(&buffer).unwrap_err();
        assert!(err.to_string().contains("RIFF"));
    }

    #[test]
    fn test_validate_rejects_block_align_overflow() {
        // A 1 Hz rate keeps ByteRate small; only BlockAlign overflows.
        for channels in [MAX_CHANNELS as usize + 1, 40000, u16::MAX as usize + 1] {
            let err = validate(&PlanarBuffer::silence(1, channels, 0)).unwrap_err();
            assert!(matches!(err, EncodeError::InvalidInput { .. }));
            assert!(err.to_string().contains("BlockAlign"), "{}", err);
        }
    }

    #[test]
    fn test_validate_accepts_max_channels() {
        assert!(validate(&PlanarBuffer::silence(1, MAX_CHANNELS as usize, 0)).is_ok());
    }

    #[test]
    fn test_validate_rejects_byte_rate_overflow() {
        let buffer = PlanarBuffer::silence(u32::MAX, 2, 0);
        let err = validate(&buffer).unwrap_err();
        assert!(err.to_string().contains("byte rate"));
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"sample_rate": 44100, "channels": [[0.0, 0.5], [-0.5, 0.0]]}"#;
        let buffer: PlanarBuffer = serde_json::from_str(json).unwrap();
        assert_eq!(buffer.sample_rate, 44100);
        assert_eq!(buffer.channels[1], vec![-0.5, 0.0]);
    }
}
