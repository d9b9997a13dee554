//! Core WAV writing.

use std::io::{self, Write};

use crate::buffer::{validate, AudioBuffer};
use crate::error::EncodeResult;

use super::chunk::ChunkWriter;
use super::format::{WavFormat, HEADER_LEN};
use super::options::{EncodeOptions, SampleLayout};
use super::pcm::sample_to_pcm16;

/// PCM format tag in the fmt chunk.
const WAVE_FORMAT_PCM: u16 = 1;

/// Size of the fmt chunk body for plain PCM.
const FMT_CHUNK_LEN: u32 = 16;

/// Encodes a buffer as standard 16-bit PCM WAV.
///
/// Uses [`EncodeOptions::default`]: frame-interleaved samples scaled by 32767
/// and clamped. See [`audio_buffer_to_wav_with`] to pick other behaviour.
///
/// The returned vector is exactly `44 + length * channels * 2` bytes long.
///
/// # Example
/// ```
/// use pcmwav::{audio_buffer_to_wav, PlanarBuffer};
///
/// let buffer = PlanarBuffer::new(44100, vec![vec![0.0, 0.5], vec![-0.5, 0.0]]);
/// let wav = audio_buffer_to_wav(&buffer).unwrap();
/// assert_eq!(wav.len(), 44 + 2 * 2 * 2);
/// assert_eq!(&wav[0..4], b"RIFF");
/// ```
pub fn audio_buffer_to_wav<B: AudioBuffer + ?Sized>(buffer: &B) -> EncodeResult<Vec<u8>> {
    audio_buffer_to_wav_with(buffer, &EncodeOptions::default())
}

/// Encodes a buffer as 16-bit PCM WAV with explicit options.
///
/// The input is validated first; nothing is allocated for invalid input. The
/// output is allocated once at its final size.
pub fn audio_buffer_to_wav_with<B: AudioBuffer + ?Sized>(
    buffer: &B,
    options: &EncodeOptions,
) -> EncodeResult<Vec<u8>> {
    validate(buffer)?;
    let format = WavFormat::for_buffer(buffer);
    let len = format.file_len(buffer.length());

    let mut out = ChunkWriter::new(Vec::with_capacity(len));
    write_chunks(&mut out, &format, buffer, options)?;
    debug_assert_eq!(out.position(), len);

    Ok(out.into_inner())
}

/// Streams the encoded file into a writer.
///
/// Produces the same bytes as [`audio_buffer_to_wav_with`]. Fails with
/// [`EncodeError::Io`](crate::EncodeError::Io) if the writer does.
pub fn write_wav<W: Write, B: AudioBuffer + ?Sized>(
    writer: &mut W,
    buffer: &B,
    options: &EncodeOptions,
) -> EncodeResult<()> {
    validate(buffer)?;
    let format = WavFormat::for_buffer(buffer);

    let mut out = ChunkWriter::new(writer);
    write_chunks(&mut out, &format, buffer, options)?;
    debug_assert_eq!(out.position(), format.file_len(buffer.length()));

    Ok(())
}

/// Size in bytes of the file [`audio_buffer_to_wav`] would produce.
pub fn encoded_len<B: AudioBuffer + ?Sized>(buffer: &B) -> EncodeResult<usize> {
    validate(buffer)?;
    Ok(WavFormat::for_buffer(buffer).file_len(buffer.length()))
}

/// Writes header and samples. The buffer must already be validated.
fn write_chunks<W: Write, B: AudioBuffer + ?Sized>(
    out: &mut ChunkWriter<W>,
    format: &WavFormat,
    buffer: &B,
    options: &EncodeOptions,
) -> io::Result<()> {
    let frames = buffer.length();
    let data_len = format.data_len(frames) as u32;
    let riff_len = (format.file_len(frames) - 8) as u32;

    // RIFF header
    out.tag(b"RIFF")?;
    out.u32(riff_len)?;
    out.tag(b"WAVE")?;

    // fmt chunk
    out.tag(b"fmt ")?;
    out.u32(FMT_CHUNK_LEN)?;
    out.u16(WAVE_FORMAT_PCM)?;
    out.u16(format.channels)?;
    out.u32(format.sample_rate)?;
    out.u32(format.byte_rate())?;
    out.u16(format.block_align())?;
    out.u16(format.bits_per_sample)?;

    // data chunk
    out.tag(b"data")?;
    out.u32(data_len)?;
    debug_assert_eq!(out.position(), HEADER_LEN);

    let channels: Vec<&[f32]> = (0..format.channels as usize)
        .map(|channel| buffer.channel_data(channel))
        .collect();
    let scaling = options.scaling;

    match options.layout {
        SampleLayout::Interleaved => {
            for frame in 0..frames {
                for samples in &channels {
                    out.i16(sample_to_pcm16(samples[frame], scaling))?;
                }
            }
        }
        SampleLayout::ChannelGrouped => {
            for samples in &channels {
                for &sample in samples.iter() {
                    out.i16(sample_to_pcm16(sample, scaling))?;
                }
            }
        }
    }

    Ok(())
}
