#![no_main]

use libfuzzer_sys::fuzz_target;
use pcmwav::{audio_buffer_to_wav_with, EncodeOptions, PlanarBuffer, MAX_CHANNELS};

// Layout: [channels - 1 (2 bytes LE), rate (4 bytes LE), samples as f32 LE...]
fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    let num_channels = u16::from_le_bytes([data[0], data[1]]) as usize + 1;
    let sample_rate = u32::from_le_bytes([data[2], data[3], data[4], data[5]]);
    let samples: Vec<f32> = data[6..]
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    let usable = samples.len() - samples.len() % num_channels;

    let Ok(buffer) = PlanarBuffer::from_interleaved(sample_rate, num_channels, &samples[..usable])
    else {
        return;
    };
    let length = usable / num_channels;

    for options in [EncodeOptions::standard(), EncodeOptions::bit_compatible()] {
        match audio_buffer_to_wav_with(&buffer, &options) {
            Ok(wav) => {
                assert_eq!(wav.len(), 44 + length * num_channels * 2);
                assert_eq!(&wav[0..4], b"RIFF");
                let block_align = u16::from_le_bytes([wav[32], wav[33]]);
                assert_eq!(block_align as usize, num_channels * 2);
            }
            // Rejected only for a zero sample rate, a BlockAlign past 16 bits,
            // or a byte rate past 32 bits.
            Err(_) => {
                let byte_rate = sample_rate as u64 * num_channels as u64 * 2;
                assert!(
                    sample_rate == 0
                        || num_channels > MAX_CHANNELS as usize
                        || byte_rate > u32::MAX as u64
                );
            }
        }
    }
});
