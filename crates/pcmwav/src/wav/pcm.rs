//! Float to 16-bit PCM sample conversion.

use super::options::SampleScaling;

/// Scale used by [`SampleScaling::Clamped`].
pub const CLAMPED_SCALE: f64 = i16::MAX as f64;

/// Scale used by [`SampleScaling::Wrapping`] (`0xFFFF`).
pub const WRAPPING_SCALE: f64 = u16::MAX as f64;

/// Converts one float sample to a 16-bit PCM value.
///
/// Arithmetic runs in `f64`, so `f32` input gives the same result as a
/// double-precision caller holding the same value.
///
/// NaN converts to 0 under both scalings.
pub fn sample_to_pcm16(sample: f32, scaling: SampleScaling) -> i16 {
    let value = f64::from(sample);
    match scaling {
        SampleScaling::Clamped => (value * CLAMPED_SCALE)
            .round()
            .clamp(i16::MIN as f64, i16::MAX as f64) as i16,
        SampleScaling::Wrapping => wrap_to_i16(value * WRAPPING_SCALE),
    }
}

/// Narrows a float to `i16` with two's-complement wrap-around.
///
/// Truncates toward zero, then reduces modulo 2^16 into two's complement.
/// Non-finite input becomes 0. No clamping: `65535.0` becomes `-1`.
pub fn wrap_to_i16(value: f64) -> i16 {
    if !value.is_finite() {
        return 0;
    }
    // Exact: the truncated value is an integer and fmod is exact.
    let wrapped = value.trunc().rem_euclid(65536.0);
    wrapped as u16 as i16
}
