//! Encoding options: PCM sample order and float-to-integer scaling.
//!
//! Two behaviours exist for each knob. The standard ones produce a WAV file any
//! player reads correctly. The alternatives reproduce the output of the legacy
//! exporter byte-for-byte, quirks included:
//!
//! - [`SampleLayout::ChannelGrouped`] writes every sample of channel 0, then
//!   every sample of channel 1, and so on. Players expect frames, so anything
//!   with more than one channel plays back garbled.
//! - [`SampleScaling::Wrapping`] multiplies by 65535 instead of 32767 and wraps
//!   on overflow instead of clamping, so full-scale input comes out at roughly
//!   double amplitude with sign flips.
//!
//! Use [`EncodeOptions::bit_compatible`] when output must match files produced
//! by that exporter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order of PCM samples in the data chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleLayout {
    /// Frame-interleaved: `ch0[0], ch1[0], ch0[1], ch1[1], ...`.
    #[default]
    Interleaved,
    /// Channel-grouped: `ch0[0], ch0[1], ..., ch1[0], ch1[1], ...`.
    ///
    /// Not valid WAV for more than one channel.
    ChannelGrouped,
}

impl SampleLayout {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleLayout::Interleaved => "interleaved",
            SampleLayout::ChannelGrouped => "channel-grouped",
        }
    }
}

impl fmt::Display for SampleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SampleLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interleaved" => Ok(SampleLayout::Interleaved),
            "channel-grouped" | "channel_grouped" => Ok(SampleLayout::ChannelGrouped),
            other => Err(format!(
                "unknown sample layout '{}' (expected interleaved or channel-grouped)",
                other
            )),
        }
    }
}

/// Conversion from float samples to 16-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleScaling {
    /// `round(sample * 32767)` clamped to the `i16` range.
    #[default]
    Clamped,
    /// `sample * 65535` truncated toward zero and wrapped modulo 2^16.
    Wrapping,
}

impl SampleScaling {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleScaling::Clamped => "clamped",
            SampleScaling::Wrapping => "wrapping",
        }
    }
}

impl fmt::Display for SampleScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SampleScaling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clamped" => Ok(SampleScaling::Clamped),
            "wrapping" => Ok(SampleScaling::Wrapping),
            other => Err(format!(
                "unknown sample scaling '{}' (expected clamped or wrapping)",
                other
            )),
        }
    }
}

/// Options controlling how samples are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Sample order in the data chunk.
    pub layout: SampleLayout,
    /// Float to integer conversion.
    pub scaling: SampleScaling,
}

impl EncodeOptions {
    /// Standard, player-compatible output. Same as `Default`.
    pub fn standard() -> Self {
        Self {
            layout: SampleLayout::Interleaved,
            scaling: SampleScaling::Clamped,
        }
    }

    /// Byte-for-byte reproduction of the legacy exporter.
    pub fn bit_compatible() -> Self {
        Self {
            layout: SampleLayout::ChannelGrouped,
            scaling: SampleScaling::Wrapping,
        }
    }

    /// Returns these options with a different layout.
    pub fn with_layout(mut self, layout: SampleLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Returns these options with a different scaling.
    pub fn with_scaling(mut self, scaling: SampleScaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// True when both knobs match the legacy exporter.
    pub fn is_bit_compatible(&self) -> bool {
        *self == Self::bit_compatible()
    }
}
