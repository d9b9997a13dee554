//! JSON output types for machine-readable CLI output.
//!
//! Emitted by `encode` and `plan` when `--json` is given.

use pcmwav::{EncodeError, WavFormat};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Encoder errors pass through the library's own `WAV_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Invalid --layout / --scaling value
    pub const INVALID_OPTION: &str = "CLI_004";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_005";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAV_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new JSON error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the related file.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&InputError> for JsonError {
    fn from(err: &InputError) -> Self {
        let code = match err {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
            InputError::InvalidOption { .. } => error_codes::INVALID_OPTION,
        };
        JsonError::new(code, err.to_string())
    }
}

impl From<&EncodeError> for JsonError {
    fn from(err: &EncodeError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

/// Header fields as they will be written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderInfo {
    /// NumChannels
    pub channels: u16,
    /// SampleRate
    pub sample_rate: u32,
    /// ByteRate
    pub byte_rate: u32,
    /// BlockAlign
    pub block_align: u16,
    /// BitsPerSample
    pub bits_per_sample: u16,
    /// ChunkSize (file length minus 8)
    pub riff_size: u32,
    /// Subchunk2Size
    pub data_size: u32,
}

impl HeaderInfo {
    /// Header for `frames` sample frames in `format`.
    pub fn new(format: &WavFormat, frames: usize) -> Self {
        Self {
            channels: format.channels,
            sample_rate: format.sample_rate,
            byte_rate: format.byte_rate(),
            block_align: format.block_align(),
            bits_per_sample: format.bits_per_sample,
            riff_size: (format.file_len(frames) - 8) as u32,
            data_size: format.data_len(frames) as u32,
        }
    }
}

/// Result details for a successful encode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncodeReport {
    /// Path of the written WAV file
    pub output: String,
    /// Total file size in bytes
    pub bytes: usize,
    /// Samples per channel
    pub frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Sample layout used
    pub layout: String,
    /// Sample scaling used
    pub scaling: String,
    /// Whether the output matches the legacy exporter byte-for-byte
    pub bit_compatible: bool,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// BLAKE3 hash of the input file
    pub source_hash: String,
    /// Header fields written
    pub header: HeaderInfo,
    /// Non-fatal notes (e.g. non-standard layout)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// JSON output for the encode command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncodeOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Input buffer path
    pub input: String,
    /// Errors (empty on success)
    pub errors: Vec<JsonError>,
    /// Result details (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EncodeReport>,
}

impl EncodeOutput {
    /// Creates a successful output.
    pub fn success(input: String, result: EncodeReport) -> Self {
        Self {
            success: true,
            input,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(input: String, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            input,
            errors,
            result: None,
        }
    }
}

/// JSON output for the plan command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Input buffer path
    pub input: String,
    /// Errors (empty on success)
    pub errors: Vec<JsonError>,
    /// Planned file size in bytes (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Planned header (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderInfo>,
}
