//! Loading audio buffers and encoding options from disk.
//!
//! Buffers are JSON documents of the form
//! `{"sample_rate": 44100, "channels": [[...], [...]]}`. Options files hold a
//! serialized [`EncodeOptions`]; command-line flags are applied on top.

use pcmwav::{EncodeOptions, PlanarBuffer, SampleLayout, SampleScaling};
use std::path::{Path, PathBuf};

/// Recognized buffer and options file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// A buffer loaded from disk.
#[derive(Debug)]
pub struct LoadedBuffer {
    /// The decoded buffer.
    pub buffer: PlanarBuffer,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading input files.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// A command-line override could not be parsed.
    InvalidOption { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
            InputError::InvalidOption { message } => {
                write!(f, "invalid option: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Encoding overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    /// Path to a JSON options file.
    pub options_file: Option<String>,
    /// Sample layout flag.
    pub layout: Option<String>,
    /// Sample scaling flag.
    pub scaling: Option<String>,
    /// Start from the legacy-compatible options.
    pub bit_compatible: bool,
}

impl OptionOverrides {
    /// Resolves the final options.
    ///
    /// Precedence, lowest first: defaults or `--bit-compatible`, the options
    /// file, then explicit `--layout` / `--scaling` flags.
    pub fn resolve(&self) -> Result<EncodeOptions, InputError> {
        let mut options = if self.bit_compatible {
            EncodeOptions::bit_compatible()
        } else {
            EncodeOptions::default()
        };

        if let Some(path) = &self.options_file {
            options = load_options(Path::new(path))?;
        }
        if let Some(layout) = &self.layout {
            let layout: SampleLayout = layout
                .parse()
                .map_err(|message| InputError::InvalidOption { message })?;
            options = options.with_layout(layout);
        }
        if let Some(scaling) = &self.scaling {
            let scaling: SampleScaling = scaling
                .parse()
                .map_err(|message| InputError::InvalidOption { message })?;
            options = options.with_scaling(scaling);
        }

        Ok(options)
    }
}

/// Load a planar audio buffer from a JSON file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use pcmwav_cli::input::load_buffer;
///
/// let loaded = load_buffer(Path::new("buffer.json")).unwrap();
/// println!("{} Hz", loaded.buffer.sample_rate);
/// ```
pub fn load_buffer(path: &Path) -> Result<LoadedBuffer, InputError> {
    let content = read_json_file(path)?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let buffer = serde_json::from_str(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadedBuffer {
        buffer,
        source_hash,
    })
}

/// Load encoding options from a JSON file.
pub fn load_options(path: &Path) -> Result<EncodeOptions, InputError> {
    let content = read_json_file(path)?;
    serde_json::from_str(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })
}

fn read_json_file(path: &Path) -> Result<String, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_buffer() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("buffer.json");
        std::fs::write(
            &path,
            r#"{"sample_rate": 22050, "channels": [[0.0, 0.25], [0.5, -0.5]]}"#,
        )
        .unwrap();

        let loaded = load_buffer(&path).unwrap();
        assert_eq!(loaded.buffer.sample_rate, 22050);
        assert_eq!(loaded.buffer.channels.len(), 2);
        assert_eq!(loaded.source_hash.len(), 64);
    }

    #[test]
    fn test_load_unknown_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("buffer.yaml");
        std::fs::write(&path, "sample_rate: 44100").unwrap();

        let result = load_buffer(&path);
        assert!(matches!(
            result,
            Err(InputError::UnknownExtension { extension: Some(ref ext) }) if ext == "yaml"
        ));
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load_buffer(Path::new("/nonexistent/buffer.json"));
        assert!(matches!(result, Err(InputError::FileRead { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("invalid.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let result = load_buffer(&path);
        assert!(matches!(result, Err(InputError::JsonParse { .. })));
    }

    #[test]
    fn test_resolve_defaults() {
        let options = OptionOverrides::default().resolve().unwrap();
        assert_eq!(options, EncodeOptions::standard());

        let options = OptionOverrides {
            bit_compatible: true,
            ..Default::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(options, EncodeOptions::bit_compatible());
    }

    #[test]
    fn test_resolve_flags_override_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("options.json");
        std::fs::write(&path, r#"{"layout": "channel_grouped", "scaling": "wrapping"}"#).unwrap();

        let overrides = OptionOverrides {
            options_file: Some(path.to_string_lossy().into_owned()),
            scaling: Some("clamped".to_string()),
            ..Default::default()
        };
        let options = overrides.resolve().unwrap();
        assert_eq!(options.layout, SampleLayout::ChannelGrouped);
        assert_eq!(options.scaling, SampleScaling::Clamped);
    }

    #[test]
    fn test_resolve_rejects_unknown_layout() {
        let overrides = OptionOverrides {
            layout: Some("planar".to_string()),
            ..Default::default()
        };
        let err = overrides.resolve().unwrap_err();
        assert!(matches!(err, InputError::InvalidOption { .. }));
        assert!(err.to_string().contains("planar"));
    }
}
