//! Plan command implementation
//!
//! Shows the header and size an encode would produce, without writing.

use anyhow::{Context, Result};
use colored::Colorize;
use pcmwav::{encoded_len, AudioBuffer, WavFormat};
use std::path::Path;
use std::process::ExitCode;

use crate::input::load_buffer;

use super::json_output::{error_codes, HeaderInfo, JsonError, PlanOutput};

/// Run the plan command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    match plan_file(input) {
        Ok((bytes, header)) if json_output => {
            print_json(&PlanOutput {
                success: true,
                input: input.to_string(),
                errors: Vec::new(),
                bytes: Some(bytes),
                header: Some(header),
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Ok((bytes, header)) => {
            print_human(input, bytes, &header);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) if json_output => {
            print_json(&PlanOutput {
                success: false,
                input: input.to_string(),
                errors: vec![error],
                bytes: None,
                header: None,
            })?;
            Ok(ExitCode::from(1))
        }
        Err(error) => anyhow::bail!(error.message),
    }
}

/// Computes the planned file size and header for a buffer file.
pub fn plan_file(input: &str) -> Result<(usize, HeaderInfo), JsonError> {
    let loaded =
        load_buffer(Path::new(input)).map_err(|e| JsonError::from(&e).with_file(input))?;
    let buffer = &loaded.buffer;

    let bytes = encoded_len(buffer).map_err(|e| JsonError::from(&e))?;
    let format = WavFormat::new(buffer.number_of_channels() as u16, buffer.sample_rate());

    Ok((bytes, HeaderInfo::new(&format, buffer.length())))
}

fn print_human(input: &str, bytes: usize, header: &HeaderInfo) {
    println!("{} {}", "Plan for".cyan().bold(), input);
    println!("  {:<16} {}", "File size:".dimmed(), bytes);
    println!("  {:<16} {}", "ChunkSize:".dimmed(), header.riff_size);
    println!("  {:<16} {}", "NumChannels:".dimmed(), header.channels);
    println!("  {:<16} {}", "SampleRate:".dimmed(), header.sample_rate);
    println!("  {:<16} {}", "ByteRate:".dimmed(), header.byte_rate);
    println!("  {:<16} {}", "BlockAlign:".dimmed(), header.block_align);
    println!("  {:<16} {}", "BitsPerSample:".dimmed(), header.bits_per_sample);
    println!("  {:<16} {}", "Subchunk2Size:".dimmed(), header.data_size);
}

fn print_json(output: &PlanOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output).with_context(|| {
        format!(
            "{}: failed to serialize plan output",
            error_codes::JSON_SERIALIZE
        )
    })?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("buffer.json");
        std::fs::write(
            &path,
            r#"{"sample_rate": 48000, "channels": [[0.0, 0.1, 0.2], [0.0, 0.1, 0.2]]}"#,
        )
        .unwrap();

        let (bytes, header) = plan_file(&path.to_string_lossy()).unwrap();
        assert_eq!(bytes, 44 + 3 * 2 * 2);
        assert_eq!(
            header,
            HeaderInfo {
                channels: 2,
                sample_rate: 48000,
                byte_rate: 192000,
                block_align: 4,
                bits_per_sample: 16,
                riff_size: 48,
                data_size: 12,
            }
        );
    }

    #[test]
    fn test_plan_rejects_empty_channel_list() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("buffer.json");
        std::fs::write(&path, r#"{"sample_rate": 48000, "channels": []}"#).unwrap();

        let err = plan_file(&path.to_string_lossy()).unwrap_err();
        assert_eq!(err.code, "WAV_001");

        let code = run(&path.to_string_lossy(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_plan_rejects_too_many_channels() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("buffer.json");
        let channels = vec!["[]"; 40000].join(",");
        std::fs::write(
            &path,
            format!(r#"{{"sample_rate": 1, "channels": [{}]}}"#, channels),
        )
        .unwrap();

        let err = plan_file(&path.to_string_lossy()).unwrap_err();
        assert_eq!(err.code, "WAV_001");
        assert!(err.message.contains("BlockAlign"));
    }
}
