//! Encode command implementation
//!
//! Loads a JSON audio buffer, encodes it to 16-bit PCM WAV and writes the file.

use anyhow::{Context, Result};
use colored::Colorize;
use pcmwav::{AudioBuffer, SampleLayout, WavResult};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_buffer, OptionOverrides};

use super::json_output::{error_codes, EncodeOutput, EncodeReport, HeaderInfo, JsonError};

/// Run the encode command
///
/// # Arguments
/// * `input` - Path to the JSON buffer file
/// * `output` - Path of the WAV file to write
/// * `overrides` - Options file and flag overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input: &str,
    output: &str,
    overrides: &OptionOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(input, output, overrides)
    } else {
        run_human(input, output, overrides)
    }
}

/// Run encode with human-readable (colored) output
fn run_human(input: &str, output: &str, overrides: &OptionOverrides) -> Result<ExitCode> {
    println!("{}", "Encoding buffer:".cyan().bold());
    println!("  {} {}", "Input:".dimmed(), input);

    let report = encode_file(input, output, overrides).map_err(|e| anyhow::anyhow!(e.message))?;

    println!(
        "  {} layout={}, scaling={}",
        "Options:".dimmed(),
        report.layout,
        report.scaling
    );
    for warning in &report.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    println!(
        "\n{} {} ({} bytes, {} ch, {} Hz, {:.3}s)",
        "Wrote".green().bold(),
        report.output,
        report.bytes,
        report.header.channels,
        report.header.sample_rate,
        report.duration_seconds
    );
    println!("{} {}", "PCM hash:".dimmed(), &report.pcm_hash[..16]);

    Ok(ExitCode::SUCCESS)
}

/// Run encode with machine-readable JSON output
fn run_json(input: &str, output: &str, overrides: &OptionOverrides) -> Result<ExitCode> {
    let (result, code) = match encode_file(input, output, overrides) {
        Ok(report) => (EncodeOutput::success(input.to_string(), report), ExitCode::SUCCESS),
        Err(error) => (
            EncodeOutput::failure(input.to_string(), vec![error]),
            ExitCode::from(1),
        ),
    };

    let json = serde_json::to_string_pretty(&result).with_context(|| {
        format!(
            "{}: failed to serialize encode output",
            error_codes::JSON_SERIALIZE
        )
    })?;
    println!("{}", json);

    Ok(code)
}

/// Loads, encodes and writes one buffer.
pub fn encode_file(
    input: &str,
    output: &str,
    overrides: &OptionOverrides,
) -> Result<EncodeReport, JsonError> {
    let options = overrides.resolve().map_err(|e| JsonError::from(&e))?;
    let loaded =
        load_buffer(Path::new(input)).map_err(|e| JsonError::from(&e).with_file(input))?;
    let buffer = &loaded.buffer;

    let result = WavResult::encode(buffer, &options).map_err(|e| JsonError::from(&e))?;

    fs::write(output, &result.wav_data).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("failed to write '{}': {}", output, e),
        )
        .with_file(output)
    })?;

    let mut warnings = Vec::new();
    if options.layout == SampleLayout::ChannelGrouped && buffer.number_of_channels() > 1 {
        warnings.push(format!(
            "channel-grouped layout with {} channels is not standard WAV; players will not decode it correctly",
            buffer.number_of_channels()
        ));
    }

    Ok(EncodeReport {
        output: output.to_string(),
        bytes: result.wav_data.len(),
        frames: result.num_frames,
        duration_seconds: result.duration_seconds(),
        layout: options.layout.to_string(),
        scaling: options.scaling.to_string(),
        bit_compatible: options.is_bit_compatible(),
        pcm_hash: result.pcm_hash.clone(),
        source_hash: loaded.source_hash.clone(),
        header: HeaderInfo::new(&result.format, result.num_frames),
        warnings,
    })
}
