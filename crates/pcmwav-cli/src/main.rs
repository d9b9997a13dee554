//! pcmwav CLI - encode float audio buffers to 16-bit PCM WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use pcmwav_cli::commands;
use pcmwav_cli::input::OptionOverrides;

/// pcmwav - Float audio buffer to WAV encoder
#[derive(Parser)]
#[command(name = "pcmwav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON audio buffer to a WAV file
    Encode {
        /// Path to the buffer file ({"sample_rate": .., "channels": [[..], ..]})
        #[arg(short, long)]
        input: String,

        /// Path of the WAV file to write
        #[arg(short, long)]
        output: String,

        /// JSON file with encoding options ({"layout": .., "scaling": ..})
        #[arg(long)]
        options: Option<String>,

        /// Sample order in the data chunk
        #[arg(long, value_parser = ["interleaved", "channel-grouped"])]
        layout: Option<String>,

        /// Float to 16-bit conversion
        #[arg(long, value_parser = ["clamped", "wrapping"])]
        scaling: Option<String>,

        /// Reproduce the legacy exporter byte-for-byte (channel-grouped, x65535 wrapping)
        #[arg(long)]
        bit_compatible: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the header and size an encode would produce
    Plan {
        /// Path to the buffer file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            options,
            layout,
            scaling,
            bit_compatible,
            json,
        } => {
            let overrides = OptionOverrides {
                options_file: options,
                layout,
                scaling,
                bit_compatible,
            };
            commands::encode::run(&input, &output, &overrides, json)
        }
        Commands::Plan { input, json } => commands::plan::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from([
            "pcmwav",
            "encode",
            "-i",
            "buffer.json",
            "-o",
            "out.wav",
            "--layout",
            "channel-grouped",
            "--bit-compatible",
        ])
        .unwrap();

        match cli.command {
            Commands::Encode {
                input,
                output,
                layout,
                scaling,
                bit_compatible,
                json,
                ..
            } => {
                assert_eq!(input, "buffer.json");
                assert_eq!(output, "out.wav");
                assert_eq!(layout.as_deref(), Some("channel-grouped"));
                assert_eq!(scaling, None);
                assert!(bit_compatible);
                assert!(!json);
            }
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_scaling() {
        let result = Cli::try_parse_from([
            "pcmwav",
            "encode",
            "-i",
            "buffer.json",
            "-o",
            "out.wav",
            "--scaling",
            "saturating",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_plan() {
        let cli = Cli::try_parse_from(["pcmwav", "plan", "--input", "buffer.json", "--json"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Plan { json: true, .. }));
    }
}
