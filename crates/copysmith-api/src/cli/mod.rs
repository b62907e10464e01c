//! CLI command definitions for the `copysmith` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod generate;
pub mod types;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use copysmith_observe::LogFormat;

/// Generate marketing copy from a short product brief.
#[derive(Parser)]
#[command(name = "copysmith", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormatArg::Text, global = true)]
    pub log_format: LogFormatArg,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the copy generation server.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Provider model (overrides config.toml).
        #[arg(long)]
        model: Option<String>,
    },

    /// Fill in the copy form and print the result.
    Generate(generate::GenerateArgs),

    /// List copy types and tones.
    Types,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copysmith_types::copy::{CopyType, Tone};

    #[test]
    fn cli_definition_is_consistent() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn parses_generate_form_fields() {
        let cli = Cli::try_parse_from([
            "copysmith",
            "generate",
            "--type",
            "tagline",
            "--product",
            "Acme Suite",
            "--audience",
            "SMBs",
            "--benefits",
            "fast, cheap",
            "--tone",
            "playful",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let request = args.to_request();
        assert_eq!(request.copy_type, CopyType::Tagline);
        assert_eq!(request.tone, Tone::Playful);
        assert_eq!(request.product, "Acme Suite");
        assert!(request.additional_info.is_none());
    }

    #[test]
    fn rejects_unknown_copy_type_on_cli() {
        let result = Cli::try_parse_from([
            "copysmith", "generate", "--type", "haiku", "--product", "Acme",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unlisted_tone_on_cli() {
        let result = Cli::try_parse_from([
            "copysmith", "generate", "--product", "Acme", "--tone", "witty",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_tone_is_case_insensitive_and_type_defaults() {
        let cli = Cli::try_parse_from([
            "copysmith", "generate", "--product", "Acme", "--tone", "Urgent",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.copy_type, CopyType::WebsiteHeadline);
        assert_eq!(args.tone, Tone::Urgent);
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::try_parse_from(["copysmith", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Commands::Serve { port, host, model } => {
                assert_eq!(port, Some(8080));
                assert!(host.is_none());
                assert!(model.is_none());
            }
            _ => panic!("expected serve"),
        }
    }
}
