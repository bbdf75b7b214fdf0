//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{Audience, DEFAULT_LENGTH, MIN_POST_COUNT, Tone};

/// postdraft - search-grounded LinkedIn post drafts
#[derive(Parser)]
#[command(
    name = "pd",
    about = "Generate LinkedIn post drafts grounded in web search",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the form UI and the generate endpoint (default)
    Serve {
        /// Address to bind (overrides config)
        #[arg(short, long)]
        bind: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate drafts for one topic and print them
    Generate {
        /// Topic to write about
        topic: String,

        /// Tone: professional, casual, inspirational
        #[arg(short, long, default_value_t = Tone::default())]
        tone: Tone,

        /// Audience: general, tech, business
        #[arg(short, long, default_value_t = Audience::default())]
        audience: Audience,

        /// Approximate words per post
        #[arg(long, default_value_t = DEFAULT_LENGTH)]
        length: u32,

        /// Number of drafts (minimum 3)
        #[arg(short = 'n', long, default_value_t = MIN_POST_COUNT)]
        count: u32,

        /// Write a paginated text export of the drafts to this file
        #[arg(short, long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["pd"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["pd", "serve", "--port", "8080", "-b", "0.0.0.0"]).unwrap();
        match cli.command {
            Some(Command::Serve { bind, port }) => {
                assert_eq!(bind.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("Expected Serve, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["pd", "generate", "remote work"]).unwrap();
        match cli.command {
            Some(Command::Generate {
                topic,
                tone,
                audience,
                length,
                count,
                export,
            }) => {
                assert_eq!(topic, "remote work");
                assert_eq!(tone, Tone::Professional);
                assert_eq!(audience, Audience::General);
                assert_eq!(length, 200);
                assert_eq!(count, 3);
                assert!(export.is_none());
            }
            other => panic!("Expected Generate, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_options() {
        let cli = Cli::try_parse_from([
            "pd", "-l", "debug", "generate", "hiring", "-t", "casual", "-a", "tech", "-n", "5", "-e", "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Some(Command::Generate {
                tone,
                audience,
                count,
                export,
                ..
            }) => {
                assert_eq!(tone, Tone::Casual);
                assert_eq!(audience, Audience::Tech);
                assert_eq!(count, 5);
                assert_eq!(export, Some(PathBuf::from("out.txt")));
            }
            other => panic!("Expected Generate, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_rejects_unknown_tone() {
        assert!(Cli::try_parse_from(["pd", "generate", "hiring", "--tone", "snarky"]).is_err());
    }
}
