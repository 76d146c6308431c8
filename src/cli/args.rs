//! CLI argument definitions using clap
//!
//! Commands:
//! - strlens serve [--config <path>] [--host H] [--port P] [--data-dir D] [--memory]
//! - strlens analyze <value>
//! - strlens interpret <phrase>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// strlens - string analysis service
#[derive(Parser, Debug)]
#[command(name = "strlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Directory holding the string log
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Keep records in memory only
        #[arg(long)]
        memory: bool,
    },

    /// Print the properties of a single value
    Analyze {
        /// Value to analyze
        value: String,
    },

    /// Print the filters a phrase translates to
    Interpret {
        /// Natural-language phrase
        phrase: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "strlens", "serve", "--port", "9000", "--data-dir", "/tmp/s", "--memory",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                host,
                port,
                data_dir,
                memory,
            } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
                assert_eq!(data_dir, Some(PathBuf::from("/tmp/s")));
                assert!(memory);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_interpret() {
        let cli = Cli::try_parse_from(["strlens", "interpret", "single word strings"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Interpret { ref phrase } if phrase == "single word strings"
        ));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["strlens", "serve", "--port", "70000"]).is_err());
    }
}
