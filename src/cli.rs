use crate::config::ClockFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Walktime - forgiving time parsing for walk and meeting schedules
#[derive(Debug, Parser)]
#[command(name = "walktime")]
#[command(about = "Parse loosely typed meeting times like 1:30pm, 1330 or 1 30 p.m.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, enters the interactive shell)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse one or more times
    #[command(alias = "p")]
    Parse {
        /// Times to parse (quote times containing spaces)
        #[arg(required = true, allow_hyphen_values = true)]
        times: Vec<String>,

        /// Treat blank input as "no value" instead of an error
        #[arg(long)]
        optional: bool,

        /// Output clock format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<ClockFormat>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a file of times, one per line
    Check {
        /// File to read (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output clock format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<ClockFormat>,
    },

    /// View or initialise configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show the active configuration
    Show,

    /// Print the config file location
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_accepts_hyphenated_times() {
        let cli = Cli::try_parse_from(["walktime", "parse", "--format", "12h", "-2:30", "8:30"])
            .unwrap();
        match cli.command {
            Some(Commands::Parse { times, format, optional, json }) => {
                assert_eq!(times, vec!["-2:30".to_string(), "8:30".to_string()]);
                assert_eq!(format, Some(ClockFormat::Twelve));
                assert!(!optional);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["walktime", "--verbose"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
