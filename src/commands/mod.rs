use crate::cli::{Cli, Commands};
use crate::config::{ClockFormat, Config};
use crate::field::TimeField;
use crate::time::ParsedTime;
use anyhow::Result;
use serde::Serialize;

pub mod check;
pub mod config;
pub mod help;
pub mod parse;
pub mod shell;

/// Result of cleaning a single input through a time field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub input: String,
    pub time: Option<ParsedTime>,
    pub error: Option<String>,
}

impl ParseOutcome {
    pub fn evaluate(field: &TimeField, input: &str) -> Self {
        match field.clean(input) {
            Ok(time) => Self { input: input.to_string(), time, error: None },
            Err(err) => {
                Self { input: input.to_string(), time: None, error: Some(err.message().to_string()) }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// One-line human readable rendering, e.g. `"1:30pm" => 13:30`.
    pub fn render(&self, format: ClockFormat) -> String {
        let value = match (&self.time, &self.error) {
            (_, Some(error)) => format!("error: {}", error),
            (Some(time), None) => format_time(time, format),
            (None, None) => "(no value)".to_string(),
        };
        format!("{:?} => {}", self.input, value)
    }
}

pub fn format_time(time: &ParsedTime, format: ClockFormat) -> String {
    match format {
        ClockFormat::TwentyFour => time.to_string(),
        ClockFormat::Twelve => time.to_12_hour(),
    }
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Some(Commands::Parse { times, optional, format, json }) => {
            let mut field = TimeField::from_config(&config.field);
            if optional {
                field.required = false;
            }
            let format = format.unwrap_or(config.output.format);
            parse::execute(&field, &times, format, json, &mut std::io::stdout())
        }
        Some(Commands::Check { file, format }) => {
            let field = TimeField::from_config(&config.field);
            let format = format.unwrap_or(config.output.format);
            check::execute(&field, file.as_deref(), format)
        }
        Some(Commands::Config { action }) => config::execute(action, &config, cli.config.as_deref()),
        None => shell::run(&config),
    }
}
