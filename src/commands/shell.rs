use super::{ParseOutcome, help};
use crate::config::{ClockFormat, Config};
use crate::field::TimeField;
use anyhow::Result;
use log::{error, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// What the shell should do after a line has been handled
#[derive(Debug, PartialEq, Eq)]
pub enum ShellAction {
    Print(String),
    Help,
    Exit,
    Nothing,
}

pub struct Shell {
    field: TimeField,
    format: ClockFormat,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self { field: TimeField::from_config(&config.field), format: config.output.format }
    }

    pub fn handle_line(&mut self, line: &str) -> ShellAction {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ShellAction::Nothing;
        }

        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            return ShellAction::Exit;
        }
        if trimmed.eq_ignore_ascii_case("help") {
            return ShellAction::Help;
        }
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        if words[0].eq_ignore_ascii_case("format") {
            return match words[1..] {
                [arg] if arg.eq_ignore_ascii_case("12h") => {
                    self.format = ClockFormat::Twelve;
                    ShellAction::Print("Output format set to 12h".to_string())
                }
                [arg] if arg.eq_ignore_ascii_case("24h") => {
                    self.format = ClockFormat::TwentyFour;
                    ShellAction::Print("Output format set to 24h".to_string())
                }
                _ => ShellAction::Print(format!(
                    "Unknown format '{}'. Use 12h or 24h.",
                    words[1..].join(" ")
                )),
            };
        }

        ShellAction::Print(ParseOutcome::evaluate(&self.field, line).render(self.format))
    }
}

pub fn run(config: &Config) -> Result<()> {
    info!("Starting walktime shell");

    let mut shell = Shell::new(config);
    let mut rl = DefaultEditor::new()?;
    println!("Welcome to walktime! Type a time, or 'help' for commands.");

    loop {
        match rl.readline("time> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match shell.handle_line(&line) {
                    ShellAction::Print(text) => println!("{}", text),
                    ShellAction::Help => help::print_help(),
                    ShellAction::Exit => break,
                    ShellAction::Nothing => {}
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                error!("Failed to read line: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
