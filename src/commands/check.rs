use super::ParseOutcome;
use crate::config::ClockFormat;
use crate::field::TimeField;
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Counts from validating a batch of lines
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub valid: usize,
    pub invalid: usize,
}

pub fn execute(field: &TimeField, file: Option<&Path>, format: ClockFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            check_lines(field, BufReader::new(file), format, &mut out)?
        }
        None => check_lines(field, io::stdin().lock(), format, &mut out)?,
    };

    if summary.invalid > 0 {
        return Err(anyhow!("{} invalid time(s) found", summary.invalid));
    }
    Ok(())
}

/// Validate one time per line, skipping blank lines.
pub fn check_lines<R: BufRead, W: Write>(
    field: &TimeField,
    reader: R,
    format: ClockFormat,
    out: &mut W,
) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input line")?;
        if line.trim().is_empty() {
            debug!("Skipping blank line {}", index + 1);
            continue;
        }

        let outcome = ParseOutcome::evaluate(field, &line);
        if outcome.is_ok() {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        writeln!(out, "line {}: {}", index + 1, outcome.render(format))?;
    }

    writeln!(out, "{} valid, {} invalid", summary.valid, summary.invalid)?;
    info!("Checked {} line(s)", summary.valid + summary.invalid);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_check_lines() {
        let input = "8:30\n\n  \n1340am\n12 30 p.m.\n";
        let mut out = Vec::new();
        let summary = check_lines(
            &TimeField::default(),
            Cursor::new(input),
            ClockFormat::Twelve,
            &mut out,
        )
        .unwrap();

        assert_eq!(summary, CheckSummary { valid: 2, invalid: 1 });
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "line 1: \"8:30\" => 8:30 AM");
        assert_eq!(lines[1], "line 4: \"1340am\" => error: Enter a valid time.");
        assert_eq!(lines[2], "line 5: \"12 30 p.m.\" => 12:30 PM");
        assert_eq!(lines[3], "2 valid, 1 invalid");
    }

    #[test]
    fn test_check_missing_file() {
        let err = execute(
            &TimeField::default(),
            Some(Path::new("/definitely/not/here.txt")),
            ClockFormat::TwentyFour,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to open"));
    }
}
