use super::ParseOutcome;
use crate::config::ClockFormat;
use crate::field::TimeField;
use anyhow::{Result, anyhow};
use log::info;
use std::io::Write;

/// Parse each input and report the results to `out`.
///
/// Fails after reporting if any input was rejected.
pub fn execute<W: Write>(
    field: &TimeField,
    inputs: &[String],
    format: ClockFormat,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let outcomes: Vec<ParseOutcome> =
        inputs.iter().map(|input| ParseOutcome::evaluate(field, input)).collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &outcomes)?;
        writeln!(out)?;
    } else {
        for outcome in &outcomes {
            writeln!(out, "{}", outcome.render(format))?;
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!("Parsed {} time(s), {} rejected", outcomes.len(), failed);

    if failed > 0 {
        return Err(anyhow!("{} of {} times could not be parsed", failed, outcomes.len()));
    }
    Ok(())
}
