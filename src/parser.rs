//! Flexible wall-clock time parsing.
//!
//! Parsing runs in two phases. [`recognize`] matches a permissive grammar
//! that accepts numbers of any size (`64:99` is syntactically fine), then
//! [`to_24_hour`] and [`validate`] apply the AM/PM conversion and the
//! calendar range checks.
//!
//! Accepted layouts include `8`, `16`, `8:30`, `1742`, `1 01`, `13:01:05`,
//! `174205`, `12:30pm`, `1230 p m` and `1:30 p .  M  .`.

use crate::error::TimeError;
use crate::time::{Meridiem, ParsedTime};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

// Whitespace is ASCII only. Seconds may follow the minutes directly
// ("174205"), but only after a two-digit hour; see `recognize`.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x-u)
        ^\s*
        (?P<hour>[0-9]{1,2})
        \s*:?\s*
        (?P<minute>[0-9]{2})?
        \s*
        (?::?\s*(?P<second>[0-9]{2})\s*)?
        (?:(?P<ampm>[AaPp])\s*\.?\s*[Mm]?\s*\.?\s*)?
        $",
    )
    .expect("time pattern is valid")
});

/// Components recognised in a raw time string, before any range checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTokens<'a> {
    pub input: &'a str,
    pub hour: u32,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub meridiem: Option<Meridiem>,
}

/// Match `raw` against the time grammar without checking numeric ranges.
pub fn recognize(raw: &str) -> Result<TimeTokens<'_>, TimeError> {
    let caps = TIME_PATTERN.captures(raw).ok_or_else(|| {
        debug!("Time {:?} does not match the time grammar", raw);
        TimeError::invalid(raw)
    })?;

    let number = |name: &str| -> Result<Option<u32>, TimeError> {
        caps.name(name)
            .map(|m| m.as_str().parse::<u32>().map_err(|_| TimeError::invalid(raw)))
            .transpose()
    };

    let hour = number("hour")?.ok_or_else(|| TimeError::invalid(raw))?;

    // A five-digit run such as "12345" would otherwise read as 1:23:45.
    if let (Some(hour_match), Some(second_match)) = (caps.name("hour"), caps.name("second")) {
        let previous_end = caps.name("minute").unwrap_or(hour_match).end();
        if hour_match.as_str().len() == 1 && second_match.start() == previous_end {
            debug!("Time {:?} runs seconds into a one-digit hour", raw);
            return Err(TimeError::invalid(raw));
        }
    }

    let tokens = TimeTokens {
        input: raw,
        hour,
        minute: number("minute")?,
        second: number("second")?,
        meridiem: caps.name("ampm").and_then(|m| Meridiem::from_marker(m.as_str())),
    };
    trace!("Recognised {:?}", tokens);
    Ok(tokens)
}

/// Fill in defaults and convert a 12-hour reading to 24-hour components.
pub fn to_24_hour(tokens: &TimeTokens<'_>) -> Result<(u32, u32, u32), TimeError> {
    let minute = tokens.minute.unwrap_or(0);
    let second = tokens.second.unwrap_or(0);

    let hour = match tokens.meridiem {
        Some(meridiem) => meridiem.apply(tokens.hour).ok_or_else(|| {
            debug!("Hour {} in {:?} is not a 12-hour clock value", tokens.hour, tokens.input);
            TimeError::invalid(tokens.input)
        })?,
        None => tokens.hour,
    };

    Ok((hour, minute, second))
}

/// Range-check 24-hour components.
pub fn validate(input: &str, hour: u32, minute: u32, second: u32) -> Result<ParsedTime, TimeError> {
    ParsedTime::from_hms(hour, minute, second).ok_or_else(|| {
        debug!("Time {:?} is out of range ({}:{}:{})", input, hour, minute, second);
        TimeError::invalid(input)
    })
}

/// Parse a non-blank time string. Blank input is rejected.
pub fn parse_time(raw: &str) -> Result<ParsedTime, TimeError> {
    let tokens = recognize(raw)?;
    let (hour, minute, second) = to_24_hour(&tokens)?;
    validate(raw, hour, minute, second)
}

/// Parse a time string typed by a user.
///
/// Blank or whitespace-only input has nothing to parse and yields `Ok(None)`;
/// whether that is acceptable is up to the caller.
pub fn parse(raw: &str) -> Result<Option<ParsedTime>, TimeError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_time(raw).map(Some)
}

impl FromStr for ParsedTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}
