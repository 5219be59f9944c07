use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated wall-clock time with whole-second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedTime(NaiveTime);

impl ParsedTime {
    /// Build a time from components, `None` if any is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(ParsedTime)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }

    /// Render as a 12-hour clock time, e.g. `1:30 PM`.
    pub fn to_12_hour(&self) -> String {
        if self.second() == 0 {
            self.0.format("%-I:%M %p").to_string()
        } else {
            self.0.format("%-I:%M:%S %p").to_string()
        }
    }
}

impl From<NaiveTime> for ParsedTime {
    fn from(time: NaiveTime) -> Self {
        // Leap-second and fractional parts are dropped.
        let whole = NaiveTime::from_hms_opt(time.hour(), time.minute(), time.second())
            .unwrap_or(time);
        ParsedTime(whole)
    }
}

impl From<ParsedTime> for NaiveTime {
    fn from(time: ParsedTime) -> Self {
        time.0
    }
}

impl fmt::Display for ParsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.second() == 0 {
            write!(f, "{:02}:{:02}", self.hour(), self.minute())
        } else {
            write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
        }
    }
}

impl Serialize for ParsedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ParsedTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        crate::parser::parse_time(&raw)
            .map_err(|e| serde::de::Error::custom(format!("{} ({:?})", e, e.input())))
    }
}

/// The AM/PM suffix of a 12-hour time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Classify a marker by its leading letter.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.chars().next()?.to_ascii_lowercase() {
            'a' => Some(Meridiem::Am),
            'p' => Some(Meridiem::Pm),
            _ => None,
        }
    }

    /// Convert a 12-hour clock hour to its 24-hour value.
    ///
    /// Hours outside `1..=12` have no 12-hour meaning and yield `None`.
    pub fn apply(self, hour: u32) -> Option<u32> {
        match (self, hour) {
            (_, h) if !(1..=12).contains(&h) => None,
            (Meridiem::Am, 12) => Some(0),
            (Meridiem::Pm, h) if h < 12 => Some(h + 12),
            (_, h) => Some(h),
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}
