use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized hours/minutes/seconds point within a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeCode {
    /// Build a timecode from three digit-only text fields.
    ///
    /// Rejects blank fields, non-digit text, and minute/second values
    /// outside 0-59. Invalid text never becomes a stored timecode.
    pub fn from_fields(hours: &str, minutes: &str, seconds: &str) -> Option<Self> {
        let hours = parse_digit_field(hours)?;
        let minutes = parse_digit_field(minutes)?;
        let seconds = parse_digit_field(seconds)?;

        if minutes > 59 || seconds > 59 {
            return None;
        }

        Some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Total elapsed seconds from the start of the video
    pub fn to_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

fn parse_digit_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// An ordered pair of timecodes bounding a clip.
///
/// Only constructed by the validator, so `start < end` always holds and
/// both bounds have been checked against the media duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeCode,
    pub end: TimeCode,
}

impl TimeRange {
    pub fn start_seconds(&self) -> u64 {
        self.start.to_seconds()
    }

    pub fn end_seconds(&self) -> u64 {
        self.end.to_seconds()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
