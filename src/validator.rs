use crate::timecode::{TimeCode, TimeRange};
use serde::Serialize;
use thiserror::Error;

/// Why a candidate time range was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// A field is blank, non-numeric, or out of range
    #[error("time frame has missing or non-numeric fields")]
    IncompleteRange,

    /// Start time falls at or past the end of the video
    #[error("start time is beyond the video duration")]
    StartBeyondDuration,

    /// End time runs past the end of the video
    #[error("end time is beyond the video duration")]
    EndBeyondDuration,

    /// Start does not come strictly before end
    #[error("start time is not before end time")]
    NonPositiveRange,
}

/// Check one candidate range against the media duration.
///
/// `start` and `end` are `[hours, minutes, seconds]` text fields. Rules are
/// applied in order: field validity, start vs duration, end vs duration,
/// start vs end. A rejected candidate is never corrected or clamped; the
/// caller skips it. End exactly at the duration is allowed.
pub fn validate(
    start: [&str; 3],
    end: [&str; 3],
    duration: f64,
) -> Result<TimeRange, ValidationError> {
    let start = TimeCode::from_fields(start[0], start[1], start[2])
        .ok_or(ValidationError::IncompleteRange)?;
    let end =
        TimeCode::from_fields(end[0], end[1], end[2]).ok_or(ValidationError::IncompleteRange)?;

    let start_seconds = start.to_seconds() as f64;
    let end_seconds = end.to_seconds() as f64;

    if start_seconds >= duration {
        return Err(ValidationError::StartBeyondDuration);
    }
    if end_seconds > duration {
        return Err(ValidationError::EndBeyondDuration);
    }
    if start_seconds >= end_seconds {
        return Err(ValidationError::NonPositiveRange);
    }

    Ok(TimeRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        let range = validate(["0", "1", "30"], ["0", "2", "45"], 600.0).unwrap();
        assert_eq!(range.start_seconds(), 90);
        assert_eq!(range.end_seconds(), 165);
        assert!(range.start_seconds() < range.end_seconds());
    }

    #[test]
    fn test_end_exactly_at_duration_is_allowed() {
        let range = validate(["0", "0", "10"], ["0", "1", "40"], 100.0).unwrap();
        assert_eq!(range.end_seconds(), 100);
    }

    #[test]
    fn test_blank_field_is_incomplete() {
        assert_eq!(
            validate(["0", "", "30"], ["0", "2", "45"], 600.0),
            Err(ValidationError::IncompleteRange)
        );
    }

    #[test]
    fn test_non_digit_field_is_incomplete() {
        assert_eq!(
            validate(["0", "1", "30"], ["0", "2x", "45"], 600.0),
            Err(ValidationError::IncompleteRange)
        );
    }

    #[test]
    fn test_start_beyond_duration() {
        // start 110s, end 100s against a 100s video: start check wins
        assert_eq!(
            validate(["0", "1", "50"], ["0", "1", "40"], 100.0),
            Err(ValidationError::StartBeyondDuration)
        );
    }

    #[test]
    fn test_start_equal_to_duration_is_rejected() {
        assert_eq!(
            validate(["0", "1", "40"], ["0", "1", "50"], 100.0),
            Err(ValidationError::StartBeyondDuration)
        );
    }

    #[test]
    fn test_end_beyond_duration() {
        assert_eq!(
            validate(["0", "0", "10"], ["0", "2", "00"], 100.0),
            Err(ValidationError::EndBeyondDuration)
        );
    }

    #[test]
    fn test_non_positive_range() {
        assert_eq!(
            validate(["0", "0", "10"], ["0", "0", "5"], 100.0),
            Err(ValidationError::NonPositiveRange)
        );
    }

    #[test]
    fn test_zero_length_range_is_rejected() {
        assert_eq!(
            validate(["0", "0", "10"], ["0", "0", "10"], 100.0),
            Err(ValidationError::NonPositiveRange)
        );
    }
}
