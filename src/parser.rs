use regex::Regex;

/// One detected start/end timestamp pair, as normalized digit fields.
///
/// Fields are ordered `[hours, minutes, seconds]`; two-group timestamps
/// (`MM:SS`) get an implicit `"0"` hours field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCandidate {
    pub start: [String; 3],
    pub end: [String; 3],
}

/// Detects clip time ranges in pasted free text.
///
/// The marker grammar is a closing parenthesis followed by two timestamps
/// separated by a dash: `) 1:30-2:45`. Timestamps are digit groups joined
/// by `:` or `.`, either `MM:SS` or `HH:MM:SS`. A `.` is always a group
/// separator, never a fractional-seconds decimal.
pub struct TimeParser {
    marker: Regex,
}

impl TimeParser {
    pub fn new() -> Self {
        // The en dash shows up when times are pasted from web pages.
        // The dash binds tightly: "1:30-2:45" is a range, "1:30 - 2:45" is prose.
        let marker = Regex::new(
            r"\)\s*(\d+[:.]\d+(?:[:.]\d+)?)[-\u{2013}](\d+[:.]\d+(?:[:.]\d+)?)",
        )
        .expect("marker pattern is valid");

        Self { marker }
    }

    /// Scan `text` for timestamp markers, in document order.
    ///
    /// Pure and restartable: the same text always yields the same sequence.
    /// Text between markers is ignored; a marker whose timestamps fail the
    /// digit-group rules is skipped without aborting the scan.
    pub fn parse<'a>(&'a self, text: &'a str) -> impl Iterator<Item = RangeCandidate> + 'a {
        self.marker.captures_iter(text).filter_map(|cap| {
            let start = split_timestamp(&cap[1])?;
            let end = split_timestamp(&cap[2])?;
            Some(RangeCandidate { start, end })
        })
    }
}

impl Default for TimeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a timestamp on `:` or `.` into `[hours, minutes, seconds]` fields.
fn split_timestamp(ts: &str) -> Option<[String; 3]> {
    let groups: Vec<&str> = ts.split(|c| c == ':' || c == '.').collect();

    let (h, m, s) = match groups.as_slice() {
        [m, s] => ("0", *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };

    if [h, m, s]
        .iter()
        .any(|g| g.is_empty() || !g.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    Some([h.to_string(), m.to_string(), s.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(h: &str, m: &str, s: &str) -> [String; 3] {
        [h.to_string(), m.to_string(), s.to_string()]
    }

    #[test]
    fn test_detects_basic_range() {
        let parser = TimeParser::new();
        let candidates: Vec<_> = parser.parse("1. Intro) 1:30-2:45 covers the setup").collect();

        assert_eq!(
            candidates,
            vec![RangeCandidate {
                start: fields("0", "1", "30"),
                end: fields("0", "2", "45"),
            }]
        );
    }

    #[test]
    fn test_dot_is_group_separator() {
        let parser = TimeParser::new();
        let candidates: Vec<_> = parser.parse(") 0:05.20-0:06.10").collect();

        // "0:05.20" is HH:MM:SS with mixed separators, not 5.20 minutes.
        assert_eq!(
            candidates,
            vec![RangeCandidate {
                start: fields("0", "05", "20"),
                end: fields("0", "06", "10"),
            }]
        );
    }

    #[test]
    fn test_short_range_with_dot() {
        let parser = TimeParser::new();
        let candidates: Vec<_> = parser.parse(") 0.05-0.10").collect();

        assert_eq!(
            candidates,
            vec![RangeCandidate {
                start: fields("0", "0", "05"),
                end: fields("0", "0", "10"),
            }]
        );
    }

    #[test]
    fn test_en_dash_separator() {
        let parser = TimeParser::new();
        let candidates: Vec<_> = parser.parse(") 10:00\u{2013}12:30").collect();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].start, fields("0", "10", "00"));
    }

    #[test]
    fn test_three_group_timestamps() {
        let parser = TimeParser::new();
        let candidates: Vec<_> = parser.parse(") 1:02:03-1:04:05").collect();

        assert_eq!(
            candidates,
            vec![RangeCandidate {
                start: fields("1", "02", "03"),
                end: fields("1", "04", "05"),
            }]
        );
    }

    #[test]
    fn test_multiple_matches_in_document_order() {
        let parser = TimeParser::new();
        let text = "Warmup) 0:10-0:50 then drills) 2:00-3:15 and sparring) 5:00-9:59";
        let candidates: Vec<_> = parser.parse(text).collect();

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].start, fields("0", "0", "10"));
        assert_eq!(candidates[1].start, fields("0", "2", "00"));
        assert_eq!(candidates[2].end, fields("0", "9", "59"));
    }

    #[test]
    fn test_spaced_dash_is_not_a_marker() {
        let parser = TimeParser::new();
        assert_eq!(parser.parse(") 1:30 - 2:45").count(), 0);
        assert_eq!(parser.parse(") 1:30 \u{2013} 2:45").count(), 0);
    }

    #[test]
    fn test_no_markers_yields_nothing() {
        let parser = TimeParser::new();
        assert_eq!(parser.parse("no timestamps here 1:30").count(), 0);
    }

    #[test]
    fn test_restartable() {
        let parser = TimeParser::new();
        let text = ") 1:30-2:45";
        let first: Vec<_> = parser.parse(text).collect();
        let second: Vec<_> = parser.parse(text).collect();
        assert_eq!(first, second);
    }
}
