use chrono::{DateTime, Days, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Leading part of every timestamp: the day label as printed on the page,
/// e.g. `Friday 19 Apr 2024`.
const DAY_FORMAT: &str = "%A %d %b %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Reads the trailing meridiem token of a time of day. Both the single
    /// letter (`2:30p`) and the full word (`2:30 PM`) forms are recognised.
    pub fn of(time: &str) -> Option<Self> {
        let time = time.trim_end();
        let clock = time.trim_end_matches(|c: char| c.is_ascii_alphabetic());

        match time[clock.len()..].to_ascii_lowercase().as_str() {
            "a" | "am" => Some(Self::Am),
            "p" | "pm" => Some(Self::Pm),
            _ => None,
        }
    }

    /// The raw token as written at the end of `time`, if any.
    pub(crate) fn token(time: &str) -> Option<&str> {
        let time = time.trim_end();
        let clock = time.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        Self::of(time).map(|_| &time[clock.len()..])
    }
}

/// Start and end time of day of a session, exactly as extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    /// Splits `2:30p-4:00p` or `2:30 - 3:45 PM` on the first hyphen.
    pub fn split(s: &str) -> Option<Self> {
        let (start, end) = s.split_once('-')?;
        let (start, end) = (start.trim(), end.trim());

        if start.is_empty() || end.is_empty() {
            return None;
        }

        Some(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// A session starting in the afternoon and ending in the morning ends on
    /// the following day.
    pub fn crosses_midnight(&self) -> bool {
        matches!(
            (Meridiem::of(&self.start), Meridiem::of(&self.end)),
            (Some(Meridiem::Pm), Some(Meridiem::Am))
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("`{input}` does not match `{format}`")]
    Syntax { input: String, format: String },
    #[error("{0} does not exist in the schedule timezone")]
    Nonexistent(NaiveDateTime),
    #[error("date out of range")]
    Overflow,
}

/// Parses `<day label> <time of day>` as a wall-clock time. `time_format` is
/// the chrono format of the time of day alone.
pub fn parse_local(
    day: &str,
    time: &str,
    time_format: &str,
) -> Result<NaiveDateTime, TimestampError> {
    let input = format!("{} {}", day.trim(), time.trim());
    let format = format!("{DAY_FORMAT} {time_format}");

    NaiveDateTime::parse_from_str(&input, &format)
        .map_err(|_| TimestampError::Syntax { input, format })
}

/// Anchors a wall-clock time to `tz`. Ambiguous times resolve to the earlier
/// instant; times skipped by a daylight saving transition are rejected.
pub fn localize(local: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, TimestampError> {
    tz.from_local_datetime(&local)
        .earliest()
        .ok_or(TimestampError::Nonexistent(local))
}

pub fn next_day(local: NaiveDateTime) -> Result<NaiveDateTime, TimestampError> {
    local
        .checked_add_days(Days::new(1))
        .ok_or(TimestampError::Overflow)
}
