use std::fmt;
use std::str::FromStr;

use scraper::{ElementRef, Html};

use crate::parser::text;
use crate::structs::DropReason;
use crate::time::{Meridiem, TimeRange};

/// Where a session block keeps its time range. The schedule page changed
/// between editions, so both encodings are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `[2:30p-4:00p] Title`: the range is the bracketed prefix of the title,
    /// meridiem as a single letter.
    TitleRange,
    /// `[Panel] Title` plus a separate `Time: 2:30 - 3:45 PM` element.
    SessionField,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout `{0}`, expected `title` or `session`")]
pub struct UnknownLayout(String);

impl Layout {
    /// Picks `SessionField` when any session block carries a `.session`
    /// element.
    pub fn detect(html: &Html) -> Self {
        if html
            .select(selector!(".conf_block .session"))
            .next()
            .is_some()
        {
            Self::SessionField
        } else {
            Self::TitleRange
        }
    }

    /// chrono format of a time of day after [`Layout::clock`].
    pub(crate) fn time_format(self) -> &'static str {
        match self {
            Self::TitleRange => "%I:%M%p",
            Self::SessionField => "%I:%M %p",
        }
    }

    /// Turns an extracted time of day into something chrono's `%p` accepts.
    pub(crate) fn clock(self, time: &str) -> String {
        match self {
            Self::TitleRange => format!("{time}m"),
            Self::SessionField => time.to_string(),
        }
    }

    /// Extracts the time range and the bare title of a session block whose
    /// title header reads `header`.
    pub(crate) fn read(
        self,
        block: ElementRef,
        header: &str,
    ) -> Result<(TimeRange, String), DropReason> {
        let (prefix, title) = split_header(header);

        match self {
            Self::TitleRange => {
                let prefix = prefix.ok_or_else(|| DropReason::MalformedRange(header.into()))?;
                let range = TimeRange::split(prefix)
                    .ok_or_else(|| DropReason::MalformedRange(prefix.into()))?;

                Ok((range, title))
            }
            Self::SessionField => {
                let session = block
                    .select(selector!(".session"))
                    .next()
                    .map(text)
                    .ok_or(DropReason::MissingField("session"))?;

                Ok((session_range(&session)?, title))
            }
        }
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::TitleRange),
            "session" => Ok(Self::SessionField),
            _ => Err(UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TitleRange => "title",
            Self::SessionField => "session",
        })
    }
}

/// Splits `[prefix] title` at the first `]`. A header without a bracket is
/// all title.
fn split_header(header: &str) -> (Option<&str>, String) {
    match header.split_once(']') {
        Some((prefix, title)) => (
            Some(prefix.trim().trim_start_matches('[')),
            title.trim_start().to_string(),
        ),
        None => (None, header.trim().to_string()),
    }
}

/// `Time: 2:30 - 3:45 PM` → `2:30 PM`, `3:45 PM`. A start without a
/// meridiem shares the end's, unless that would put it after the end
/// (`11:00 - 12:30 PM` starts at `11:00 AM`).
fn session_range(session: &str) -> Result<TimeRange, DropReason> {
    let times = session.trim_start_matches(|c: char| !c.is_ascii_digit());
    let mut range =
        TimeRange::split(times).ok_or_else(|| DropReason::MalformedRange(session.into()))?;

    if Meridiem::of(&range.start).is_none() {
        if let Some(token) = Meridiem::token(&range.end) {
            let end_clock = range.end[..range.end.len() - token.len()].trim_end();
            let token = match (minutes_into_half(&range.start), minutes_into_half(end_clock)) {
                (Some(start), Some(end)) if start > end => opposite(token),
                _ => token.to_string(),
            };
            range.start = format!("{} {token}", range.start);
        }
    }

    Ok(range)
}

/// Minutes since 12 o'clock of an `h:mm` clock reading.
fn minutes_into_half(clock: &str) -> Option<u32> {
    let (hour, minute) = clock.trim().split_once(':')?;
    let (hour, minute) = (hour.parse::<u32>().ok()?, minute.parse::<u32>().ok()?);
    Some((hour % 12) * 60 + minute)
}

/// `PM` → `AM`, `a` → `p`, keeping the token's form.
fn opposite(token: &str) -> String {
    let mut chars = token.chars();
    let flipped = match chars.next() {
        Some('a') => 'p',
        Some('p') => 'a',
        Some('A') => 'P',
        Some('P') => 'A',
        Some(other) => other,
        None => return String::new(),
    };
    std::iter::once(flipped).chain(chars).collect()
}
