use chrono::DateTime;
use chrono_tz::Tz;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::time::TimestampError;

#[cfg(feature = "serde")]
fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Tz>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339())
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Schedule {
    pub events: Vec<Event>,
    /// Sessions that were found but could not be turned into an event.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub dropped: Vec<DroppedSession>,
}

/// One session with both ends resolved in the schedule's timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Event {
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_timestamp"))]
    pub start: DateTime<Tz>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_timestamp"))]
    pub end: DateTime<Tz>,
    pub title: String,
    pub presenter: String,
    pub location: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedSession {
    pub day: String,
    pub header: String,
    pub reason: DropReason,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropReason {
    #[error("missing `{0}` element")]
    MissingField(&'static str),
    #[error("malformed time range `{0}`")]
    MalformedRange(String),
    #[error("invalid start: {0}")]
    InvalidStart(TimestampError),
    #[error("invalid end: {0}")]
    InvalidEnd(TimestampError),
}
